//! Response validation and decoding.
//!
//! [`map`] turns a delivered response into either the decoded items or
//! [`LoadError::InvalidData`].  It is pure: no I/O, no state between calls.
//!
//! Wire shape:
//!
//! ```text
//! { "items": [
//!     { "id": "<uuid>", "description": "...", "location": "...", "image": "<url>" }
//! ] }
//! ```

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer};
use tracing::debug;
use url::Url;
use uuid::Uuid;

use super::{FeedItem, LoadError, LoadFeedResult};
use crate::http::HttpResponse;

/// The only status treated as success.
const OK_200: u16 = 200;

#[derive(Deserialize)]
struct Root {
    items: Vec<Item>,
}

#[derive(Deserialize)]
struct Item {
    #[serde(deserialize_with = "hyphenated_uuid")]
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

/// Accept only the 8-4-4-4-12 form; `Uuid::parse_str` alone would also take
/// the simple, braced and URN forms.
fn hyphenated_uuid<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if raw.len() != uuid::fmt::Hyphenated::LENGTH {
        return Err(de::Error::invalid_value(
            Unexpected::Str(&raw),
            &"a hyphenated UUID",
        ));
    }
    Uuid::parse_str(&raw).map_err(de::Error::custom)
}

impl Item {
    fn into_feed_item(self) -> FeedItem {
        FeedItem::new(self.id, self.description, self.location, self.image)
    }
}

/// Validate `response` and decode `data` into feed items.
///
/// The body is not looked at unless the status is 200.  A single bad
/// element rejects the whole payload.
pub(crate) fn map(data: &[u8], response: &HttpResponse) -> LoadFeedResult {
    if response.status != OK_200 {
        debug!(status = response.status, "rejecting response with non-200 status");
        return Err(LoadError::InvalidData);
    }

    let root: Root = serde_json::from_slice(data).map_err(|e| {
        debug!(error = %e, "rejecting undecodable payload");
        LoadError::InvalidData
    })?;

    debug!(count = root.items.len(), "decoded feed items");
    Ok(root.items.into_iter().map(Item::into_feed_item).collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
