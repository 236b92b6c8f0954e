//! The core data type produced by a successful load.
//!
//! `FeedItem` values are only ever created by decoding a validated response
//! (see [`super::mapper`]) and are never mutated afterwards.

use url::Url;
use uuid::Uuid;

/// A single feed entry: an image plus optional caption data.
///
/// Equality is structural, so two loads of the same payload compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedItem {
    /// Unique identifier of the entry.
    pub id: Uuid,

    /// Optional human-readable description.
    pub description: Option<String>,

    /// Optional location label (e.g. "Berlin, Germany").
    pub location: Option<String>,

    /// Where the associated image lives.
    ///
    /// Sent on the wire as `image`.
    pub url: Url,
}

impl FeedItem {
    pub fn new(id: Uuid, description: Option<String>, location: Option<String>, url: Url) -> Self {
        Self {
            id,
            description,
            location,
            url,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
