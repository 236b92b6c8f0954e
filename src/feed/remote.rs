//! HTTP-backed [`FeedLoader`].
//!
//! One `load()` issues exactly one GET through the injected client and
//! delivers exactly one classified result.  No retries, no caching, no
//! timeout of its own.

use std::sync::{Arc, Weak};

use tracing::{debug, trace, warn};
use url::Url;

use super::{mapper, FeedCompletion, FeedLoader, LoadError};
use crate::http::HttpClient;

/// Loads a feed from a fixed URL through a shared [`HttpClient`].
///
/// Dropping the loader stops delivery of any results still in flight: their
/// completions are discarded instead of being called.  The requests
/// themselves are not cancelled.
pub struct RemoteFeedLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
    /// Pending requests observe this weakly; once the loader is gone the
    /// upgrade fails and the result is dropped.
    alive: Arc<()>,
}

impl RemoteFeedLoader {
    /// Create a loader for `url`.  Nothing is fetched until [`load`] is
    /// called.
    ///
    /// [`load`]: FeedLoader::load
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url,
            client,
            alive: Arc::new(()),
        }
    }

    /// The URL every `load()` fetches.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl FeedLoader for RemoteFeedLoader {
    fn load(&self, completion: FeedCompletion) {
        let alive: Weak<()> = Arc::downgrade(&self.alive);
        debug!(url = %self.url, "loading feed");

        self.client.get(
            &self.url,
            Box::new(move |result| {
                if alive.upgrade().is_none() {
                    trace!("loader dropped before the response arrived; discarding result");
                    return;
                }

                let mapped = match result {
                    Ok((data, response)) => mapper::map(&data, &response),
                    Err(e) => {
                        warn!(error = %e, "feed request failed");
                        Err(LoadError::Connectivity)
                    }
                };
                completion(mapped);
            }),
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
