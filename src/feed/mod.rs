//! Feed loading abstraction.
//!
//! This module defines the [`FeedLoader`] trait, the [`FeedItem`] type and
//! the [`LoadError`] callers get back.  [`RemoteFeedLoader`] is the
//! HTTP-backed implementation; it fetches through an injected
//! [`HttpClient`](crate::http::HttpClient) and decodes via [`mapper`].

mod feed_item;
mod mapper;
mod remote;

pub use feed_item::FeedItem;
pub use remote::RemoteFeedLoader;

use thiserror::Error;

/// Why a load failed.  This is the complete set of failure causes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadError {
    /// The transport could not deliver a response at all.
    #[error("connectivity error")]
    Connectivity,
    /// A response arrived but its status or payload was rejected.
    #[error("invalid data")]
    InvalidData,
}

/// Result of one `load` call.
pub type LoadFeedResult = Result<Vec<FeedItem>, LoadError>;

/// Single-shot notification for [`FeedLoader::load`].
pub type FeedCompletion = Box<dyn FnOnce(LoadFeedResult) + Send + 'static>;

/// Trait that every feed loader must implement.
///
/// `load()` returns immediately.  The result is delivered later, at most
/// once, on whatever thread the underlying transport completes on.
pub trait FeedLoader: Send + Sync {
    fn load(&self, completion: FeedCompletion);
}
