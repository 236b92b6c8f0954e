//! essential-feed — fetch a JSON image feed over HTTP and decode it into
//! validated [`FeedItem`]s.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌─────────────────┐  get(url)  ┌────────────┐
//! │ RemoteFeedLoader│ ─────────► │ HttpClient │  (injected; reqwest by default)
//! │    (feed/)      │ ◄───────── │  (http/)   │
//! └─────────────────┘  bytes +   └────────────┘
//!          │           status
//!          ▼
//!   mapper::map()  ──►  Result<Vec<FeedItem>, LoadError>  ──►  caller's completion
//! ```
//!
//! * **`feed`** — the `FeedLoader` trait, `FeedItem`, `LoadError`, the
//!   HTTP-backed loader and the response mapper.
//! * **`http`** — the `HttpClient` trait and the reqwest-based transport.
//! * **`config`** — transport settings and the binary's feed URL.
//!
//! Every `load()` performs exactly one fetch and reports exactly one result:
//! the decoded items, [`LoadError::Connectivity`] if nothing was received, or
//! [`LoadError::InvalidData`] if the response was rejected.

pub mod config;
pub mod feed;
pub mod http;

#[cfg(test)]
mod test_support;

// Re-export the public API so callers can write
// `use essential_feed::{FeedLoader, RemoteFeedLoader, ReqwestHttpClient};`
pub use feed::{
    FeedCompletion, FeedItem, FeedLoader, LoadError, LoadFeedResult, RemoteFeedLoader,
};
pub use http::{
    HttpClient, HttpClientError, HttpClientResult, HttpCompletion, HttpResponse,
    ReqwestHttpClient,
};
