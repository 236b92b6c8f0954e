//! Runtime configuration.
//!
//! [`HttpClientConfig`] tunes the shipped transport.  [`FeedConfig`] is what
//! the binary needs to compose a loader: just the feed URL, taken from the
//! first command-line argument.

use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

/// Feed used when no URL is given on the command line.
pub const DEFAULT_FEED_URL: &str = "https://essentialdeveloper.com/feed-case-study/test-api/feed";

/// How long a single request may take, connect through body.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`crate::http::ReqwestHttpClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Where to load the feed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub url: Url,
}

impl FeedConfig {
    /// Build from an optional URL argument, falling back to
    /// [`DEFAULT_FEED_URL`].
    pub fn from_arg(arg: Option<String>) -> Result<Self> {
        let raw = arg.unwrap_or_else(|| DEFAULT_FEED_URL.into());
        let url = Url::parse(&raw).with_context(|| format!("invalid feed URL: {raw}"))?;
        Ok(Self { url })
    }

    /// Read the URL from the process arguments.
    pub fn from_args() -> Result<Self> {
        Self::from_arg(std::env::args().nth(1))
    }
}
