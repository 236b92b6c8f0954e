//! essential-feed — load one feed and print its items.
//!
//! Usage: `essential-feed [FEED_URL]`.  Set `RUST_LOG=essential_feed=debug`
//! to see each request and how the response was judged.

use std::sync::mpsc;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use essential_feed::config::{FeedConfig, HttpClientConfig};
use essential_feed::{FeedLoader, RemoteFeedLoader, ReqwestHttpClient};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // -- configure -----------------------------------------------------------
    let config = FeedConfig::from_args()?;
    let client = ReqwestHttpClient::new(&HttpClientConfig::default())?;
    let loader = RemoteFeedLoader::new(config.url, Arc::new(client));

    // -- load once -----------------------------------------------------------
    // The completion runs on the transport's thread; hand the result back
    // over a channel.  `loader` must stay alive until it arrives.
    let (tx, rx) = mpsc::channel();
    loader.load(Box::new(move |result| {
        // The receiver only disappears if main has already bailed out.
        let _ = tx.send(result);
    }));

    let items = rx
        .recv()
        .context("transport dropped the request without completing it")?
        .with_context(|| format!("failed to load {}", loader.url()))?;

    tracing::info!(count = items.len(), "feed loaded");
    for item in &items {
        println!(
            "{}  {}  {}  {}",
            item.id,
            item.url,
            item.location.as_deref().unwrap_or("-"),
            item.description.as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}
