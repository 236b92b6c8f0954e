//! Transport abstraction layer.
//!
//! This module defines the [`HttpClient`] trait the feed loader depends on,
//! plus the result types it reports.  The loader never talks to a networking
//! stack directly; a concrete client is injected at construction time.
//! [`ReqwestHttpClient`] is the one shipped with this crate.
//!
//! ## For contributors — adding a new transport
//!
//! 1. Create a new file in this directory (e.g. `hyper_client.rs`).
//! 2. Implement [`HttpClient`] for your struct.  `get()` must call its
//!    completion exactly once, from whatever thread suits the transport.
//! 3. Add `mod hyper_client;` below and re-export your struct.

mod reqwest_client;

pub use reqwest_client::ReqwestHttpClient;

use thiserror::Error;
use url::Url;

/// Metadata of a response the transport managed to receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Final URL of the response.
    pub url: Url,
    /// HTTP status code, e.g. `200`.
    pub status: u16,
}

impl HttpResponse {
    pub fn new(url: Url, status: u16) -> Self {
        Self { url, status }
    }
}

/// Why a transport could not deliver a response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Outcome of a single fetch: body bytes and response metadata, or a
/// transport failure.
pub type HttpClientResult = Result<(Vec<u8>, HttpResponse), HttpClientError>;

/// Single-shot notification for an [`HttpClient::get`] call.
pub type HttpCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// Trait that every transport must implement.
///
/// `get()` returns immediately; the outcome arrives later through the
/// completion.  The completion is an [`FnOnce`], so it cannot be delivered
/// twice, but implementations must also make sure it is not silently dropped.
pub trait HttpClient: Send + Sync {
    /// Issue a GET request for `url`.
    fn get(&self, url: &Url, completion: HttpCompletion);
}
