//! [`HttpClient`] backed by [`reqwest::blocking`].
//!
//! Each `get()` runs on its own background thread, so the caller returns
//! immediately and the completion fires on that thread once the response
//! body has been read (or the request has failed).

use std::io;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use tracing::{debug, warn};
use url::Url;

use super::{HttpClient, HttpClientError, HttpClientResult, HttpCompletion, HttpResponse};
use crate::config::HttpClientConfig;

/// Name given to every request thread.
const WORKER_NAME: &str = "essential-feed-get";

/// Holds a completion until either the worker or the spawn-failure path
/// claims it.
type CompletionSlot = Arc<Mutex<Option<HttpCompletion>>>;

fn take_completion(slot: &CompletionSlot) -> Option<HttpCompletion> {
    slot.lock().unwrap_or_else(PoisonError::into_inner).take()
}

/// The worker never started, so complete from the calling thread.
fn complete_spawn_failure(slot: &CompletionSlot, error: &io::Error) {
    warn!(error = %error, "failed to spawn request thread");
    if let Some(completion) = take_completion(slot) {
        completion(Err(HttpClientError::Request(format!(
            "failed to spawn request thread: {error}"
        ))));
    }
}

/// An HTTP transport using a shared blocking reqwest client.
pub struct ReqwestHttpClient {
    client: reqwest::blocking::Client,
}

impl ReqwestHttpClient {
    /// Build a client with the given timeout and user agent.
    pub fn new(config: &HttpClientConfig) -> Result<Self, HttpClientError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| HttpClientError::Build(e.to_string()))?;

        Ok(Self { client })
    }

    /// Perform the request synchronously.  Any status code counts as a
    /// delivered response; only transport-level problems are errors.
    fn fetch(client: &reqwest::blocking::Client, url: &Url) -> HttpClientResult {
        let response = client
            .get(url.clone())
            .send()
            .map_err(|e| HttpClientError::Request(e.to_string()))?;

        let meta = HttpResponse::new(response.url().clone(), response.status().as_u16());
        let body = response
            .bytes()
            .map_err(|e| HttpClientError::Body(e.to_string()))?;

        Ok((body.to_vec(), meta))
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: HttpCompletion) {
        let client = self.client.clone();
        let url = url.clone();

        let slot: CompletionSlot = Arc::new(Mutex::new(Some(completion)));
        let worker_slot = slot.clone();

        let spawned = thread::Builder::new()
            .name(WORKER_NAME.into())
            .spawn(move || {
                debug!(%url, "GET");
                let result = Self::fetch(&client, &url);
                match &result {
                    Ok((body, response)) => {
                        debug!(%url, status = response.status, bytes = body.len(), "response received");
                    }
                    Err(e) => warn!(%url, error = %e, "request failed"),
                }
                if let Some(completion) = take_completion(&worker_slot) {
                    completion(result);
                }
            });

        if let Err(e) = spawned {
            complete_spawn_failure(&slot, &e);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
