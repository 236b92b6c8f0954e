//! Test doubles shared across unit tests.

use std::sync::Mutex;

use url::Url;

use crate::http::{HttpClient, HttpClientError, HttpClientResult, HttpCompletion, HttpResponse};

/// An [`HttpClient`] that never touches the network.
///
/// Every `get()` is recorded together with its completion; tests then decide
/// when and how each request finishes.
#[derive(Default)]
pub struct HttpClientSpy {
    messages: Mutex<Vec<(Url, Option<HttpCompletion>)>>,
}

impl HttpClientSpy {
    pub fn requested_urls(&self) -> Vec<Url> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn complete_with_error(&self, index: usize) {
        self.complete(index, Err(HttpClientError::Request("any error".into())));
    }

    pub fn complete_with_status(&self, status: u16, data: &[u8], index: usize) {
        let url = self.requested_urls()[index].clone();
        self.complete(index, Ok((data.to_vec(), HttpResponse::new(url, status))));
    }

    fn complete(&self, index: usize, result: HttpClientResult) {
        let mut messages = self.messages.lock().unwrap();
        let completion = messages[index].1.take().expect("request already completed");
        // Release the lock before calling out; the completion may re-enter.
        drop(messages);
        completion(result);
    }
}

impl HttpClient for HttpClientSpy {
    fn get(&self, url: &Url, completion: HttpCompletion) {
        self.messages
            .lock()
            .unwrap()
            .push((url.clone(), Some(completion)));
    }
}
