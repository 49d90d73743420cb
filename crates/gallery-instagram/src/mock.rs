// Rust guideline compliant 2026-10-14

//! Recording stub transport.
//!
//! Replays queued JSON bodies in order and records every request so tests
//! can assert exactly which calls were made.

use crate::{PublishError, Transport};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A request captured by [`StubTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Target URL.
    pub url: String,
    /// Form fields in sending order.
    pub form: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Returns a form field value by name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

enum Reply {
    Body(Value),
    Failure(String),
}

/// Transport stub with queued replies.
#[derive(Default)]
pub struct StubTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubTransport {
    /// Creates a stub with no queued replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a JSON body reply.
    pub fn with_response(self, body: Value) -> Self {
        self.lock_replies().push_back(Reply::Body(body));
        self
    }

    /// Queues a transport failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.lock_replies().push_back(Reply::Failure(message.into()));
        self
    }

    /// Returns every request seen so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Returns how many requests were made.
    pub fn request_count(&self) -> usize {
        self.requests().len()
    }

    fn lock_replies(&self) -> std::sync::MutexGuard<'_, VecDeque<Reply>> {
        self.replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Transport for StubTransport {
    fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<Value, PublishError> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedRequest {
                url: url.to_string(),
                form: form
                    .iter()
                    .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
                    .collect(),
            });

        match self.lock_replies().pop_front() {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Failure(message)) => Err(PublishError::Transport(message)),
            None => Err(PublishError::Transport(format!(
                "no stubbed reply for {url}"
            ))),
        }
    }
}
