use super::{RawResponse, Transport, TransportError};
use crate::request::ApiRequest;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

enum Scripted {
    Response(RawResponse),
    Status(u16, String),
    Disconnect(String),
    Internal(String),
}

/// Scripted transport for tests and offline use.
///
/// Queued answers are consumed in order; once the queue is empty the fallback
/// answer (if any) is repeated. Every request is recorded.
#[derive(Clone, Default)]
pub struct MockTransport {
    queue: Arc<Mutex<VecDeque<Scripted>>>,
    fallback: Arc<Mutex<Option<RawResponse>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every request with `200` and `body`.
    pub fn always(body: impl Into<String>) -> Self {
        let mock = Self::new();
        *lock(&mock.fallback) = Some(RawResponse::ok(body));
        mock
    }

    pub fn push_response(&self, response: RawResponse) -> &Self {
        self.push(Scripted::Response(response))
    }

    pub fn push_json(&self, body: &serde_json::Value) -> &Self {
        self.push_response(RawResponse::ok(body.to_string()))
    }

    /// Queues a non-success HTTP status.
    pub fn push_status(&self, status: u16, body: impl Into<String>) -> &Self {
        self.push(Scripted::Status(status, body.into()))
    }

    /// Queues a dropped connection.
    pub fn push_disconnect(&self, message: impl Into<String>) -> &Self {
        self.push(Scripted::Disconnect(message.into()))
    }

    /// Queues a failure unrelated to the network.
    pub fn push_internal_failure(&self, message: impl Into<String>) -> &Self {
        self.push(Scripted::Internal(message.into()))
    }

    fn push(&self, scripted: Scripted) -> &Self {
        lock(&self.queue).push_back(scripted);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        lock(&self.requests).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        lock(&self.requests).last().cloned()
    }
}

// A panicking test thread must not hide the script from the others.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        lock(&self.requests).push(request.clone());

        let next = lock(&self.queue).pop_front();
        match next {
            Some(Scripted::Response(r)) => Ok(r),
            Some(Scripted::Status(status, body)) => Err(TransportError::Status { status, body }),
            Some(Scripted::Disconnect(msg)) => Err(TransportError::Connection(msg)),
            Some(Scripted::Internal(msg)) => Err(TransportError::Other(msg)),
            None => lock(&self.fallback)
                .clone()
                .ok_or_else(|| TransportError::Other("no scripted response left".to_string())),
        }
    }
}
