//! Transport seam between the client and the network.
//!
//! The client only needs "send this request, give me status and body". The
//! default implementation is [`HttpTransport`]; [`MockTransport`] answers from
//! a script and records what it was asked to send.

mod http;
mod mock;

pub use http::HttpTransport;
pub use mock::MockTransport;

use crate::request::ApiRequest;
use async_trait::async_trait;

/// Raw answer of the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection-level failure not originating from `reqwest`.
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Transport error: {0}")]
    Other(String),
}
