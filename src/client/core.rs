use crate::request::{ApiRequest, FormBody};
use crate::transport::{RawResponse, Transport, TransportError};
use crate::types::ClientResponse;
use crate::{codec, Error, Result};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

use super::error_classification::classify_envelope;
use crate::error_code::ERROR_UNKNOWN;

/// Request and response of one call, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub request: ApiRequest,
    /// `None` when the transport failed before an answer arrived.
    pub response: Option<RawResponse>,
}

/// Client of the VK Ads API.
///
/// Every call is one `POST`; there is no retry, rate limiting or token refresh
/// at this layer. Typed operations live in the `ads` and `database` submodules.
///
/// The client remembers the last request/response pair (see
/// [`last_request`](Self::last_request)). These slots are overwritten by every
/// call, so with several concurrent callers on one instance they only reflect
/// whichever call finished last. Use [`call_with_exchange`](Self::call_with_exchange)
/// or one instance per call chain when the pair must match a specific call.
pub struct VkClient {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) api_version: Option<String>,
    last_request: Mutex<Option<ApiRequest>>,
    last_response: Mutex<Option<RawResponse>>,
}

impl VkClient {
    pub(crate) fn from_parts(transport: Arc<dyn Transport>, api_version: Option<String>) -> Self {
        Self {
            transport,
            api_version,
            last_request: Mutex::new(None),
            last_response: Mutex::new(None),
        }
    }

    /// Client configured from the `VK_*` environment variables.
    pub fn from_env() -> Result<Self> {
        crate::client::builder::VkClientBuilder::from_env().build()
    }

    pub fn builder() -> crate::client::builder::VkClientBuilder {
        crate::client::builder::VkClientBuilder::new()
    }

    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    /// Calls `method` with `body` and classifies the answer.
    ///
    /// Clears the last request/response before sending and records them once
    /// the transport has answered.
    pub async fn call(&self, method: &str, body: FormBody) -> Result<Vec<ClientResponse>> {
        self.begin_call();
        let (result, exchange) = self.call_with_exchange(method, body).await;
        if let Some(response) = exchange.response {
            *lock(&self.last_request) = Some(exchange.request);
            *lock(&self.last_response) = Some(response);
        }
        result
    }

    /// Like [`call`](Self::call) but hands the request/response pair back
    /// instead of storing it on the client.
    pub async fn call_with_exchange(
        &self,
        method: &str,
        body: FormBody,
    ) -> (Result<Vec<ClientResponse>>, Exchange) {
        let request = self.prepare(method, body);
        debug!(
            method = %request.method,
            request_id = %request.id,
            fields = request.body.len(),
            "sending request"
        );

        match self.transport.send(&request).await {
            Ok(response) => {
                let result = Self::interpret(&response);
                if let Err(e) = &result {
                    debug!(
                        method = %request.method,
                        request_id = %request.id,
                        error = %e,
                        "call failed"
                    );
                }
                (
                    result,
                    Exchange {
                        request,
                        response: Some(response),
                    },
                )
            }
            Err(e) => {
                warn!(
                    method = %request.method,
                    request_id = %request.id,
                    error = %e,
                    "transport failure"
                );
                (
                    Err(map_transport_error(e)),
                    Exchange {
                        request,
                        response: None,
                    },
                )
            }
        }
    }

    /// Most recent request that got an answer, cleared at the start of each call.
    pub fn last_request(&self) -> Option<ApiRequest> {
        lock(&self.last_request).clone()
    }

    /// Most recent answer, cleared at the start of each call.
    pub fn last_response(&self) -> Option<RawResponse> {
        lock(&self.last_response).clone()
    }

    /// Forgets the previous exchange. Typed operations call this before
    /// assembling a body that may be rejected locally.
    pub(crate) fn begin_call(&self) {
        *lock(&self.last_request) = None;
        *lock(&self.last_response) = None;
    }

    fn prepare(&self, method: &str, mut body: FormBody) -> ApiRequest {
        if let Some(v) = &self.api_version {
            if !body.contains("v") {
                body.insert("v", v.clone());
            }
        }
        ApiRequest::post(method, body)
    }

    fn interpret(response: &RawResponse) -> Result<Vec<ClientResponse>> {
        let envelope = codec::decode(&response.body)?;
        classify_envelope(response.status, envelope)
    }
}

// A poisoned slot only holds diagnostics; keep using it.
fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn map_transport_error(e: TransportError) -> Error {
    match e {
        TransportError::Http(e) => {
            let code = e.status().map(|s| s.as_u16() as i64).unwrap_or(ERROR_UNKNOWN);
            Error::connect(code, e.to_string())
        }
        TransportError::Status { status, body } => {
            Error::connect(status as i64, format!("HTTP {}: {}", status, body))
        }
        TransportError::Connection(msg) => Error::connect(ERROR_UNKNOWN, msg),
        TransportError::Other(msg) => Error::api(ERROR_UNKNOWN, msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::transport::MockTransport;

    fn client(mock: &MockTransport) -> VkClient {
        VkClient::from_parts(Arc::new(mock.clone()), Some("5.131".into()))
    }

    #[test]
    fn test_api_version_is_added() {
        let mock = MockTransport::always(r#"{"response":[]}"#);
        let c = client(&mock);
        tokio_test::block_on(c.call("ads.getClients", FormBody::new())).unwrap();
        let req = mock.last_request().unwrap();
        assert_eq!(req.body.get("v"), Some("5.131"));
        assert_eq!(req.method, "ads.getClients");
    }

    #[test]
    fn test_explicit_version_is_kept() {
        let mock = MockTransport::always(r#"{"response":[]}"#);
        let c = client(&mock);
        let body = FormBody::new().field("v", "5.199");
        tokio_test::block_on(c.call("ads.getClients", body)).unwrap();
        assert_eq!(mock.last_request().unwrap().body.get("v"), Some("5.199"));
    }

    #[test]
    fn test_no_version_field_when_disabled() {
        let mock = MockTransport::always(r#"{"response":[]}"#);
        let c = VkClient::from_parts(Arc::new(mock.clone()), None);
        tokio_test::block_on(c.call("ads.getClients", FormBody::new())).unwrap();
        assert!(!mock.last_request().unwrap().body.contains("v"));
    }

    #[test]
    fn test_transport_error_mapping() {
        assert_eq!(
            map_transport_error(TransportError::Connection("reset".into())).kind(),
            ErrorKind::Connect
        );
        let err = map_transport_error(TransportError::Status {
            status: 502,
            body: "bad gateway".into(),
        });
        assert_eq!(err.kind(), ErrorKind::Connect);
        assert_eq!(err.code(), 502);
        assert_eq!(
            map_transport_error(TransportError::Other("boom".into())).kind(),
            ErrorKind::Api
        );
    }

    #[test]
    fn test_undecodable_body() {
        let mock = MockTransport::always("<html>");
        let c = client(&mock);
        let err = tokio_test::block_on(c.call("ads.getClients", FormBody::new())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadResponseContent);
        // The transport answered, so the pair is still recorded.
        assert_eq!(c.last_response().unwrap().body, "<html>");
    }
}
