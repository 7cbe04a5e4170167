use super::{RawResponse, Transport, TransportError};
use crate::config::ClientConfig;
use crate::request::ApiRequest;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Proxy;
use std::time::Duration;
use tracing::debug;

/// Longest body excerpt kept in a status error.
const STATUS_BODY_EXCERPT: usize = 512;

/// `reqwest`-backed transport posting form bodies to `<base_url><method>`.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs.max(1)));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration(format!("Invalid proxy URL {}: {}", proxy_url, e))
            })?;
            builder = builder.proxy(proxy);
        }

        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, method: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            method.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> std::result::Result<RawResponse, TransportError> {
        let url = self.url_for(&request.method);
        debug!(url = %url, request_id = %request.id, "POST");

        let mut req = self
            .client
            .post(&url)
            .header("x-request-id", &request.id)
            .body(request.body.encode());
        for (k, v) in &request.headers {
            req = req.header(k, v);
        }

        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let body = body.chars().take(STATUS_BODY_EXCERPT).collect();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(RawResponse::new(status.as_u16(), body))
    }
}
