//! Mock HTTP server setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::Arc;
use tokio::sync::Mutex;
use vk_ads_client::VkClient;

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = format!("{}/method/", server.url());
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Create a client pointed at the mock server
    pub fn create_test_client(&self) -> vk_ads_client::Result<VkClient> {
        VkClient::builder()
            .base_url(&self.base_url)
            .timeout_secs(5)
            .build()
    }

    /// Mock a JSON answer for one API method
    pub async fn mock_method(&self, method: &str, status: usize, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", format!("/method/{}", method).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock a JSON answer that only matches when the form body carries `fields`
    pub async fn mock_method_with_form(
        &self,
        method: &str,
        fields: &[(&str, &str)],
        body: &str,
    ) -> Mock {
        let matchers = fields
            .iter()
            .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string()))
            .collect();
        let mut server = self.server.lock().await;
        server
            .mock("POST", format!("/method/{}", method).as_str())
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::AllOf(matchers))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}
