use crate::client::core::VkClient;
use crate::config::ClientConfig;
use crate::transport::{HttpTransport, Transport};
use crate::Result;
use std::sync::Arc;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable.
pub struct VkClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl VkClientBuilder {
    /// Starts from [`ClientConfig::default`].
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            transport: None,
        }
    }

    /// Starts from [`ClientConfig::from_env`].
    pub fn from_env() -> Self {
        Self::new().config(ClientConfig::from_env())
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the API base URL (e.g. to point at a mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = Some(version.into());
        self
    }

    /// Do not send the `v` field.
    pub fn without_api_version(mut self) -> Self {
        self.config.api_version = None;
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    pub fn proxy_url(mut self, url: impl Into<String>) -> Self {
        self.config.proxy_url = Some(url.into());
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(agent.into());
        self
    }

    /// Use a custom transport instead of the HTTP one; network settings are then ignored.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<VkClient> {
        let transport = match self.transport {
            Some(t) => t,
            None => {
                self.config.validate()?;
                Arc::new(HttpTransport::new(&self.config)?) as Arc<dyn Transport>
            }
        };
        Ok(VkClient::from_parts(transport, self.config.api_version))
    }
}

impl Default for VkClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::transport::MockTransport;

    #[test]
    fn test_build_with_defaults() {
        let client = VkClientBuilder::new().build().unwrap();
        assert_eq!(client.api_version(), Some("5.131"));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = VkClientBuilder::new().base_url("not a url").build().err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_custom_transport_skips_network_config() {
        let client = VkClientBuilder::new()
            .base_url("not a url")
            .without_api_version()
            .transport(Arc::new(MockTransport::new()))
            .build()
            .unwrap();
        assert_eq!(client.api_version(), None);
    }
}
