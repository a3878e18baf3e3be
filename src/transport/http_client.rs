use crate::config::Config;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client as HttpInternalClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

const USER_AGENT: &str = "suportal-client/0.1.0";

/// HTTP transport seam between the portal services and the network
///
/// The services only ever POST a SOAP envelope to a relative path and
/// read back the raw response body; everything else (URLs, headers,
/// relays) lives behind this trait, which also makes the services
/// testable against a stub transport.
#[async_trait]
pub trait PortalHttpClient: Send + Sync {
    /// POSTs an XML body to a path under the configured base URL and
    /// returns the raw response body
    async fn post_xml(&self, path: &str, body: String) -> Result<String, AppError>;
}

/// reqwest-backed transport for the portal's SOAP endpoints
///
/// Holds one pre-built HTTP client for its whole lifetime; the
/// configuration is immutable after construction.
pub struct SoapHttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
}

impl SoapHttpClient {
    /// Creates a transport from a shared configuration
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Gets the configuration this transport was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn endpoint_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        if self.config.bypass_cors {
            // Relay-style prefixing: the relay host is prepended to the
            // complete target URL.
            format!("{}{}", self.config.cors_relay, url)
        } else {
            url
        }
    }
}

#[async_trait]
impl PortalHttpClient for SoapHttpClient {
    async fn post_xml(&self, path: &str, body: String) -> Result<String, AppError> {
        let url = self.endpoint_url(path);
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "text/xml; charset=utf-8")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::Unexpected(status));
        }

        Ok(response.text().await?)
    }
}
