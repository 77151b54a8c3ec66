//! Identity provider HTTP client.
//!
//! Provides the outbound half of the login flow:
//! - Form-encoded POST to the token endpoint
//! - Query-string GET to the tokeninfo endpoint
//!
//! Every call is a single attempt bounded by the configured timeouts. There
//! is no retry and no response cache; tokens are never reused across requests.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};

/// A JSON object as returned by the provider.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// A successful provider response: the body as received and its decoded object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderResponse {
    pub body: String,
    pub json: JsonObject,
}

impl ProviderResponse {
    /// Decode a body that must be a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Parse`] if the body is not a JSON object.
    pub fn parse(body: String) -> ClientResult<Self> {
        let json = serde_json::from_str(&body)?;
        Ok(Self { body, json })
    }
}

/// Outbound transport used by the login flow.
///
/// The reqwest-backed [`ProviderClient`] is the production implementation;
/// tests substitute their own to observe calls.
#[async_trait]
pub trait ProviderTransport: Send + Sync {
    /// POST a form-encoded body and parse the response as a JSON object.
    async fn post_form(&self, url: &str, form: &[(&str, &str)]) -> ClientResult<ProviderResponse>;

    /// GET with query parameters and parse the response as a JSON object.
    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> ClientResult<ProviderResponse>;
}

/// reqwest-backed provider client.
#[derive(Clone)]
pub struct ProviderClient {
    client: Client,
}

impl ProviderClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Handle provider response status codes and decode the body.
    async fn read_object(response: reqwest::Response) -> ClientResult<ProviderResponse> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::status(status.as_u16(), body));
        }

        ProviderResponse::parse(body)
    }
}

#[async_trait]
impl ProviderTransport for ProviderClient {
    async fn post_form(&self, url: &str, form: &[(&str, &str)]) -> ClientResult<ProviderResponse> {
        // `form` sets Content-Type: application/x-www-form-urlencoded
        let response = self.client.post(url).form(form).send().await?;
        Self::read_object(response).await
    }

    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> ClientResult<ProviderResponse> {
        let response = self.client.get(url).query(query).send().await?;
        Self::read_object(response).await
    }
}

impl std::fmt::Debug for ProviderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderClient").finish_non_exhaustive()
    }
}
