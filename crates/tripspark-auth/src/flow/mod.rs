//! OAuth 2.0 Authorization Code login against a single identity provider.
//!
//! The flow is a linear pipeline per callback:
//! 1. Provider error short-circuit
//! 2. Authorization code check
//! 3. Client configuration check
//! 4. Code-for-token exchange (POST, form-encoded)
//! 5. ID token to claims resolution (GET tokeninfo)
//!
//! Any failing step ends the request. Nothing is cached or retried.

mod claims;
mod types;

use std::sync::Arc;

use url::Url;

use crate::client::{JsonObject, ProviderClient, ProviderTransport};
use crate::config::{ClientConfig, Config, ProviderEndpoints, env};
use crate::error::{FlowError, FlowResult};

pub use claims::{IdentityClaims, UNKNOWN_CLAIM};
pub use types::{AuthorizationRequest, CallbackParams, TokenExchangeRequest};

/// Build the provider authorization URL the browser is redirected to.
///
/// # Errors
///
/// Returns [`FlowError::Configuration`] if the client ID or redirect URI is
/// missing, or the authorization endpoint is not a valid URL.
pub fn build_authorization_url(client: &ClientConfig, authorization_url: &str) -> FlowResult<Url> {
    let client_id = client
        .client_id()
        .ok_or_else(|| FlowError::configuration(format!("{} not set", env::CLIENT_ID)))?;
    let redirect_uri = client
        .redirect_uri()
        .ok_or_else(|| FlowError::configuration(format!("{} not set", env::REDIRECT_URI)))?;

    let request = AuthorizationRequest::new(client_id, redirect_uri);

    Url::parse_with_params(authorization_url, request.query_pairs()).map_err(|e| {
        FlowError::configuration(format!("invalid authorization endpoint {authorization_url}: {e}"))
    })
}

/// Login flow bound to one client registration.
#[derive(Clone)]
pub struct AuthExchangeFlow {
    client: ClientConfig,
    endpoints: ProviderEndpoints,
    transport: Arc<dyn ProviderTransport>,
}

impl AuthExchangeFlow {
    /// Create a flow over an explicit transport.
    #[must_use]
    pub fn new(config: &Config, transport: Arc<dyn ProviderTransport>) -> Self {
        Self {
            client: config.client.clone(),
            endpoints: config.endpoints.clone(),
            transport,
        }
    }

    /// Create a flow backed by a reqwest [`ProviderClient`].
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let transport = ProviderClient::new(config)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    #[must_use]
    pub const fn client_config(&self) -> &ClientConfig {
        &self.client
    }

    /// Authorization URL for this client.
    pub fn authorization_url(&self) -> FlowResult<Url> {
        build_authorization_url(&self.client, &self.endpoints.authorization_url)
    }

    /// Turn a provider callback into identity claims.
    ///
    /// Makes no outbound call unless the callback carries a code and the
    /// client configuration is complete.
    pub async fn handle_callback(&self, params: &CallbackParams) -> FlowResult<IdentityClaims> {
        if let Some(error) = params.error() {
            return Err(FlowError::ProviderDenied(error.to_string()));
        }

        let code = params.code().ok_or(FlowError::MissingCode)?;

        let (Some(client_id), Some(client_secret)) =
            (self.client.client_id(), self.client.client_secret())
        else {
            return Err(FlowError::configuration("Client ID/Secret not configured"));
        };
        let redirect_uri = self
            .client
            .redirect_uri()
            .ok_or_else(|| FlowError::configuration(format!("{} not set", env::REDIRECT_URI)))?;

        let request = TokenExchangeRequest { code, client_id, client_secret, redirect_uri };
        let id_token = self.exchange_code(&request).await?;

        self.resolve_claims(&id_token).await
    }

    /// Exchange the authorization code and return the ID token.
    async fn exchange_code(&self, request: &TokenExchangeRequest<'_>) -> FlowResult<String> {
        tracing::debug!(token_url = %self.endpoints.token_url, "Exchanging authorization code");

        let response = self
            .transport
            .post_form(&self.endpoints.token_url, &request.form_pairs())
            .await
            .map_err(|e| FlowError::token_exchange(e.to_string()))?;

        id_token(&response.json).map(str::to_owned).ok_or_else(|| {
            FlowError::token_exchange(format!("no id_token in response: {}", response.body))
        })
    }

    async fn resolve_claims(&self, id_token: &str) -> FlowResult<IdentityClaims> {
        tracing::debug!(tokeninfo_url = %self.endpoints.tokeninfo_url, "Resolving ID token");

        self.transport
            .get_json(&self.endpoints.tokeninfo_url, &[("id_token", id_token)])
            .await
            .map(|response| IdentityClaims::new(response.json))
            .map_err(|e| FlowError::claims_resolution(e.to_string()))
    }
}

impl std::fmt::Debug for AuthExchangeFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthExchangeFlow")
            .field("client", &self.client)
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

fn id_token(tokens: &JsonObject) -> Option<&str> {
    tokens.get("id_token").and_then(|v| v.as_str()).filter(|t| !t.is_empty())
}
