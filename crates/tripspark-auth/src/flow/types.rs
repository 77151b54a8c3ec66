//! Per-request values exchanged with the identity provider.

use serde::Deserialize;

use crate::config::provider;

/// Query parameters of the `/oauth2/callback` redirect.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
}

impl CallbackParams {
    /// Callback carrying an authorization code.
    #[must_use]
    pub fn with_code(code: impl Into<String>) -> Self {
        Self { code: Some(code.into()), error: None }
    }

    /// Callback carrying a provider error.
    #[must_use]
    pub fn with_error(error: impl Into<String>) -> Self {
        Self { code: None, error: Some(error.into()) }
    }

    /// Provider error, if present and non-empty.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    /// Authorization code, if present and non-empty.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().filter(|c| !c.is_empty())
    }
}

/// Query of the authorization redirect.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationRequest<'a> {
    pub client_id: &'a str,
    pub redirect_uri: &'a str,
}

impl<'a> AuthorizationRequest<'a> {
    pub const RESPONSE_TYPE: &'static str = "code";
    pub const ACCESS_TYPE: &'static str = "online";
    pub const PROMPT: &'static str = "consent";

    #[must_use]
    pub const fn new(client_id: &'a str, redirect_uri: &'a str) -> Self {
        Self { client_id, redirect_uri }
    }

    /// Query pairs in the order they appear in the URL.
    #[must_use]
    pub const fn query_pairs(&self) -> [(&'static str, &'a str); 6] {
        [
            ("client_id", self.client_id),
            ("redirect_uri", self.redirect_uri),
            ("response_type", Self::RESPONSE_TYPE),
            ("scope", provider::SCOPE),
            ("access_type", Self::ACCESS_TYPE),
            ("prompt", Self::PROMPT),
        ]
    }
}

/// Form body of the code-for-token exchange.
///
/// Holds the client secret; `Debug` redacts it together with the code.
#[derive(Clone, Copy)]
pub struct TokenExchangeRequest<'a> {
    pub code: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub redirect_uri: &'a str,
}

impl<'a> TokenExchangeRequest<'a> {
    pub const GRANT_TYPE: &'static str = "authorization_code";

    #[must_use]
    pub const fn form_pairs(&self) -> [(&'static str, &'a str); 5] {
        [
            ("code", self.code),
            ("client_id", self.client_id),
            ("client_secret", self.client_secret),
            ("redirect_uri", self.redirect_uri),
            ("grant_type", Self::GRANT_TYPE),
        ]
    }
}

impl std::fmt::Debug for TokenExchangeRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenExchangeRequest")
            .field("code", &"<redacted>")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}
