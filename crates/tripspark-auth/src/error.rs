//! Error types for the auth service.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors from the outbound HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    ///
    /// Stored without its URL: tokeninfo URLs carry the ID token.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Body was not a JSON object
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Provider answered with a non-success status
    #[error("Unexpected status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
}

impl ClientError {
    /// Create a status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

/// Errors from the login flow. Each one ends the request it occurred in.
#[derive(thiserror::Error, Debug)]
pub enum FlowError {
    /// A required client setting is missing or invalid.
    #[error("{0}")]
    Configuration(String),

    /// The provider redirected back with an `error` parameter.
    #[error("Error from Google: {0}")]
    ProviderDenied(String),

    /// Callback arrived without an authorization code.
    #[error("Missing 'code' parameter")]
    MissingCode,

    /// Code exchange failed or returned no ID token.
    #[error("Error exchanging code for tokens: {0}")]
    TokenExchange(String),

    /// The tokeninfo call failed.
    #[error("Error calling tokeninfo: {0}")]
    ClaimsResolution(String),
}

impl FlowError {
    /// Create a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a token exchange error.
    #[must_use]
    pub fn token_exchange(detail: impl Into<String>) -> Self {
        Self::TokenExchange(detail.into())
    }

    /// Create a claims resolution error.
    #[must_use]
    pub fn claims_resolution(detail: impl Into<String>) -> Self {
        Self::ClaimsResolution(detail.into())
    }

    /// HTTP status this error maps to at the route boundary.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::ProviderDenied(_) | Self::MissingCode => StatusCode::BAD_REQUEST,
            Self::Configuration(_) | Self::TokenExchange(_) | Self::ClaimsResolution(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Short machine-readable kind, used as a log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::ProviderDenied(_) => "provider_denied",
            Self::MissingCode => "missing_code",
            Self::TokenExchange(_) => "token_exchange",
            Self::ClaimsResolution(_) => "claims_resolution",
        }
    }
}

impl IntoResponse for FlowError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for flow operations.
pub type FlowResult<T> = Result<T, FlowError>;
