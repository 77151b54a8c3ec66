//! Identity claims resolved from an ID token.

use serde::Serialize;

use crate::client::JsonObject;

/// Value shown for a claim the provider did not return.
pub const UNKNOWN_CLAIM: &str = "unknown";

/// Claims returned by the tokeninfo endpoint.
///
/// Only `email` and `sub` are read; all other keys are kept for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IdentityClaims(JsonObject);

impl IdentityClaims {
    #[must_use]
    pub fn new(claims: JsonObject) -> Self {
        Self(claims)
    }

    /// Look up a claim as text, or `default` when it is missing or null.
    ///
    /// String claims are returned verbatim; other JSON values are rendered
    /// in their JSON form.
    #[must_use]
    pub fn claim_or(&self, key: &str, default: &str) -> String {
        match self.0.get(key) {
            None | Some(serde_json::Value::Null) => default.to_string(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    #[must_use]
    pub fn email(&self) -> String {
        self.claim_or("email", UNKNOWN_CLAIM)
    }

    /// Subject identifier (Google user ID).
    #[must_use]
    pub fn sub(&self) -> String {
        self.claim_or("sub", UNKNOWN_CLAIM)
    }

    /// Claims as indented JSON, for display.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_default()
    }
}
