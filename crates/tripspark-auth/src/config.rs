//! Configuration for the TripSpark auth service.

use std::time::Duration;

/// Identity provider constants.
pub mod provider {
    use std::time::Duration;

    /// Google OAuth 2.0 authorization endpoint.
    pub const AUTHORIZATION_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

    /// Google token endpoint.
    pub const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

    /// Google tokeninfo endpoint, resolves an ID token into its claims.
    pub const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

    /// Scopes requested at login.
    pub const SCOPE: &str = "openid email profile";

    /// Request timeout for each provider call.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Environment variable names.
pub mod env {
    pub const CLIENT_ID: &str = "GOOGLE_CLIENT_ID";
    pub const CLIENT_SECRET: &str = "GOOGLE_CLIENT_SECRET";
    pub const REDIRECT_URI: &str = "GOOGLE_REDIRECT_URI";
    pub const PORT: &str = "PORT";
}

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Registered OAuth client credentials.
///
/// Every field is optional so that a missing setting surfaces as a
/// configuration error on the route that needs it instead of aborting startup.
/// Empty strings are treated as absent; any other value is kept verbatim.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    client_id: Option<String>,
    client_secret: Option<String>,
    redirect_uri: Option<String>,
}

impl ClientConfig {
    #[must_use]
    pub fn new(
        client_id: Option<String>,
        client_secret: Option<String>,
        redirect_uri: Option<String>,
    ) -> Self {
        Self {
            client_id: non_empty(client_id),
            client_secret: non_empty(client_secret),
            redirect_uri: non_empty(redirect_uri),
        }
    }

    /// Read credentials from `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET` and
    /// `GOOGLE_REDIRECT_URI`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(env::CLIENT_ID).ok(),
            std::env::var(env::CLIENT_SECRET).ok(),
            std::env::var(env::REDIRECT_URI).ok(),
        )
    }

    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    #[must_use]
    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    #[must_use]
    pub fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uri.as_deref()
    }

    /// True when all three settings are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some() && self.redirect_uri.is_some()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("has_client_secret", &self.client_secret.is_some())
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Identity provider endpoint URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoints {
    pub authorization_url: String,
    pub token_url: String,
    pub tokeninfo_url: String,
}

impl ProviderEndpoints {
    /// Endpoints rooted at a mock server (paths mirror Google's).
    #[must_use]
    pub fn for_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            authorization_url: format!("{base}/o/oauth2/v2/auth"),
            token_url: format!("{base}/token"),
            tokeninfo_url: format!("{base}/tokeninfo"),
        }
    }
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            authorization_url: provider::AUTHORIZATION_URL.to_string(),
            token_url: provider::TOKEN_URL.to_string(),
            tokeninfo_url: provider::TOKENINFO_URL.to_string(),
        }
    }
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth client credentials.
    pub client: ClientConfig,

    /// Provider endpoints (overridden in tests).
    pub endpoints: ProviderEndpoints,

    /// HTTP listen port.
    pub port: u16,

    /// Request timeout for provider calls.
    pub request_timeout: Duration,

    /// Connection timeout for provider calls.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration pointed at Google with default timeouts.
    #[must_use]
    pub fn new(client: ClientConfig) -> Self {
        Self {
            client,
            endpoints: ProviderEndpoints::default(),
            port: DEFAULT_PORT,
            request_timeout: provider::REQUEST_TIMEOUT,
            connect_timeout: provider::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration with all endpoints on a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            client: ClientConfig::new(
                Some("test-client-id".to_string()),
                Some("test-client-secret".to_string()),
                Some("http://localhost:8080/oauth2/callback".to_string()),
            ),
            endpoints: ProviderEndpoints::for_base_url(base_url),
            port: 0,
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Missing credentials are not an error here; they are reported by the
    /// routes that need them.
    ///
    /// # Errors
    ///
    /// Returns error if `PORT` is set but not a valid port number.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new(ClientConfig::from_env());
        if let Ok(port) = std::env::var(env::PORT) {
            config.port = port.parse().map_err(|e| anyhow::anyhow!("invalid {}: {e}", env::PORT))?;
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}
