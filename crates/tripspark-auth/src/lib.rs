//! TripSpark Auth
//!
//! Server side of a Google OAuth 2.0 Authorization Code login. Redirects the
//! browser to the consent screen, exchanges the returned code for tokens,
//! resolves the ID token through the tokeninfo endpoint and renders the
//! resulting identity claims.
//!
//! # Example
//!
//! ```no_run
//! use tripspark_auth::{config::Config, flow::AuthExchangeFlow, server::AuthServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let flow = AuthExchangeFlow::from_config(&config)?;
//!
//!     AuthServer::new(flow).run_http(config.port).await
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod flow;
pub mod server;

pub use client::ProviderClient;
pub use config::{ClientConfig, Config};
pub use error::{ClientError, FlowError};
pub use flow::{AuthExchangeFlow, IdentityClaims};
