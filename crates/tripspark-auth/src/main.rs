//! TripSpark Auth - Entry Point

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tripspark_auth::{ClientConfig, Config, flow::AuthExchangeFlow, server::AuthServer};

#[derive(Parser, Debug)]
#[command(name = "tripspark-auth")]
#[command(about = "Google OAuth2 login service")]
#[command(version)]
struct Cli {
    /// OAuth client ID registered with Google
    #[arg(long, env = "GOOGLE_CLIENT_ID")]
    client_id: Option<String>,

    /// OAuth client secret
    #[arg(long, env = "GOOGLE_CLIENT_SECRET", hide_env_values = true)]
    client_secret: Option<String>,

    /// Redirect URI, must match the one registered in the Google console
    #[arg(long, env = "GOOGLE_REDIRECT_URI")]
    redirect_uri: Option<String>,

    /// HTTP server port
    #[arg(long, default_value = "8080", env = "PORT")]
    port: u16,

    /// Timeout in seconds for each call to Google
    #[arg(long, default_value = "30")]
    request_timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), port = cli.port, "Starting TripSpark auth server");

    let client = ClientConfig::new(cli.client_id, cli.client_secret, cli.redirect_uri);
    let config = Config::new(client)
        .with_port(cli.port)
        .with_request_timeout(Duration::from_secs(cli.request_timeout_secs));

    let flow = AuthExchangeFlow::from_config(&config)?;
    AuthServer::new(flow).run_http(config.port).await
}
