use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use api::{serve, Config};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let secrets = util::load_env("Secrets.dev.toml").ok();
    let api_key = util::secret("NEBIUS_API_KEY", secrets.as_ref())?;

    let config_name = match std::env::var("CONFIG") {
        Ok(config) => format!("Config{}.toml", config),
        Err(_) => "Config.toml".to_string(),
    };
    let config = Config::load(&config_name)
        .with_context(|| format!("failed to load {}", config_name))?;

    let router = serve(api_key, &config).await?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.server.port));
    let listener = TcpListener::bind(&address).await?;
    info!(%address, "listening");

    Ok(axum::serve(listener, router).await?)
}
