// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use greeter::config::ServerConfig;
use greeter::transport::app_router;
use tracing::info;

use crate::log::LogLevel;

mod log;

#[tokio::main]
async fn main() -> Result<()> {
    // Load config from custom path if specified
    let config_path = env::var("CONFIG_FILE").ok();
    let config = match ServerConfig::load_with_env(config_path.as_deref()) {
        Ok(config) => config,
        Err(err) => fatal!("Failed to load configuration: {err}"),
    };

    let log_level: LogLevel = match config.log_level.parse() {
        Ok(level) => level,
        Err(err) => fatal!("{err}"),
    };
    let _guard = log::new(log_level);

    let host = env::var("HOST").unwrap_or_else(|_| config.host.clone());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.port);
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("Invalid HOST or PORT `{host}:{port}`"))?;

    let app = app_router();

    info!("Server listening on {addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
