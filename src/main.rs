//! HTTP server for the Salary Engine.
//!
//! Environment:
//! - `SALARY_ENGINE_CONFIG_DIR`: agreement directory to load instead of the embedded one
//! - `SALARY_ENGINE_ADDR`: listen address, `127.0.0.1:3000` by default
//! - `RUST_LOG`: log filter, `info` by default

use std::env;

use salary_engine::api::{AppState, create_router};
use salary_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().init();

    let config = match env::var("SALARY_ENGINE_CONFIG_DIR") {
        Ok(dir) => ConfigLoader::load(&dir)?,
        Err(_) => ConfigLoader::embedded()?,
    };
    info!(
        agreement = %config.agreement().code,
        version = %config.agreement().version,
        "Agreement configuration loaded"
    );

    let addr = env::var("SALARY_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Listening");

    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}
