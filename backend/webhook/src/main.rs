mod auth;
mod config;
mod error;
mod fetch;
mod routes;
mod stream;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use config::WebhookConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = WebhookConfig::from_env()?;
    let addr = format!("{}:{}", config.bind_address, config.port);
    let app = routes::build_router(config);

    info!("Webhook server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
