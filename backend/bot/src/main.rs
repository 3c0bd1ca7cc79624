mod config;
mod interactions;
mod register;
mod relay;
mod routes;
mod verify;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;

use config::BotConfig;

#[derive(Parser)]
#[command(name = "movienight-bot")]
#[command(about = "Discord interactions endpoint for the movie-night relay")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactions HTTP server
    Serve,
    /// Register the slash commands with Discord (one-time setup)
    Register,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => {
            let config = BotConfig::from_env()?;
            let addr = format!("{}:{}", config.bind_address, config.port);
            let app = routes::build_router(config)?;

            info!("Interactions server listening on {}", addr);
            let listener = TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await?;
        }
        Commands::Register => {
            register::register_commands().await?;
        }
    }

    Ok(())
}
