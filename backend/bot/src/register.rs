//! One-time slash-command registration against the Discord API.
//!
//! Runtime interaction handling never calls this; it exists so the
//! commands show up in the client at all.

use anyhow::{bail, Context, Result};
use serde_json::json;
use tracing::info;

const DISCORD_API: &str = "https://discord.com/api/v10";

/// STRING option type in Discord's command schema.
const OPTION_STRING: u8 = 3;

/// Register the `/download` and `/start` commands for the configured app.
///
/// Reads `DISCORD_APP_ID` and `DISCORD_BOT_TOKEN` from the environment;
/// these are setup-time credentials, separate from the serving config.
pub async fn register_commands() -> Result<()> {
    let app_id = std::env::var("DISCORD_APP_ID")
        .context("DISCORD_APP_ID environment variable not set")?;
    let token = std::env::var("DISCORD_BOT_TOKEN")
        .context("DISCORD_BOT_TOKEN environment variable not set")?;

    let url = format!("{DISCORD_API}/applications/{app_id}/commands");
    register_commands_at(&url, &token).await
}

pub(crate) async fn register_commands_at(url: &str, token: &str) -> Result<()> {
    let commands = [
        json!({
            "name": "download",
            "description": "Download a movie file to the streaming host.",
            "options": [
                {
                    "type": OPTION_STRING,
                    "name": "url",
                    "description": "The URL of the movie file to download",
                    "required": true
                },
                {
                    "type": OPTION_STRING,
                    "name": "filename",
                    "description": "Destination filename (defaults to current_movie.mp4)",
                    "required": false
                }
            ]
        }),
        json!({
            "name": "start",
            "description": "Start streaming a movie on a named path.",
            "options": [
                {
                    "type": OPTION_STRING,
                    "name": "path_name",
                    "description": "The URL path for the stream (e.g. 'movie')",
                    "required": true
                },
                {
                    "type": OPTION_STRING,
                    "name": "filename",
                    "description": "A previously downloaded file to stream",
                    "required": false
                },
                {
                    "type": OPTION_STRING,
                    "name": "url",
                    "description": "A direct URL to stream instead of a local file",
                    "required": false
                }
            ]
        }),
    ];

    let client = reqwest::Client::new();
    for command in &commands {
        let name = command["name"].as_str().unwrap_or_default();
        let response = client
            .post(url)
            .header("Authorization", format!("Bot {token}"))
            .json(command)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Registering `{name}` failed with {status}: {body}");
        }
        info!(command = name, "Registered slash command");
    }

    Ok(())
}
