//! Interactions HTTP endpoint: verify, parse, route, always answer.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use movienight_core::wire::StartRequest;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::BotConfig;
use crate::interactions::{
    options_by_name, Interaction, InteractionResponse, INTERACTION_APPLICATION_COMMAND,
    INTERACTION_PING,
};
use crate::relay::RelayClient;
use crate::verify::SignatureVerifier;

const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";
const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

/// State shared by the interactions route.
pub struct AppState {
    verifier: SignatureVerifier,
    relay: RelayClient,
}

/// Build the interactions router.
pub fn build_router(config: BotConfig) -> Result<Router> {
    let verifier = SignatureVerifier::from_hex(&config.public_key_hex)?;
    let relay = RelayClient::new(
        config.webhook_base_url,
        config.webhook_token,
        Duration::from_secs(config.relay_timeout_secs),
    )?;
    let state = Arc::new(AppState { verifier, relay });

    Ok(Router::new()
        .route("/interactions", post(interactions))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// POST /interactions — the single Discord-facing endpoint.
async fn interactions(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    // Verification runs on the raw body, before any parsing.
    let signature = header_str(&headers, SIGNATURE_HEADER);
    let timestamp = header_str(&headers, TIMESTAMP_HEADER);
    let (Some(signature), Some(timestamp)) = (signature, timestamp) else {
        warn!("Interaction missing signature headers");
        return (StatusCode::UNAUTHORIZED, "invalid request signature").into_response();
    };
    if !state.verifier.verify(timestamp, &body, signature) {
        warn!("Interaction failed signature verification");
        return (StatusCode::UNAUTHORIZED, "invalid request signature").into_response();
    }

    let interaction: Interaction = match serde_json::from_slice(&body) {
        Ok(interaction) => interaction,
        Err(e) => {
            warn!(error = %e, "Failed to parse interaction body");
            return (StatusCode::BAD_REQUEST, "bad interaction payload").into_response();
        }
    };

    match interaction.kind {
        INTERACTION_PING => Json(InteractionResponse::pong()).into_response(),
        INTERACTION_APPLICATION_COMMAND => {
            let Some(data) = interaction.data else {
                return (StatusCode::BAD_REQUEST, "missing command data").into_response();
            };
            let options = options_by_name(&data.options);
            let reply = dispatch_command(&state, &data.name, &options).await;
            Json(reply).into_response()
        }
        other => {
            warn!(kind = other, "Unsupported interaction type");
            (StatusCode::OK, "OK").into_response()
        }
    }
}

/// Route a verified command to its handler. Unknown names get a fallback
/// reply with no side effects.
async fn dispatch_command(
    state: &AppState,
    name: &str,
    options: &HashMap<String, String>,
) -> InteractionResponse {
    match name {
        "download" => {
            let Some(url) = options.get("url") else {
                return InteractionResponse::message("Missing required option: `url`.");
            };
            info!(command = "download", "Relaying command");
            let reply = state
                .relay
                .download(url, options.get("filename").map(String::as_str))
                .await;
            InteractionResponse::message(reply)
        }
        "start" => {
            let Some(path_name) = options.get("path_name") else {
                return InteractionResponse::message("Missing required option: `path_name`.");
            };
            let request = StartRequest {
                filename: options.get("filename").cloned(),
                url: options.get("url").cloned(),
            };
            if request.filename.is_none() && request.url.is_none() {
                return InteractionResponse::message(
                    "Provide either a `filename` or a `url` to stream.",
                );
            }
            info!(command = "start", path_name = %path_name, "Relaying command");
            InteractionResponse::message(state.relay.start(path_name, &request).await)
        }
        other => {
            warn!(command = other, "Unknown command");
            InteractionResponse::message(format!("Unknown command: `/{other}`"))
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
