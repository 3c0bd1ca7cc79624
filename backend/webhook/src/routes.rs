//! Webhook HTTP routes.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use movienight_core::{
    format_bytes,
    wire::{DownloadRequest, DownloadResponse, StartRequest, StartResponse},
    RelayError,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::auth::RequireToken;
use crate::config::WebhookConfig;
use crate::error::ApiError;
use crate::fetch;
use crate::stream::{
    sanitize_filename, sanitize_path_name, validate_source_url, StreamConfigurator, StreamSource,
};

/// Fallback destination when the caller names no file.
const DEFAULT_FILENAME: &str = "current_movie.mp4";

/// State shared by all webhook routes.
pub struct AppState {
    pub config: WebhookConfig,
    pub http: reqwest::Client,
    pub configurator: StreamConfigurator,
}

/// Build the webhook router.
pub fn build_router(config: WebhookConfig) -> Router {
    let http = reqwest::Client::new();
    let configurator = StreamConfigurator::new(http.clone(), config.clone());
    let state = Arc::new(AppState {
        config,
        http,
        configurator,
    });

    Router::new()
        .route("/", get(index))
        .route("/movie/download", post(download_movie))
        .route("/movie/start/{path_name}", post(start_stream))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / — liveness probe, unauthenticated.
async fn index() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "Webhook server is running." }))
}

/// POST /movie/download — fetch a remote file into the download dir.
async fn download_movie(
    State(state): State<Arc<AppState>>,
    _auth: RequireToken,
    Json(request): Json<DownloadRequest>,
) -> Result<Json<DownloadResponse>, ApiError> {
    let filename = sanitize_filename(request.filename.as_deref().unwrap_or(DEFAULT_FILENAME))?;
    let dest = state.config.download_dir.join(&filename);

    let bytes = fetch::download_to(&state.http, &request.url, &dest).await?;
    let file_size = format_bytes(bytes);
    info!(filename = %filename, size = %file_size, "Download complete");

    Ok(Json(DownloadResponse {
        status: "success".to_string(),
        message: "Download complete.".to_string(),
        filename,
        file_size,
    }))
}

/// POST /movie/start/{path_name} — configure MediaMTX to publish a source.
async fn start_stream(
    State(state): State<Arc<AppState>>,
    _auth: RequireToken,
    Path(path_name): Path<String>,
    Json(request): Json<StartRequest>,
) -> Result<Json<StartResponse>, ApiError> {
    let path_name = sanitize_path_name(&path_name)?;

    let source = match (&request.filename, &request.url) {
        (Some(filename), _) => {
            let filename = sanitize_filename(filename)?;
            // The file must already be on disk before MediaMTX is pointed
            // at it.
            let local = state.config.download_dir.join(&filename);
            if !tokio::fs::try_exists(&local).await.unwrap_or(false) {
                return Err(RelayError::NotFound(format!(
                    "Movie file not found: {filename}. Please download it first."
                ))
                .into());
            }
            StreamSource::LocalFile(format!(
                "{}/{}",
                state.config.media_dir.trim_end_matches('/'),
                filename
            ))
        }
        (None, Some(url)) => StreamSource::RemoteUrl(validate_source_url(url)?),
        (None, None) => {
            return Err(RelayError::Validation(
                "JSON body with a 'filename' or 'url' key is required.".to_string(),
            )
            .into());
        }
    };

    let urls = state.configurator.configure(&path_name, &source).await?;
    Ok(Json(StartResponse {
        status: "success".to_string(),
        message: format!("Stream '{path_name}' is configured and starting."),
        hls_url: urls.hls_url,
        rtsp_url: urls.rtsp_url,
    }))
}
