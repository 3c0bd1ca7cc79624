//! Wire types for the bot ↔ webhook relay protocol.
//!
//! Field names match the JSON sent over the wire (`fileSize`, `hlsUrl`,
//! `rtspUrl`), hence the camelCase renames.

use serde::{Deserialize, Serialize};

/// `POST /movie/download` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub url: String,
    /// Destination filename; the webhook defaults it when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// `POST /movie/download` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponse {
    pub status: String,
    pub message: String,
    pub filename: String,
    /// Human-readable size, informational only.
    pub file_size: String,
}

/// `POST /movie/start/{path_name}` request body.
///
/// Exactly one of `filename` (previously downloaded file) or `url`
/// (direct remote source) must be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StartRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// `POST /movie/start/{path_name}` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    pub status: String,
    pub message: String,
    pub hls_url: String,
    pub rtsp_url: String,
}

/// Error body returned by every failing webhook route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
