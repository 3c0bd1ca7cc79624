//! Authenticated relay client for the internal webhook server.
//!
//! Every failure mode resolves to reply text. Discord enforces a response
//! window on interactions, so the relay leg must never surface an
//! unhandled fault to the endpoint.

use std::time::Duration;

use anyhow::Result;
use movienight_core::wire::{DownloadRequest, DownloadResponse, StartRequest, StartResponse};
use reqwest::StatusCode;
use tracing::error;

const AUTH_HEADER: &str = "X-Auth-Token";

/// Client for the token-gated webhook API.
pub struct RelayClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl RelayClient {
    pub fn new(base_url: String, token: String, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Relay a `/download` command; returns the chat reply text.
    pub async fn download(&self, url: &str, filename: Option<&str>) -> String {
        let body = DownloadRequest {
            url: url.to_string(),
            filename: filename.map(str::to_string),
        };
        let response = self
            .http
            .post(format!("{}/movie/download", self.base_url))
            .header(AUTH_HEADER, &self.token)
            .json(&body)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status() == StatusCode::OK => {
                match resp.json::<DownloadResponse>().await {
                    Ok(data) => format!(
                        "✅ **Download complete!**\nFile: `{}`\nSize: **{}**",
                        data.filename, data.file_size
                    ),
                    Err(e) => {
                        error!(error = %e, "Malformed download response from webhook");
                        format!("❌ **Error downloading:**\n`{e}`")
                    }
                }
            }
            Ok(resp) => {
                let text = resp.text().await.unwrap_or_default();
                format!("❌ **Error downloading:**\n`{text}`")
            }
            Err(e) => {
                error!(error = %e, "Relay call to webhook failed");
                format!("❌ **Error downloading:**\n`{e}`")
            }
        }
    }

    /// Relay a `/start` command; returns the chat reply text.
    pub async fn start(&self, path_name: &str, request: &StartRequest) -> String {
        let response = self
            .http
            .post(format!("{}/movie/start/{}", self.base_url, path_name))
            .header(AUTH_HEADER, &self.token)
            .json(request)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status() == StatusCode::OK => {
                match resp.json::<StartResponse>().await {
                    Ok(data) => {
                        format!("🎬 **Stream is configured!**\nWatch here: {}", data.hls_url)
                    }
                    Err(e) => {
                        error!(error = %e, "Malformed start response from webhook");
                        format!("❌ **Error starting stream:**\n`{e}`")
                    }
                }
            }
            Ok(resp) => {
                let text = resp.text().await.unwrap_or_default();
                format!("❌ **Error starting stream:**\n`{text}`")
            }
            Err(e) => {
                error!(error = %e, "Relay call to webhook failed");
                format!("❌ **Error starting stream:**\n`{e}`")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(base_url: String) -> RelayClient {
        RelayClient::new(base_url, "secret".into(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn download_success_reply_names_file_and_size() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/movie/download"))
            .and(header("X-Auth-Token", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "message": "Download complete.",
                "filename": "a.mp4",
                "fileSize": "12.34 MB"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client(server.uri())
            .download("https://example.test/a.mp4", Some("a.mp4"))
            .await;
        assert!(reply.contains("a.mp4"));
        assert!(reply.contains("12.34 MB"));
    }

    #[tokio::test]
    async fn start_failure_reply_echoes_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/movie/start/movie"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_string("Movie file not found: a.mp4. Please download it first."),
            )
            .mount(&server)
            .await;

        let request = StartRequest {
            filename: Some("a.mp4".into()),
            url: None,
        };
        let reply = client(server.uri()).start("movie", &request).await;
        assert!(reply.contains("Movie file not found: a.mp4"));
    }

    #[tokio::test]
    async fn start_success_reply_contains_hls_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/movie/start/movie"))
            .and(header("X-Auth-Token", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "message": "Stream 'movie' is configured and starting.",
                "hlsUrl": "https://movienight.example/movie/",
                "rtspUrl": "rtsp://movienight.example:8554/movie"
            })))
            .mount(&server)
            .await;

        let request = StartRequest {
            filename: Some("a.mp4".into()),
            url: None,
        };
        let reply = client(server.uri()).start("movie", &request).await;
        assert!(reply.contains("https://movienight.example/movie/"));
    }

    #[tokio::test]
    async fn network_failure_becomes_reply_text() {
        // Nothing listens here; the connection is refused.
        let reply = client("http://127.0.0.1:1".into())
            .download("https://example.test/a.mp4", None)
            .await;
        assert!(reply.contains("Error downloading"));
    }
}
