//! Streaming download of remote media to local disk.

use std::path::Path;

use futures::StreamExt;
use movienight_core::RelayError;
use tokio::{fs::File, io::AsyncWriteExt};
use tracing::{info, warn};

/// Some remote hosts reject non-browser agents, so present a realistic one.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Stream `url` to `dest` in bounded chunks and return the byte count.
///
/// Redirects are followed. On failure the partially written file is left
/// as-is (no atomic-rename guarantee) and the error carries the bytes
/// written so far. Writes to the same destination are not serialized
/// across requests; the last writer wins.
pub async fn download_to(
    client: &reqwest::Client,
    url: &str,
    dest: &Path,
) -> Result<u64, RelayError> {
    let failed = |details: String, bytes_written: u64| RelayError::Upstream {
        message: "Download failed.".to_string(),
        details,
        bytes_written: Some(bytes_written),
    };

    info!(url = %url, dest = %dest.display(), "Starting download");

    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .map_err(|e| failed(e.to_string(), 0))?
        .error_for_status()
        .map_err(|e| failed(e.to_string(), 0))?;

    let mut file = File::create(dest)
        .await
        .map_err(|e| failed(e.to_string(), 0))?;
    let mut written: u64 = 0;
    let mut body = response.bytes_stream();

    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| {
            warn!(bytes_written = written, "Download aborted mid-stream");
            failed(e.to_string(), written)
        })?;
        file.write_all(&chunk)
            .await
            .map_err(|e| failed(e.to_string(), written))?;
        written += chunk.len() as u64;
    }

    file.flush()
        .await
        .map_err(|e| failed(e.to_string(), written))?;

    info!(bytes = written, "Download finished");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn writes_body_to_disk_and_reports_size() {
        let server = MockServer::start().await;
        let payload = vec![0xABu8; 4096];
        Mock::given(method("GET"))
            .and(path("/a.mp4"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("a.mp4");
        let client = reqwest::Client::new();

        let written = download_to(&client, &format!("{}/a.mp4", server.uri()), &dest)
            .await
            .unwrap();
        assert_eq!(written, 4096);
        assert_eq!(std::fs::read(&dest).unwrap(), payload);
    }

    #[tokio::test]
    async fn http_error_is_an_upstream_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("missing.mp4");
        let client = reqwest::Client::new();

        let err = download_to(&client, &format!("{}/missing.mp4", server.uri()), &dest)
            .await
            .unwrap_err();
        match err {
            RelayError::Upstream { bytes_written, .. } => assert_eq!(bytes_written, Some(0)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn connection_failure_is_an_upstream_failure() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("a.mp4");
        let client = reqwest::Client::new();

        let err = download_to(&client, "http://127.0.0.1:1/a.mp4", &dest)
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::Upstream { .. }));
    }
}
