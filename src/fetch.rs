use anyhow::{Context, Result};
use std::time::Instant;
use tracing::info;
use url::Url;

/// Downloads `url` and returns the body as text. Invalid UTF-8 is replaced
/// with U+FFFD rather than rejected.
pub fn download_text(url: &str) -> Result<String> {
    let start_time = Instant::now();
    info!(action = "start", component = "download", url = url, "Downloading log file");

    let body = fetch_bytes(url)
        .with_context(|| format!("Error downloading file from URL: {url}"))?;
    let text = String::from_utf8_lossy(&body).into_owned();

    let download_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "download",
        bytes = body.len(),
        duration_ms = download_time.as_millis(),
        "Download completed"
    );
    Ok(text)
}

fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let url = Url::parse(url).context("Invalid URL")?;
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    info!(
        action = "response",
        component = "download",
        status = response.status().as_u16(),
        "Received response"
    );
    Ok(response.bytes()?.to_vec())
}
