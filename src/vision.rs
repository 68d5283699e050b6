#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Text extraction from textbook images via the generative-language API.
//!
//! Accepts either a `data:` URL (used directly) or a remote image URL, which
//! is fetched and re-encoded as base64 before dispatch.

use anyhow::{Context, Result, bail};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::Client;

use crate::{
    gemini::{GeminiClient, Part},
    prompts::PromptBundle,
};

/// MIME type assumed when a fetched image carries no content type.
const FALLBACK_MIME: &str = "image/png";

/// Extracts the study text from the image at `image_url`.
pub async fn extract_text(
    client: &GeminiClient,
    http: &Client,
    prompts: &PromptBundle,
    image_url: &str,
) -> Result<String> {
    if image_url.is_empty() {
        bail!("An image URL is required");
    }

    let (mime_type, data) = if image_url.starts_with("data:") {
        split_data_url(image_url)?
    } else {
        fetch_as_base64(http, image_url).await?
    };

    let parts = vec![
        Part::text(prompts.extract_text()),
        Part::inline_data(mime_type, data),
    ];

    client
        .generate(parts)
        .await
        .context("Text extraction request to the model failed")
}

/// Splits a `data:<mime>;base64,<payload>` URL into its MIME type and
/// payload.
fn split_data_url(url: &str) -> Result<(String, String)> {
    let (header, data) = url
        .split_once(',')
        .context("Data URL is missing its payload")?;
    let mime_type = header
        .strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .filter(|mime| !mime.is_empty())
        .unwrap_or(FALLBACK_MIME);

    Ok((mime_type.to_string(), data.to_string()))
}

/// Fetches a remote image and returns its MIME type and base64 payload.
async fn fetch_as_base64(http: &Client, url: &str) -> Result<(String, String)> {
    let response = http
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch image from {url}"))?
        .error_for_status()
        .with_context(|| format!("Image fetch from {url} returned error status"))?;

    let mime_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.split(';').next().unwrap_or(value).trim().to_string())
        .unwrap_or_else(|| FALLBACK_MIME.to_string());

    let bytes = response
        .bytes()
        .await
        .with_context(|| format!("Failed to read image bytes from {url}"))?;

    Ok((mime_type, STANDARD.encode(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::split_data_url;

    #[test]
    fn data_url_splits_into_mime_and_payload() {
        let (mime, data) = split_data_url("data:image/jpeg;base64,aGVsbG8=").expect("split");
        assert_eq!(mime, "image/jpeg");
        assert_eq!(data, "aGVsbG8=");
    }

    #[test]
    fn data_url_without_mime_falls_back() {
        let (mime, _) = split_data_url("data:;base64,aGVsbG8=").expect("split");
        assert_eq!(mime, "image/png");
    }

    #[test]
    fn data_url_without_payload_is_rejected() {
        assert!(split_data_url("data:image/png;base64").is_err());
    }
}
