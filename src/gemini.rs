#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Minimal client for the generative-language `generateContent` endpoint,
//! plus helpers for digging JSON out of model replies.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config;

/// Inline binary content attached to a request part.
#[derive(Debug, Clone, Serialize)]
pub struct InlineData {
    /// MIME type of the payload, e.g. `image/png`.
    pub mime_type: String,
    /// Base64-encoded payload.
    pub data:      String,
}

/// A single part of a request's content: text, inline data, or both.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Part {
    /// Plain text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text:        Option<String>,
    /// Inline binary content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// Creates a text-only part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text:        Some(text.into()),
            inline_data: None,
        }
    }

    /// Creates an inline-data part from a MIME type and base64 payload.
    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text:        None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data:      data.into(),
            }),
        }
    }
}

/// One content entry in a generateContent request.
#[derive(Debug, Clone, Serialize)]
struct Content {
    /// The parts making up this content entry.
    parts: Vec<Part>,
}

/// Request body for generateContent.
#[derive(Debug, Clone, Serialize)]
struct GenerateContentRequest {
    /// The conversation contents; a single entry for one-shot prompts.
    contents: Vec<Content>,
}

/// A part of the model's reply.
#[derive(Debug, Clone, Deserialize)]
struct ReplyPart {
    /// Text content of the part, if any.
    text: Option<String>,
}

/// The content block of one candidate.
#[derive(Debug, Clone, Deserialize)]
struct ReplyContent {
    /// The parts making up the candidate's content.
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

/// One candidate completion in the model's reply.
#[derive(Debug, Clone, Deserialize)]
struct Candidate {
    /// The candidate's content, if the model produced any.
    content: Option<ReplyContent>,
}

/// Response body for generateContent.
#[derive(Debug, Clone, Deserialize)]
struct GenerateContentResponse {
    /// Candidate completions; the first is used.
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// A configured generateContent client borrowing the shared HTTP client.
#[derive(Clone)]
pub struct GeminiClient {
    /// Shared reqwest client.
    client:   Client,
    /// Fully resolved request URL including model and key.
    endpoint: String,
    /// Timeout applied to each request.
    timeout:  Duration,
}

impl GeminiClient {
    /// Builds a client from the given configuration. Returns `None` when no
    /// API key is configured.
    pub fn from_handle(config: &config::ConfigHandle) -> Option<Self> {
        let gemini = config.gemini()?;
        let endpoint = format!(
            "{}/models/{}:generateContent?key={}",
            gemini.api_base(),
            gemini.model(),
            gemini.api_key()
        );
        Some(Self {
            client: config.http_client(),
            endpoint,
            timeout: config.gemini_timeout(),
        })
    }

    /// Sends the given parts as a single-content request and returns the text
    /// of the first candidate.
    pub async fn generate(&self, parts: Vec<Part>) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content { parts }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .context("Failed to call generateContent")?
            .error_for_status()
            .context("generateContent returned error status")?;

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to deserialize generateContent response")?;

        first_candidate_text(parsed)
    }

    /// Sends a single text prompt and returns the text of the first
    /// candidate.
    pub async fn generate_text(&self, prompt: impl Into<String>) -> Result<String> {
        self.generate(vec![Part::text(prompt)]).await
    }
}

/// Extracts the first candidate's text from a parsed response.
fn first_candidate_text(response: GenerateContentResponse) -> Result<String> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text);

    match text {
        Some(text) if !text.is_empty() => Ok(text),
        _ => bail!("generateContent reply contained no candidate text"),
    }
}

/// Removes Markdown code fences (```json ... ```) from a model reply.
pub fn strip_code_fences(reply: &str) -> String {
    reply.replace("```json", "").replace("```", "")
}

/// Extracts the outermost `{ ... }` object from a model reply, if present.
///
/// Models often wrap their JSON in prose or fences despite instructions;
/// this mirrors the lenient extraction the grading and generation paths
/// depend on.
pub fn extract_json_object(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&reply[start..=end])
}

/// Strips fences and parses the first JSON object in a model reply into `T`.
pub fn parse_json_reply<T: serde::de::DeserializeOwned>(reply: &str) -> Result<T> {
    let cleaned = strip_code_fences(reply);
    let object = extract_json_object(&cleaned)
        .with_context(|| format!("Model reply contained no JSON object: {reply}"))?;
    serde_json::from_str(object)
        .with_context(|| format!("Failed to parse model reply as JSON: {object}"))
}
