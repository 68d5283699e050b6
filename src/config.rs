#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    sync::{Arc, Mutex, OnceLock},
    time::Duration,
};

use anyhow::{Context, Result};
use reqwest::Client;

use crate::prompts::PromptBundle;

/// Default model identifier for generateContent requests.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";

/// Default API base for the generative-language endpoint.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default port the HTTP API binds to.
pub const DEFAULT_PORT: u16 = 8788;

/// Generative-language credentials and tuning sourced from the environment.
#[derive(Clone)]
pub struct GeminiEnv {
    /// Base URL for the generative-language API.
    api_base: String,
    /// API key appended to generateContent requests.
    api_key:  String,
    /// Model identifier for generateContent requests.
    model:    String,
}

impl GeminiEnv {
    /// Construct a `GeminiEnv` from environment variables; returns `None` if
    /// no API key is present.
    fn from_env() -> Option<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").ok()?.trim().to_owned();
        if api_key.is_empty() {
            return None;
        }

        let api_base = std::env::var("GEMINI_API_BASE")
            .map(|value| value.trim().trim_end_matches('/').to_owned())
            .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string());
        let model = std::env::var("GEMINI_MODEL")
            .map(|value| value.trim().to_owned())
            .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        Some(Self {
            api_base,
            api_key,
            model,
        })
    }

    /// Returns the API base URL used for generateContent requests.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the API key used for generateContent requests.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Runtime and prompt configuration shared across the crate.
pub struct ConfigState {
    /// Generative-language credentials, if configured.
    gemini:         Option<GeminiEnv>,
    /// Shared reqwest HTTP client reused across network helpers.
    http_client:    Client,
    /// Prompt templates sent to the generative-language API.
    prompts:        PromptBundle,
    /// Timeout applied to each generateContent request.
    gemini_timeout: Duration,
    /// Port the HTTP API binds to.
    port:           u16,
}

impl ConfigState {
    /// Construct a new configuration instance by reading the environment.
    fn new() -> Result<Self> {
        let http_client = Client::builder()
            // Avoid macOS dynamic store lookups that fail in sandboxed environments.
            .no_proxy()
            .build()
            .context("Failed to construct shared HTTP client")?;

        let port = std::env::var("QUIZGEN_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            gemini: GeminiEnv::from_env(),
            http_client,
            prompts: PromptBundle::default(),
            gemini_timeout: read_timeout_secs("QUIZGEN_GEMINI_TIMEOUT_SECS", 60),
            port,
        })
    }

    /// Returns a clone of the shared reqwest HTTP client.
    pub fn http_client(&self) -> Client {
        self.http_client.clone()
    }

    /// Returns the generative-language configuration, if an API key is
    /// present in the environment.
    pub fn gemini(&self) -> Option<&GeminiEnv> {
        self.gemini.as_ref()
    }

    /// Returns the prompt bundle.
    pub fn prompts(&self) -> &PromptBundle {
        &self.prompts
    }

    /// Returns the configured generateContent timeout.
    pub fn gemini_timeout(&self) -> Duration {
        self.gemini_timeout
    }

    /// Returns the port the HTTP API binds to.
    pub fn port(&self) -> u16 {
        self.port
    }
}

/// Shared configuration handle used throughout the crate.
#[derive(Clone)]
pub struct ConfigHandle(Arc<ConfigState>);

impl std::ops::Deref for ConfigHandle {
    type Target = ConfigState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG_SLOT: OnceLock<Mutex<Option<Arc<ConfigState>>>> = OnceLock::new();

/// Returns the mutex guarding the global configuration slot.
fn slot() -> &'static Mutex<Option<Arc<ConfigState>>> {
    CONFIG_SLOT.get_or_init(|| Mutex::new(None))
}

/// Ensure the global configuration has been initialized and return a handle.
pub fn ensure_initialized() -> Result<ConfigHandle> {
    let slot = slot();
    let mut guard = slot.lock().expect("config slot poisoned");
    if let Some(cfg) = guard.as_ref() {
        return Ok(ConfigHandle(Arc::clone(cfg)));
    }

    let cfg = ConfigState::new().map(Arc::new)?;
    *guard = Some(Arc::clone(&cfg));
    Ok(ConfigHandle(cfg))
}

/// Returns the active configuration, initializing it on demand.
pub fn get() -> ConfigHandle {
    ensure_initialized().expect("configuration initialization failed")
}

/// Parses an environment variable into a `Duration`, falling back to
/// `default_secs` when parsing fails or the variable is missing.
fn read_timeout_secs(env: &str, default_secs: u64) -> Duration {
    std::env::var(env)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(default_secs))
}
