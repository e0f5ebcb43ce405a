// src/providers/mod.rs

use std::time::Duration;

use crate::errors::Result;

pub mod anthropic;
pub mod chat;
pub mod openai;

/// Every provider receives the same neutral system instruction so responses
/// stay comparable across vendors.
pub const SYSTEM_PROMPT: &str = "You are a neutral assistant. Answer objectively.";

/// Fixed sampling temperature shared by all providers.
pub const TEMPERATURE: f32 = 0.7;

/// Upper bound on any single provider call.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// A common trait for Large Language Model (LLM) providers.
/// This allows a unified interface to different vendor backends (OpenAI,
/// Anthropic, and OpenAI-compatible APIs like DeepSeek or xAI).
///
/// Note: We're not using async_trait here, so implementers must handle async directly.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider label, recorded as `model_name` in the log.
    fn name(&self) -> &str;

    /// Sends one prompt as the sole user turn and returns the primary answer
    /// text from the vendor's response envelope. Exactly one request per
    /// call; no retries, no streaming.
    fn generate(&self, prompt: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Builds the shared HTTP client used by all REST providers.
pub fn http_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}
