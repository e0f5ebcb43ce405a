// src/config.rs
use std::env;

/// Everything needed to call one provider: where, as whom, and with which model.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Human-readable label, used as `model_name` in the output log.
    pub name: String,
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    /// Only Anthropic-style APIs require an explicit output token cap.
    pub max_tokens: Option<u32>,
}

/// High-level application configuration loaded from environment variables.
///
/// All four providers are always constructed. A missing API key is not an
/// error here: the adapter surfaces it as a failed call on first use, which
/// lands in the log as an error-marked row instead of aborting the run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai: ProviderConfig,
    pub anthropic: ProviderConfig,
    pub deepseek: ProviderConfig,
    pub xai: ProviderConfig,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let openai = ProviderConfig {
            name: "ChatGPT".to_string(),
            api_base: env_or("OPENAI_API_BASE", "https://api.openai.com/v1"),
            api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            model: env_or("OPENAI_MODEL", "gpt-4.1-mini"),
            max_tokens: None,
        };

        let anthropic = ProviderConfig {
            name: "Claude".to_string(),
            api_base: env_or("ANTHROPIC_API_BASE", "https://api.anthropic.com"),
            api_key: env::var("ANTHROPIC_API_KEY").unwrap_or_default(),
            model: env_or("ANTHROPIC_MODEL", "claude-sonnet-4-5-20250929"),
            max_tokens: Some(500),
        };

        let deepseek = ProviderConfig {
            name: "DeepSeek".to_string(),
            api_base: env_or("DEEPSEEK_API_BASE", "https://api.deepseek.com/v1"),
            api_key: env::var("DEEPSEEK_API_KEY").unwrap_or_default(),
            model: env_or("DEEPSEEK_MODEL", "deepseek-chat"),
            max_tokens: None,
        };

        let xai = ProviderConfig {
            name: "Grok".to_string(),
            api_base: env_or("XAI_API_BASE", "https://api.x.ai/v1"),
            api_key: env::var("XAI_API_KEY").unwrap_or_default(),
            model: env_or("XAI_MODEL", "grok-4"),
            max_tokens: None,
        };

        AppConfig {
            openai,
            anthropic,
            deepseek,
            xai,
        }
    }
}
