// src/runner.rs
use reqwest::Client;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::prompts::Prompt;
use crate::providers::{
    LlmProvider, anthropic::AnthropicProvider, chat::ChatCompletionsProvider,
    openai::OpenAIProvider,
};
use crate::sink::{ResponseRecord, ResultSink};

/// Prefix marking a recovered per-call failure in the output log. Downstream
/// analysis treats any response_text starting with this as a failed call.
pub const ERROR_MARKER: &str = "[ERROR]";

/// Runs every prompt through one provider, appending a record per prompt.
///
/// A failed call never stops the loop: the error becomes a marker-prefixed
/// response_text and the run moves on to the next prompt. Only sink write
/// failures propagate, since losing the log defeats the run's purpose.
pub async fn run_provider<P: LlmProvider>(
    provider: &P,
    prompts: &[Prompt],
    sink: &ResultSink,
) -> Result<()> {
    for prompt in prompts {
        println!("📤 Sending prompt {} to {}...", prompt.prompt_id, provider.name());

        let response_text = match provider.generate(&prompt.prompt_text).await {
            Ok(answer) => answer,
            Err(e) => {
                log::warn!("{} failed on prompt {}: {}", provider.name(), prompt.prompt_id, e);
                format!("{ERROR_MARKER} {e}")
            }
        };

        sink.append(&ResponseRecord {
            prompt_id: prompt.prompt_id.clone(),
            model_name: provider.name().to_string(),
            response_text,
        })?;
    }

    println!("✅ {} run completed.", provider.name());
    Ok(())
}

/// Runs all prompts against all providers in the fixed configured order:
/// ChatGPT, Claude, DeepSeek, Grok. Providers form the outer loop, prompts
/// the inner one, fully sequential, so the log reads provider-major /
/// prompt-minor.
pub async fn run(
    config: &AppConfig,
    client: &Client,
    prompts: &[Prompt],
    sink: &ResultSink,
) -> Result<()> {
    sink.initialize()?;

    let openai = OpenAIProvider::new(client.clone(), config.openai.clone());
    run_provider(&openai, prompts, sink).await?;

    let anthropic = AnthropicProvider::new(client.clone(), config.anthropic.clone());
    run_provider(&anthropic, prompts, sink).await?;

    let deepseek = ChatCompletionsProvider::new(client.clone(), config.deepseek.clone());
    run_provider(&deepseek, prompts, sink).await?;

    let xai = ChatCompletionsProvider::new(client.clone(), config.xai.clone());
    run_provider(&xai, prompts, sink).await?;

    println!("🏁 All providers completed.");
    Ok(())
}
