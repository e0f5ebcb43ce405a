use std::fs;
use std::path::Path;

use promptrun::config::AppConfig;
use promptrun::errors::Result;
use promptrun::prompts::load_prompts;
use promptrun::sink::ResultSink;
use promptrun::{banner, providers, runner};

const PROMPTS_FILE: &str = "prompts/prompts.csv";
const OUTPUT_FILE: &str = "responses/model_responses.csv";

#[tokio::main]
async fn main() {
    // Print the startup banner
    banner::print_banner();

    // Load .env if present; credentials may also come from the environment
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  Warning: Could not load .env file: {}", e);
        eprintln!("   API keys will be read from the process environment");
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Err(e) = run().await {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = AppConfig::from_env();

    println!("📖 Reading prompts from: {}", PROMPTS_FILE);
    let prompts = load_prompts(PROMPTS_FILE)?;
    println!("   {} prompts loaded", prompts.len());

    if let Some(parent) = Path::new(OUTPUT_FILE).parent() {
        fs::create_dir_all(parent)?;
    }

    let client = providers::http_client()?;
    let sink = ResultSink::new(OUTPUT_FILE);

    runner::run(&config, &client, &prompts, &sink).await
}
