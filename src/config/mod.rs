use crate::constants::*;
use std::str::FromStr;
use std::time::Duration;

/// Process-wide configuration, read once at startup.
///
/// Per-task inputs (URL, question) arrive with each submission; everything
/// here is fixed for the lifetime of the process. Values come from the
/// environment (a `.env` file is loaded beforehand by the entry point) and
/// fall back to the defaults in [`crate::constants`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the SQLite database file
    pub database_path: String,
    /// Completion provider name ("gemini" or "openai")
    pub llm_provider: String,
    /// Model identifier passed to the provider
    pub llm_model: String,
    /// Interval between dispatch-loop ticks
    pub tick_interval: Duration,
    /// Request timeout when fetching the target website
    pub fetch_timeout: Duration,
    /// Request timeout for the completion API call
    pub generation_timeout: Duration,
    /// Storage cap for extracted page text, in characters
    pub scrape_max_chars: usize,
    /// Prompt cap for page text sent to the completion API, in characters
    pub prompt_max_chars: usize,
}

impl Config {
    /// Builds the configuration from environment variables, using defaults
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        Config {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "askpage.db".to_string()),
            llm_provider: std::env::var("LLM_PROVIDER")
                .unwrap_or_else(|_| DEFAULT_LLM_PROVIDER.to_string()),
            llm_model: std::env::var("LLM_MODEL")
                .unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
            tick_interval: Duration::from_secs(env_parse(
                "TICK_INTERVAL_SECS",
                DEFAULT_TICK_INTERVAL_SECS,
            )),
            fetch_timeout: Duration::from_secs(env_parse(
                "FETCH_TIMEOUT_SECS",
                DEFAULT_FETCH_TIMEOUT_SECS,
            )),
            generation_timeout: Duration::from_secs(env_parse(
                "GENERATION_TIMEOUT_SECS",
                DEFAULT_GENERATION_TIMEOUT_SECS,
            )),
            scrape_max_chars: env_parse("SCRAPE_MAX_CHARS", DEFAULT_SCRAPE_MAX_CHARS),
            prompt_max_chars: env_parse("PROMPT_MAX_CHARS", DEFAULT_PROMPT_MAX_CHARS),
        }
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
