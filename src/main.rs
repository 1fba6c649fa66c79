//! Main entry point for the application.
//!
//! Initializes logging, loads environment variables and configuration,
//! starts the HTTP API in a background task and runs the pipeline worker
//! in the foreground.

use askpage::api;
use askpage::cli::Cli;
use askpage::config::Config;
use askpage::core::PipelineWorker;
use askpage::db::Database;
use askpage::llm::LlmClient;
use askpage::scrape::HttpFetcher;
use askpage::utils;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Parse CLI arguments
/// 2. Initialize logging system
/// 3. Load environment variables and configuration
/// 4. Open the task database and build the fetcher/generator
/// 5. Start the API server and run the worker
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    utils::init_logging(&cli.logging_level, cli.log_to_file);

    if let Err(e) = dotenvy::dotenv() {
        warn!("Failed to load .env file: {}", e);
    }

    let config = Config::from_env();

    let database = Database::new(&config.database_path).expect("Failed to open task database");
    let fetcher = Arc::new(
        HttpFetcher::new(config.fetch_timeout, config.scrape_max_chars)
            .expect("Failed to build content fetcher"),
    );
    let generator = Arc::new(
        LlmClient::new(
            &config.llm_provider,
            &config.llm_model,
            config.generation_timeout,
            config.prompt_max_chars,
        )
        .expect("Failed to build answer generator"),
    );

    info!("Starting API server on port {}", cli.port);
    let api_database = database.clone();
    let port = cli.port;
    tokio::spawn(async move {
        if let Err(e) = api::server::launch_server(port, api_database).await {
            error!("Failed to start server: {}", e);
        }
    });

    let worker = PipelineWorker::new(database, fetcher, generator, config.tick_interval);
    worker.run().await;
}
