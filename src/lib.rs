//! Scrape-and-answer task service.
//!
//! Callers submit a website URL plus a question over the HTTP API; a single
//! background worker fetches the page, extracts its visible text, asks an LLM
//! to answer the question from that text, and records the outcome on a task
//! row that callers poll until it reaches a terminal state.

/// HTTP API: routes, handlers, server setup and error mapping
pub mod api;
/// Command line interface definition
pub mod cli;
/// Process-wide configuration loaded from the environment
pub mod config;
/// Default caps, timeouts and prompt text
pub mod constants;
/// Task state machine and the dispatch worker
pub mod core;
/// SQLite-backed task store
pub mod db;
/// Crate-level error type
pub mod errors;
/// LLM answer generation and completion providers
pub mod llm;
/// Diesel table definitions
pub mod schema;
/// Page fetching and visible-text extraction
pub mod scrape;
/// Logging setup
pub mod utils;
