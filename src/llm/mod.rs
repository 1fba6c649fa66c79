mod llm_client;
pub mod providers;

pub use llm_client::*;

use crate::errors::Error;
use async_trait::async_trait;

/// Turns extracted page text plus a user question into an answer.
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    /// Builds a prompt from `content` and `question` and returns the
    /// generated answer text.
    async fn answer(&self, content: &str, question: &str) -> Result<String, Error>;
}
