use crate::errors::Error;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod gemini;
pub mod openai;

/// A text-completion backend: one prompt in, one answer out.
#[async_trait]
pub trait CompletionProvider: Debug + Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, Error>;
}
