use crate::constants::ANSWER_INSTRUCTION;
use crate::errors::Error;
use crate::llm::providers::CompletionProvider;
use crate::llm::AnswerGenerator;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Generic answer generator that delegates prompt completion to a concrete
/// provider.
#[derive(Debug)]
pub struct LlmClient {
    provider: Box<dyn CompletionProvider>,
    prompt_max_chars: usize,
}

impl LlmClient {
    /// Creates a new LLM client with the specified provider and model.
    ///
    /// # Arguments
    /// * `provider_name` - Name of the completion provider ("gemini" or "openai")
    /// * `model` - Model name to use with the provider
    /// * `timeout` - Request timeout for completion calls
    /// * `prompt_max_chars` - Cap on page content embedded in the prompt
    ///
    /// # Returns
    /// * `Result<LlmClient, Error>` - New client instance or a configuration error
    pub fn new(
        provider_name: &str,
        model: &str,
        timeout: Duration,
        prompt_max_chars: usize,
    ) -> Result<Self, Error> {
        let provider: Box<dyn CompletionProvider> = match provider_name {
            "gemini" => Box::new(crate::llm::providers::gemini::GeminiProvider::new(
                model, timeout,
            )?),
            "openai" => Box::new(crate::llm::providers::openai::OpenAiProvider::new(
                model, timeout,
            )?),
            _ => {
                return Err(Error::Config(format!(
                    "unknown provider '{}'",
                    provider_name
                )))
            }
        };

        Ok(LlmClient {
            provider,
            prompt_max_chars,
        })
    }

    /// Composes the instruction prompt from the question and the page text.
    ///
    /// Content is cut at the prompt budget here, independently of the
    /// fetcher's own storage cap.
    fn build_prompt(&self, content: &str, question: &str) -> String {
        let truncated: String = content.chars().take(self.prompt_max_chars).collect();
        format!(
            "{} \"{}\"\n\nContent: {}",
            ANSWER_INSTRUCTION, question, truncated
        )
    }
}

#[async_trait]
impl AnswerGenerator for LlmClient {
    async fn answer(&self, content: &str, question: &str) -> Result<String, Error> {
        let prompt = self.build_prompt(content, question);
        debug!("prompt is {} characters", prompt.chars().count());

        let answer = self.provider.complete(&prompt).await?;
        if answer.trim().is_empty() {
            return Err(Error::Generation("empty completion response".into()));
        }
        Ok(answer.trim().to_string())
    }
}
