use super::CompletionProvider;
use crate::constants::OPENAI_CHAT_COMPLETIONS_URL;
use crate::errors::Error;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

/// Provider implementation for OpenAI's API
#[derive(Debug)]
pub struct OpenAiProvider {
    /// OpenAI API key loaded from environment
    api_key: String,
    /// Model identifier to use (e.g. "gpt-4o-mini")
    model: String,
    client: Client,
}

impl OpenAiProvider {
    /// Creates a new OpenAI provider instance
    ///
    /// # Arguments
    /// * `model` - The model identifier to use
    /// * `timeout` - Request timeout for completion calls
    ///
    /// # Returns
    /// * `Result<Self, Error>` - Provider instance or error if the API key is not set
    pub fn new(model: &str, timeout: Duration) -> Result<Self, Error> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| Error::Config("OPENAI_API_KEY environment variable not set".into()))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Generation(format!("failed to build HTTP client: {}", e)))?;

        Ok(OpenAiProvider {
            api_key,
            model: model.to_string(),
            client,
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, Error> {
        let request_body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": 0.7
        });

        let res = self
            .client
            .post(OPENAI_CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Generation(e.to_string()))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(Error::Generation(format!(
                "OpenAI API error ({}): {}",
                status, text
            )));
        }

        let json_resp: serde_json::Value = res
            .json()
            .await
            .map_err(|e| Error::Generation(e.to_string()))?;

        if let Some(content) = json_resp["choices"][0]["message"]["content"].as_str() {
            Ok(content.trim().to_string())
        } else {
            Err(Error::Generation(
                "no content in OpenAI response".to_string(),
            ))
        }
    }
}
