use super::CompletionProvider;
use crate::constants::GEMINI_API_BASE;
use crate::errors::Error;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Provider implementation for Google's generative language API
#[derive(Debug)]
pub struct GeminiProvider {
    /// API key loaded from environment
    api_key: String,
    /// Model identifier to use (e.g. "gemini-2.5-flash")
    model: String,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider instance
    ///
    /// # Arguments
    /// * `model` - The model identifier to use
    /// * `timeout` - Request timeout for completion calls
    ///
    /// # Returns
    /// * `Result<Self, Error>` - Provider instance or error if the API key is not set
    pub fn new(model: &str, timeout: Duration) -> Result<Self, Error> {
        let api_key = std::env::var("GOOGLE_AI_API_KEY")
            .map_err(|_| Error::Config("GOOGLE_AI_API_KEY environment variable not set".into()))?;

        // never log the full credential
        let key_prefix: String = api_key.chars().take(8).collect();
        debug!("using Google AI key {}...", key_prefix);

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Generation(format!("failed to build HTTP client: {}", e)))?;

        Ok(GeminiProvider {
            api_key,
            model: model.to_string(),
            client,
        })
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, Error> {
        let url = format!("{}/models/{}:generateContent", GEMINI_API_BASE, self.model);
        let request_body = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });

        let res = self
            .client
            .post(&url)
            .query(&[("key", &self.api_key)])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Generation(e.to_string()))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(Error::Generation(format!(
                "Gemini API error ({}): {}",
                status, text
            )));
        }

        let json_resp: serde_json::Value = res
            .json()
            .await
            .map_err(|e| Error::Generation(e.to_string()))?;

        if let Some(content) = json_resp["candidates"][0]["content"]["parts"][0]["text"].as_str() {
            Ok(content.trim().to_string())
        } else {
            Err(Error::Generation(
                "no text in Gemini response".to_string(),
            ))
        }
    }
}
