// HTTP client for the OpenAI chat-completions API

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use super::types::{ChatRequest, ChatResponse};
use crate::config::Config;

const REQUEST_TIMEOUT_SECS: u64 = 60;

pub struct GptClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    service_label: String,
}

impl GptClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            service_label: config.service_label.clone(),
        })
    }

    /// Human-readable name of the backing service (used in banners and
    /// error prefixes).
    pub fn service_label(&self) -> &str {
        &self.service_label
    }

    /// Send a prompt and return the reply as displayable text.
    ///
    /// Never fails: every failure mode (transport, auth, remote error,
    /// malformed response) is folded into an `[Error with <service>] ...`
    /// string so the session always degrades to a printed message.
    pub async fn complete(&self, prompt: &str) -> String {
        match self.complete_once(prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Completion request failed: {:#}", e);
                format!("[Error with {}] {:#}", self.service_label, e)
            }
        }
    }

    /// Send a single completion request (no retry).
    async fn complete_once(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(&self.model, prompt);
        let url = format!("{}/v1/chat/completions", self.base_url);

        tracing::debug!("Sending request to {}: {:?}", url, request);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send completion request")?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!("Completion request failed: status {}: {}", status, error_body);
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse completion response")?;

        tracing::debug!("Received response: {:?}", chat_response);

        let text = chat_response
            .first_text()
            .context("Completion response contained no choices")?;

        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = Config::with_api_key("test-key".to_string());
        let client = GptClient::new(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_service_label_from_config() {
        let config = Config::with_api_key("test-key".to_string());
        let client = GptClient::new(&config).unwrap();
        assert_eq!(client.service_label(), "GPT-4o");
    }
}
