//! Ollama text generation client

use crate::error::{JobApplierError, Result};
use async_trait::async_trait;
use log::{error, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// A text generation backend. One request per call; failures surface as
/// absence, never as errors, so callers own any retry policy.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Whether the backend is reachable and serving the configured model.
    async fn is_available(&self) -> bool;

    /// Generate a completion for the combined prompts, trimmed of
    /// surrounding whitespace. None on any network, status, or decode
    /// failure, and on an empty completion.
    async fn generate_text(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Option<String>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Debug, Deserialize)]
struct ModelTag {
    name: String,
}

/// Client for a local Ollama server.
pub struct OllamaClient {
    client: Client,
    host: String,
    model: String,
}

impl OllamaClient {
    /// Create a client for the host named by `OLLAMA_HOST`, falling back
    /// to the local default.
    pub fn new(model: impl Into<String>) -> Self {
        let host = std::env::var("OLLAMA_HOST").unwrap_or_else(|_| DEFAULT_OLLAMA_HOST.to_string());
        Self::with_host(host, model)
    }

    pub fn with_host(host: impl Into<String>, model: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|e| {
                error!("Failed to build HTTP client with timeout, using default client: {}", e);
                Client::new()
            });

        let host: String = host.into();
        Self {
            client,
            host: host.trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.host)
    }

    fn tags_url(&self) -> String {
        format!("{}/api/tags", self.host)
    }

    /// Names of the models installed on the server. Unlike the trait
    /// methods this propagates failures, so diagnostics can show the cause.
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let response = self.client.get(self.tags_url()).send().await?;

        if !response.status().is_success() {
            return Err(JobApplierError::LlmUnavailable(format!(
                "Ollama server returned status code: {}",
                response.status()
            )));
        }

        let tags: TagsResponse = response.json().await?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn is_available(&self) -> bool {
        match self.list_models().await {
            Ok(models) => {
                if models.iter().any(|name| name == &self.model) {
                    true
                } else {
                    warn!("Model {} not found in Ollama. Please run: ollama pull {}", self.model, self.model);
                    false
                }
            }
            Err(e) => {
                error!("Ollama API check failed: {}", e);
                false
            }
        }
    }

    async fn generate_text(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Option<String> {
        let combined_prompt = format!("{}\n\n{}", system_prompt, user_prompt);
        let payload = GenerateRequest {
            model: &self.model,
            prompt: &combined_prompt,
            stream: false,
            options: GenerateOptions {
                temperature,
                num_predict: max_tokens,
            },
        };

        let response = match self.client.post(self.generate_url()).json(&payload).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Error generating text with Ollama: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            error!("Ollama API error: {}", response.status());
            return None;
        }

        match response.json::<GenerateResponse>().await {
            Ok(body) => {
                let text = body.response.trim();
                if text.is_empty() {
                    warn!("Ollama returned an empty completion");
                    None
                } else {
                    Some(text.to_string())
                }
            }
            Err(e) => {
                error!("Error decoding Ollama response: {}", e);
                None
            }
        }
    }
}
