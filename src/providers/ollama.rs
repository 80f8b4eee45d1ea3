use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::EmbeddingProvider;

/// Ollama client for the embeddings API
#[derive(Debug)]
pub struct Ollama {
    /// Base URL of the Ollama API
    base_url: String,
    /// Embedding model name
    model: String,
    /// HTTP client for making requests
    client: Client,
}

/// Batch embedding request for the Ollama API
#[derive(Debug, Serialize, Deserialize)]
pub struct EmbedRequest {
    /// Model name to embed with
    model: String,
    /// Texts to embed
    input: Vec<String>,
    /// How long to keep the model loaded in memory
    #[serde(skip_serializing_if = "Option::is_none")]
    keep_alive: Option<String>,
}

/// Batch embedding response from the Ollama API
#[derive(Debug, Serialize, Deserialize)]
pub struct EmbedResponse {
    /// One embedding vector per input, in input order
    pub embeddings: Vec<Vec<f32>>,
}

impl Ollama {
    /// Create a new Ollama client from a base URL and model name
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Get the Ollama API version
    pub async fn version(&self) -> Result<String, ProviderError> {
        let url = format!("{}/api/version", self.base_url);
        let response: serde_json::Value = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(format!("Failed to connect to Ollama: {}", e)))?
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(format!("Failed to parse Ollama version response: {}", e)))?;

        response["version"]
            .as_str()
            .map(|v| v.to_string())
            .ok_or_else(|| ProviderError::ParseError("Invalid version format in response".to_string()))
    }
}

#[async_trait]
impl EmbeddingProvider for Ollama {
    async fn embed_batch(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, ProviderError> {
        let url = format!("{}/api/embed", self.base_url);

        let request = EmbedRequest {
            model: self.model.clone(),
            input: inputs.to_vec(),
            keep_alive: None,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to send embed request to Ollama API: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Ollama API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let parsed: EmbedResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(format!("Failed to parse Ollama embed response: {}", e)))?;

        if parsed.embeddings.len() != inputs.len() {
            return Err(ProviderError::InvalidEmbedding(format!(
                "expected {} vectors, got {}",
                inputs.len(),
                parsed.embeddings.len()
            )));
        }

        // All vectors in one call must share a dimensionality
        if let Some(first) = parsed.embeddings.first() {
            let dim = first.len();
            if dim == 0 {
                return Err(ProviderError::InvalidEmbedding("empty embedding vector".to_string()));
            }
            if let Some(bad) = parsed.embeddings.iter().find(|v| v.len() != dim) {
                return Err(ProviderError::InvalidEmbedding(format!(
                    "mixed dimensionality in batch: {} vs {}",
                    dim,
                    bad.len()
                )));
            }
        }

        debug!("Embedded {} texts with model {}", inputs.len(), self.model);
        Ok(parsed.embeddings)
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let version = self.version().await?;
        debug!("Connected to Ollama {} at {}", version, self.base_url);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ollama"
    }
}
