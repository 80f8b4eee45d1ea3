use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::EmbeddingProvider;
use crate::scoring::SentenceScorer;

/// Embedding-similarity scoring strategy.
///
/// The document and every sentence are embedded in one batch call; a
/// sentence's score is the dot product of its vector with the document
/// vector, so higher means more semantically central. No normalization is
/// applied beyond what the provider itself does.
#[derive(Debug)]
pub struct EmbeddingScorer {
    /// The embedding provider, injected at construction
    provider: Arc<dyn EmbeddingProvider>,
}

impl EmbeddingScorer {
    /// Create a new embedding scorer backed by the given provider
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self { provider }
    }

    fn dot(a: &[f32], b: &[f32]) -> f64 {
        a.iter().zip(b).map(|(x, y)| (*x as f64) * (*y as f64)).sum()
    }
}

#[async_trait]
impl SentenceScorer for EmbeddingScorer {
    async fn score(&self, document: &str, sentences: &[String]) -> Result<Vec<f64>, ProviderError> {
        if sentences.is_empty() {
            return Ok(Vec::new());
        }

        // One batch per invocation: document first, then every sentence
        let mut inputs = Vec::with_capacity(sentences.len() + 1);
        inputs.push(document.to_string());
        inputs.extend(sentences.iter().cloned());

        let vectors = self.provider.embed_batch(&inputs).await?;
        let (doc_vector, sentence_vectors) = vectors
            .split_first()
            .ok_or_else(|| ProviderError::InvalidEmbedding("empty batch response".to_string()))?;

        debug!(
            "Embedding scorer got {}-dimensional vectors from {}",
            doc_vector.len(),
            self.provider.name()
        );

        Ok(sentence_vectors
            .iter()
            .map(|v| Self::dot(doc_vector, v))
            .collect())
    }

    fn name(&self) -> &'static str {
        "embedding"
    }
}
