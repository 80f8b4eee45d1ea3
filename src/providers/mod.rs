/*!
 * Provider implementations for sentence embeddings.
 *
 * This module contains client implementations for embedding providers:
 * - Ollama: Local embedding model server
 * - Mock: Deterministic in-process provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all embedding providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing them to be used interchangeably by the scoring layer.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Embed a batch of texts in one call
    ///
    /// # Arguments
    /// * `inputs` - The texts to embed
    ///
    /// # Returns
    /// * `Result<Vec<Vec<f32>>, ProviderError>` - One vector per input, in input
    ///   order, all of identical dimensionality within the call
    async fn embed_batch(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the provider is reachable, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Human-readable provider name for logging
    fn name(&self) -> &'static str;
}

pub mod ollama;
pub mod mock;
