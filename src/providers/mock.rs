/*!
 * Mock embedding provider for testing.
 *
 * This module provides a mock provider that simulates different behaviors:
 * - `MockEmbedder::working()` - Always succeeds with deterministic vectors
 * - `MockEmbedder::unreachable()` - Fails the connection test
 * - `MockEmbedder::failing()` - Connects, but every embed call fails
 * - `MockEmbedder::mismatched()` - Returns vectors of uneven dimensionality
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::EmbeddingProvider;

/// Behavior mode for the mock embedder
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Connects and embeds deterministically
    Working,
    /// Connection test fails (provider absent)
    Unreachable,
    /// Connects, but embed calls fail
    Failing,
    /// Returns one vector of the wrong dimensionality
    Mismatched,
}

/// Mock embedding provider for testing scorer behavior
#[derive(Debug)]
pub struct MockEmbedder {
    /// Behavior mode
    behavior: MockBehavior,
    /// Vector dimensionality for generated embeddings
    dimensions: usize,
    /// Number of embed calls made
    call_count: Arc<AtomicUsize>,
}

impl MockEmbedder {
    /// Create a new mock embedder with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            dimensions: 8,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock embedder
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock embedder whose connection test fails
    pub fn unreachable() -> Self {
        Self::new(MockBehavior::Unreachable)
    }

    /// Create a mock embedder whose embed calls fail
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock embedder that returns mixed dimensionality
    pub fn mismatched() -> Self {
        Self::new(MockBehavior::Mismatched)
    }

    /// Set the vector dimensionality
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Number of embed calls made so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Deterministic pseudo-embedding derived from the text content.
    ///
    /// Longer texts and texts sharing character content with each other get
    /// correlated vectors, which is enough structure for ranking tests.
    fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];
        for (i, ch) in text.chars().enumerate() {
            let slot = (ch as usize + i) % self.dimensions;
            vector[slot] += 1.0;
        }
        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbedder {
    async fn embed_batch(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(inputs.iter().map(|t| self.embed_text(t)).collect()),
            MockBehavior::Unreachable | MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "mock embed failure".to_string(),
            )),
            MockBehavior::Mismatched => {
                let mut vectors: Vec<Vec<f32>> =
                    inputs.iter().map(|t| self.embed_text(t)).collect();
                if let Some(last) = vectors.last_mut() {
                    last.push(0.0);
                }
                Ok(vectors)
            }
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Unreachable => Err(ProviderError::ConnectionError(
                "mock provider unreachable".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
