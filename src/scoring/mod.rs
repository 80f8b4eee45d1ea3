/*!
 * Relevance scoring strategies for candidate sentences.
 *
 * Two interchangeable strategies score each sentence against the whole
 * document:
 * - `embedding`: semantic centrality via dot products against a document
 *   vector, using an external embedding provider
 * - `keyword`: frequency-based fuzzy keyword overlap, always available
 *
 * The strategy is chosen once per process, at controller construction.
 * Scores are only meaningfully comparable against other scores from the same
 * invocation and the same strategy.
 */

use async_trait::async_trait;
use std::cmp::Ordering;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A candidate sentence paired with its relevance score
#[derive(Debug, Clone)]
pub struct ScoredSentence {
    /// Strategy-internal relevance score
    pub score: f64,
    /// Trimmed sentence text
    pub text: String,
}

/// Common trait for sentence scoring strategies
#[async_trait]
pub trait SentenceScorer: Send + Sync + Debug {
    /// Score each sentence against the document
    ///
    /// # Arguments
    /// * `document` - The full clean document text
    /// * `sentences` - Candidate sentences, in source order
    ///
    /// # Returns
    /// * `Result<Vec<f64>, ProviderError>` - One score per sentence, same order
    ///   as the input
    async fn score(&self, document: &str, sentences: &[String]) -> Result<Vec<f64>, ProviderError>;

    /// Strategy name for logging
    fn name(&self) -> &'static str;
}

/// Pair sentences with their scores and sort descending.
///
/// Ties are broken by descending sentence text, which makes the order
/// deterministic for identical input without depending on original sentence
/// positions. Scores are finite by construction, so the float comparison is
/// total here.
pub fn rank(scores: Vec<f64>, sentences: Vec<String>) -> Vec<ScoredSentence> {
    let mut ranked: Vec<ScoredSentence> = scores
        .into_iter()
        .zip(sentences)
        .map(|(score, text)| ScoredSentence { score, text })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.text.cmp(&a.text))
    });
    ranked
}

pub mod embedding;
pub mod keyword;

pub use embedding::EmbeddingScorer;
pub use keyword::KeywordScorer;
