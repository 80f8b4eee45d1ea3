use async_trait::async_trait;
use log::debug;
use std::collections::HashMap;

use crate::errors::ProviderError;
use crate::scoring::SentenceScorer;
use crate::text_processor::word_tokens;

/// Number of most frequent document tokens considered for the common set
const COMMON_TOKEN_POOL: usize = 20;

/// Minimum token length (exclusive) for the common set
const MIN_COMMON_CHARS: usize = 4;

/// Number of leading characters used for the fuzzy containment check
const PREFIX_CHARS: usize = 5;

/// Keyword-overlap scoring strategy, always available.
///
/// A sentence scores one point for each common document token whose leading
/// characters occur as a substring of the lowercased sentence. The substring
/// check is deliberately not token-boundary-aware: it cheaply tolerates
/// stemming variance ("network" matches "networks", "networking").
#[derive(Debug, Default)]
pub struct KeywordScorer;

impl KeywordScorer {
    /// Create a new keyword scorer
    pub fn new() -> Self {
        Self
    }

    /// The most frequent document tokens longer than four characters.
    ///
    /// Frequency ties keep first-encountered order, so the pool is stable
    /// for identical input.
    fn common_tokens(document: &str) -> Vec<String> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for token in word_tokens(document) {
            match counts.get_mut(&token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.clone(), 1);
                    order.push(token);
                }
            }
        }

        order.sort_by(|a, b| counts[b].cmp(&counts[a]));
        order.truncate(COMMON_TOKEN_POOL);
        order.retain(|t| t.chars().count() > MIN_COMMON_CHARS);
        order
    }
}

#[async_trait]
impl SentenceScorer for KeywordScorer {
    async fn score(&self, document: &str, sentences: &[String]) -> Result<Vec<f64>, ProviderError> {
        let common = Self::common_tokens(document);
        let prefixes: Vec<String> = common
            .iter()
            .map(|t| t.chars().take(PREFIX_CHARS).collect())
            .collect();
        debug!("Keyword scorer using {} common tokens", common.len());

        let scores = sentences
            .iter()
            .map(|sentence| {
                let lowered = sentence.to_lowercase();
                prefixes.iter().filter(|p| lowered.contains(p.as_str())).count() as f64
            })
            .collect();

        Ok(scores)
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}
