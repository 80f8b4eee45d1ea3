/*!
 * Budgeted extractive summarization.
 *
 * Orchestrates the pipeline for one document: normalize the raw text,
 * segment it into candidate sentences, score them with the injected
 * strategy, then greedily assemble a summary under a character budget.
 *
 * Selection walks the ranked sentences in descending score order and stops
 * at the first sentence that would exceed the budget; it never skips ahead
 * to a smaller later sentence. The joined output therefore never exceeds
 * the budget, except through the explicit short-document fallback.
 */

use log::{debug, warn};
use std::sync::Arc;

use crate::scoring::{KeywordScorer, ScoredSentence, SentenceScorer, rank};
use crate::text_processor::{normalize, segment};

/// Default summary budget in characters
pub const DEFAULT_BUDGET: usize = 450;

/// Placeholder returned when segmentation yields no candidate sentences
pub const EMPTY_SUMMARY: &str = "Nothing to summarize after cleaning.";

/// Greedily select ranked sentences under a character budget.
///
/// `clean` is the normalized document text, used for the fallback when even
/// the highest-ranked sentence does not fit: the first `budget` characters
/// of it, with an ellipsis, stand in for an empty selection.
pub fn select(ranked: &[ScoredSentence], budget: usize, clean: &str) -> String {
    if ranked.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }

    let mut chosen: Vec<&str> = Vec::new();
    let mut used = 0usize;
    for scored in ranked {
        let len = scored.text.chars().count();
        if used + len <= budget {
            chosen.push(&scored.text);
            used += len;
        } else {
            break;
        }
    }

    if chosen.is_empty() {
        let prefix: String = clean.chars().take(budget).collect();
        return format!("{}…", prefix);
    }

    chosen.join(" ")
}

/// Single-document summarization pipeline with an injected scoring strategy
#[derive(Debug)]
pub struct Summarizer {
    /// Scoring strategy, fixed for the lifetime of the summarizer
    scorer: Arc<dyn SentenceScorer>,
    /// Character budget for the assembled summary
    budget: usize,
}

impl Summarizer {
    /// Create a summarizer with the given strategy and budget
    pub fn new(scorer: Arc<dyn SentenceScorer>, budget: usize) -> Self {
        Self { scorer, budget }
    }

    /// Create a summarizer using the always-available keyword strategy
    pub fn keyword(budget: usize) -> Self {
        Self::new(Arc::new(KeywordScorer::new()), budget)
    }

    /// The configured character budget
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// The active strategy name
    pub fn strategy(&self) -> &'static str {
        self.scorer.name()
    }

    /// Summarize one raw document.
    ///
    /// A scoring failure is not fatal: the invocation degrades to keyword
    /// scores, so readable input always produces a summary.
    pub async fn summarize(&self, raw: &str) -> String {
        let clean = normalize(raw);
        let sentences = segment(&clean);
        debug!(
            "Segmented document into {} candidate sentences ({} strategy)",
            sentences.len(),
            self.scorer.name()
        );

        if sentences.is_empty() {
            return EMPTY_SUMMARY.to_string();
        }

        let scores = match self.scorer.score(&clean, &sentences).await {
            Ok(scores) => scores,
            Err(e) => {
                warn!("Scoring with {} failed ({}), falling back to keyword scores", self.scorer.name(), e);
                KeywordScorer::new()
                    .score(&clean, &sentences)
                    .await
                    .unwrap_or_else(|_| vec![0.0; sentences.len()])
            }
        };

        let ranked = rank(scores, sentences);
        select(&ranked, self.budget, &clean)
    }
}
