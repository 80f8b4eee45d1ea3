/*!
 * Size metrics for a summarization run.
 *
 * Computes word counts for the original document and the produced summary,
 * plus a compression ratio expressed as a percentage string.
 */

use serde::{Deserialize, Serialize};

use crate::text_processor::word_count;

/// Derived size metrics, computed once per run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metrics {
    /// Word-token occurrences in the original document
    pub original_words: u64,

    /// Word-token occurrences in the summary
    pub summary_words: u64,

    /// Summary length over original length, e.g. "12.3%"
    pub compression: String,
}

/// Compute metrics from the original text and the produced summary.
///
/// Word counts include every occurrence, not unique tokens. Compression is
/// `chars(summary) / max(chars(original), 1)` with one decimal place; the
/// floor on the denominator guards the empty-document case.
pub fn compute_metrics(original: &str, summary: &str) -> Metrics {
    let original_chars = original.chars().count();
    let summary_chars = summary.chars().count();
    let ratio = summary_chars as f64 / original_chars.max(1) as f64;

    Metrics {
        original_words: word_count(original),
        summary_words: word_count(summary),
        compression: format!("{:.1}%", ratio * 100.0),
    }
}
