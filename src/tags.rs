/*!
 * Topical tag extraction.
 *
 * Derives a small ranked set of representative keywords from text by counting
 * word tokens that survive a fixed stop-word filter. The stop-word list is
 * part of the external contract: changing it changes tag output for every
 * caller, so it is kept verbatim and frozen here.
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::text_processor::word_tokens;

/// Default number of tags to extract
pub const DEFAULT_TOP_TAGS: usize = 8;

/// Minimum token length (exclusive) for a tag candidate
const MIN_TAG_CHARS: usize = 3;

// Domain-general English function words plus generic academic filler words.
static STOP_WORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "the", "and", "for", "with", "this", "that", "from", "were", "been", "have", "using",
        "used", "which", "their", "they", "will", "would", "there", "these", "about", "when",
        "what", "where", "is", "are", "was", "not", "but", "all", "into", "can", "has", "more",
        "one", "its", "out", "also", "than", "other", "some", "very", "only", "time", "just",
        "even", "most", "like", "may", "such", "each", "new", "based", "our", "results", "study",
        "method", "approach", "proposed",
    ]
});

/// Check if a token is in the fixed stop-word set
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Extract the `top_n` most frequent qualifying tokens from a text.
///
/// Tokens are lowercased alphanumeric runs; stop-words and tokens of three
/// characters or fewer are discarded. Every surviving occurrence counts.
/// Ties are broken by first-encountered order during counting, so the result
/// is stable for identical input. The output never contains duplicates and
/// never exceeds `top_n` entries.
pub fn extract_tags(text: &str, top_n: usize) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for token in word_tokens(text) {
        if token.chars().count() <= MIN_TAG_CHARS || is_stop_word(&token) {
            continue;
        }
        match counts.get_mut(&token) {
            Some(count) => *count += 1,
            None => {
                counts.insert(token.clone(), 1);
                order.push(token);
            }
        }
    }

    // Stable sort keeps first-encountered order for equal counts
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.truncate(top_n);
    order
}
