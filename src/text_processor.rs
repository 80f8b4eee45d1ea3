use once_cell::sync::Lazy;
use regex::Regex;

// @module: Document cleaning and sentence segmentation

/// Minimum trimmed length (in characters) for a fragment to count as a sentence
pub const MIN_SENTENCE_CHARS: usize = 20;

// @const: Leading frontmatter block (`---` line ... `---` line)
static FRONTMATTER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?ms)\A---[ \t]*\r?\n.*?^---[ \t]*$").unwrap()
});

// @const: Markdown link [label](target)
static LINK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap()
});

// @const: Citation records, raw URLs and DOI identifiers
static CITATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)@article\{[^}]+\}|https?://\S+|doi:\S+").unwrap()
});

// @const: Markdown image syntax, alt text included
static IMAGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[.*?\]\([^)]+\)").unwrap()
});

// @const: Markdown formatting symbols
static SYMBOL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[*#>`~]").unwrap()
});

// @const: Table/Figure caption lines
static CAPTION_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^Table\s*\d+.*|^Figure\s*\d+.*").unwrap()
});

// @const: Section heading that ends the summarizable body
static CUTOFF_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\n\s*(references|bibliography|appendix)\s*\n").unwrap()
});

// @const: Sentence terminator runs
static SENTENCE_SPLIT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?]+").unwrap()
});

// @const: Word tokens (alphanumeric runs)
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\w+").unwrap()
});

/// Strip structural and markup noise from raw input, producing clean prose.
///
/// The stages run in a fixed order. Frontmatter, links, citations and images
/// must be rewritten before the symbol strip, otherwise a `#` inside a
/// not-yet-removed citation would corrupt the later pattern matches.
/// Total over arbitrary input: any string in, a (possibly empty) string out.
pub fn normalize(raw: &str) -> String {
    // 1. Leading frontmatter block, first occurrence only
    let text = FRONTMATTER_REGEX.replace(raw, "");

    // 2. [label](target) -> label, target discarded unconditionally
    let text = LINK_REGEX.replace_all(&text, "$1");

    // 3. Bibliographic noise: @article{...}, raw URLs, doi: identifiers
    let text = CITATION_REGEX.replace_all(&text, "");

    // 4. Images removed entirely, alt text included
    let text = IMAGE_REGEX.replace_all(&text, "");

    // 5. Formatting symbols stripped wherever they occur
    let text = SYMBOL_REGEX.replace_all(&text, "");

    // 6. Table/Figure caption lines dropped
    let text = CAPTION_LINE_REGEX.replace_all(&text, "");

    // 7. Truncate at the first references/bibliography/appendix heading
    let text = match CUTOFF_REGEX.find(&text) {
        Some(m) => &text[..m.start()],
        None => text.as_ref(),
    };

    text.trim().to_string()
}

/// Split clean prose into candidate sentences.
///
/// Splits on runs of `.`, `!`, `?`; fragments are trimmed and anything of
/// [`MIN_SENTENCE_CHARS`] characters or fewer is discarded. Source order is
/// preserved. Empty input yields an empty vector.
pub fn segment(clean: &str) -> Vec<String> {
    SENTENCE_SPLIT_REGEX
        .split(clean)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}

/// Lowercased word tokens of a text, in source order.
pub fn word_tokens(text: &str) -> Vec<String> {
    WORD_REGEX
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Number of word-token occurrences in a text.
pub fn word_count(text: &str) -> u64 {
    WORD_REGEX.find_iter(text).count() as u64
}
