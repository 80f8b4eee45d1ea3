/*!
 * Tests for document cleaning and sentence segmentation
 */

use skimmer::text_processor::{MIN_SENTENCE_CHARS, normalize, segment, word_count, word_tokens};

#[test]
fn test_normalize_withFrontmatter_shouldRemoveMetadataBlock() {
    let raw = "---\ntitle: X\n---\nHello world. This is a test sentence for extraction.";

    let clean = normalize(raw);

    assert!(!clean.contains("title: X"));
    assert!(clean.contains("Hello world"));
}

#[test]
fn test_normalize_withSecondDashBlock_shouldOnlyRemoveLeadingOne() {
    let raw = "---\ntitle: X\n---\nBody text here stays intact.\n---\nnot frontmatter\n---";

    let clean = normalize(raw);

    assert!(clean.contains("not frontmatter"));
    assert!(!clean.contains("title: X"));
}

#[test]
fn test_normalize_withMarkdownLink_shouldKeepLabelDropTarget() {
    let raw = "[OpenAI](https://openai.com) released a model.";

    let clean = normalize(raw);

    assert!(clean.contains("OpenAI released a model."));
    assert!(!clean.contains("openai.com"));
    assert!(!clean.contains("http"));
}

#[test]
fn test_normalize_withCitationNoise_shouldRemoveIt() {
    let raw = "Results hold. @article{key, title={Stuff}} See doi:10.1000/j.1 and https://example.org/x for details.";

    let clean = normalize(raw);

    assert!(!clean.contains("@article"));
    assert!(!clean.contains("doi:"));
    assert!(!clean.contains("https://"));
    assert!(clean.contains("Results hold."));
}

#[test]
fn test_normalize_withEmptyAltImage_shouldRemoveItEntirely() {
    let raw = "Before text stands. ![](https://example.com/img.png) After text stands.";

    let clean = normalize(raw);

    assert!(!clean.contains("img.png"));
    assert!(clean.contains("Before text stands."));
    assert!(clean.contains("After text stands."));
}

#[test]
fn test_normalize_withFormattingSymbols_shouldStripThem() {
    let raw = "# Heading\n> quoted *emphasis* and `code` plus ~tilde~";

    let clean = normalize(raw);

    for symbol in ['#', '>', '*', '`', '~'] {
        assert!(!clean.contains(symbol), "symbol {:?} survived", symbol);
    }
    assert!(clean.contains("Heading"));
    assert!(clean.contains("emphasis"));
}

#[test]
fn test_normalize_withCaptionLines_shouldDropThem() {
    let raw = "Intro line stays.\nTable 3 accuracy by dataset\nfigure 12: loss curves\nOutro line stays.";

    let clean = normalize(raw);

    assert!(!clean.contains("accuracy by dataset"));
    assert!(!clean.contains("loss curves"));
    assert!(clean.contains("Intro line stays."));
    assert!(clean.contains("Outro line stays."));
}

#[test]
fn test_normalize_withReferencesSection_shouldTruncateAtHeading() {
    let raw = "Body text here.\n\nReferences\n\n[1] Citation.";

    let clean = normalize(raw);

    assert!(clean.contains("Body text here."));
    assert!(!clean.to_lowercase().contains("references"));
    assert!(!clean.contains("Citation"));
}

#[test]
fn test_normalize_withBibliographyMidWord_shouldNotTruncate() {
    // only a line consisting solely of the heading cuts the document
    let raw = "The annotated bibliography method is described here in detail.\nMore body text follows after that sentence.";

    let clean = normalize(raw);

    assert!(clean.contains("More body text"));
}

#[test]
fn test_normalize_withEmptyInput_shouldReturnEmpty() {
    assert_eq!(normalize(""), "");
}

#[test]
fn test_normalize_appliedTwice_shouldBeIdempotent() {
    let inputs = [
        "Plain prose without any markup at all, long enough to matter.",
        "Symbols like stars and hashes were already stripped once before.",
        "Line one.\nLine two.\nLine three.",
    ];

    for input in inputs {
        let once = normalize(input);
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_segment_withTerminatorRuns_shouldSplitOnce() {
    let clean = "The first sentence is comfortably long enough!! \
                 And here is another sentence that also qualifies?! \
                 Tiny one.";

    let sentences = segment(clean);

    assert_eq!(sentences.len(), 2);
    assert!(sentences[0].starts_with("The first sentence"));
    assert!(sentences[1].starts_with("And here"));
}

#[test]
fn test_segment_withShortFragments_shouldDiscardThem() {
    let boundary = "a".repeat(MIN_SENTENCE_CHARS);
    let surviving = "b".repeat(MIN_SENTENCE_CHARS + 1);
    let clean = format!("{}. {}.", boundary, surviving);

    let sentences = segment(&clean);

    // exactly-at-threshold fragments are discarded, one-over survives
    assert_eq!(sentences, vec![surviving]);
}

#[test]
fn test_segment_withEmptyInput_shouldReturnEmpty() {
    assert!(segment("").is_empty());
}

#[test]
fn test_segment_shouldPreserveSourceOrder() {
    let clean = "First sentence with enough characters here. \
                 Second sentence with enough characters here. \
                 Third sentence with enough characters here.";

    let sentences = segment(clean);

    assert_eq!(sentences.len(), 3);
    assert!(sentences[0].starts_with("First"));
    assert!(sentences[1].starts_with("Second"));
    assert!(sentences[2].starts_with("Third"));
}

#[test]
fn test_wordTokens_shouldLowercaseAlphanumericRuns() {
    let tokens = word_tokens("Hello, World! Rust 2024 edition.");

    assert_eq!(tokens, vec!["hello", "world", "rust", "2024", "edition"]);
}

#[test]
fn test_wordCount_shouldCountEveryOccurrence() {
    assert_eq!(word_count("one two two three, three three"), 6);
    assert_eq!(word_count(""), 0);
}
