/*!
 * # Skimmer - Local Note & Paper Summarizer
 *
 * A Rust library for extractive summarization of plain-text and
 * lightly-marked-up documents (Markdown notes, papers).
 *
 * ## Features
 *
 * - Strip frontmatter, links, citations and markup noise into clean prose
 * - Rank candidate sentences with interchangeable scoring strategies:
 *   - Embedding similarity (local embedding server)
 *   - Keyword overlap (always available, no dependencies)
 * - Greedily assemble a summary under a character budget
 * - Extract ranked topical tags and size metrics
 * - Structured JSON output with error records
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `text_processor`: Document cleaning and sentence segmentation
 * - `scoring`: Relevance scoring strategies:
 *   - `scoring::keyword`: Frequency-based fuzzy keyword overlap
 *   - `scoring::embedding`: Dot-product similarity against a document vector
 * - `summarizer`: Budgeted sentence selection and pipeline orchestration
 * - `tags`: Topical tag extraction
 * - `metrics`: Word counts and compression ratio
 * - `report`: Structured success and error records
 * - `file_utils`: File and stdin input
 * - `app_controller`: Main application controller
 * - `providers`: Embedding provider clients:
 *   - `providers::ollama`: Ollama batch embeddings client
 *   - `providers::mock`: Deterministic in-process provider for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod metrics;
pub mod providers;
pub mod report;
pub mod scoring;
pub mod summarizer;
pub mod tags;
pub mod text_processor;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, ProviderError, SummarizeError};
pub use report::{ErrorReport, SummaryReport};
pub use summarizer::Summarizer;
