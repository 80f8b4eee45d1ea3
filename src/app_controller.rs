use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;

use crate::app_config::{Config, ScoringMode};
use crate::metrics::compute_metrics;
use crate::providers::EmbeddingProvider;
use crate::providers::ollama::Ollama;
use crate::report::SummaryReport;
use crate::scoring::EmbeddingScorer;
use crate::summarizer::Summarizer;
use crate::tags::extract_tags;

// @module: Application controller for document summarization

/// Main application controller for one summarization process.
///
/// The scoring strategy is fixed once, at construction: the embedding
/// provider is probed a single time and any failure silently selects the
/// keyword strategy for the lifetime of the process. Individual documents
/// run through `run` independently and share no state beyond that decision.
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Pipeline with the selected scoring strategy
    summarizer: Summarizer,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Self {
        let config = Config::default();
        let summarizer = Summarizer::keyword(config.summary.max_chars);
        Self { config, summarizer }
    }

    // @method: Create a new controller with the given configuration
    pub async fn with_config(config: Config) -> Result<Self> {
        let summarizer = Self::build_summarizer(&config).await;
        Ok(Self { config, summarizer })
    }

    /// Create a controller around an already-constructed provider.
    ///
    /// Used by tests to inject mock providers; the same probe-then-fallback
    /// decision applies.
    pub async fn with_provider(config: Config, provider: Arc<dyn EmbeddingProvider>) -> Self {
        let budget = config.summary.max_chars;
        let summarizer = match config.scoring.mode {
            ScoringMode::Keyword => Summarizer::keyword(budget),
            ScoringMode::Auto | ScoringMode::Embedding => {
                Self::probe_and_select(provider, budget).await
            }
        };
        Self { config, summarizer }
    }

    /// The strategy selected at construction
    pub fn strategy(&self) -> &'static str {
        self.summarizer.strategy()
    }

    async fn build_summarizer(config: &Config) -> Summarizer {
        let budget = config.summary.max_chars;
        match config.scoring.mode {
            ScoringMode::Keyword => {
                debug!("Keyword strategy forced by configuration");
                Summarizer::keyword(budget)
            }
            ScoringMode::Auto | ScoringMode::Embedding => {
                let provider = Arc::new(Ollama::new(
                    config.scoring.endpoint.clone(),
                    config.scoring.model.clone(),
                ));
                Self::probe_and_select(provider, budget).await
            }
        }
    }

    // One probe per process; absence of the provider must never be fatal
    async fn probe_and_select(provider: Arc<dyn EmbeddingProvider>, budget: usize) -> Summarizer {
        match provider.test_connection().await {
            Ok(()) => {
                info!("Using embedding strategy via {} provider", provider.name());
                Summarizer::new(Arc::new(EmbeddingScorer::new(provider)), budget)
            }
            Err(e) => {
                debug!("Embedding provider unavailable ({}), using keyword strategy", e);
                Summarizer::keyword(budget)
            }
        }
    }

    /// Run one document through the pipeline and assemble the report.
    ///
    /// Tags are extracted from the summary concatenated with the original
    /// text, so summary-weighted terms rank first while the rest of the
    /// document still contributes.
    pub async fn run(&self, raw: &str) -> SummaryReport {
        let summary = self.summarizer.summarize(raw).await;
        debug!(
            "Produced {}-char summary with {} strategy",
            summary.chars().count(),
            self.summarizer.strategy()
        );

        let tags = extract_tags(&format!("{}{}", summary, raw), self.config.tags.top);

        // The placeholder is not extracted content; size metrics measure only
        // real summary text
        let extracted = if summary == crate::summarizer::EMPTY_SUMMARY {
            ""
        } else {
            summary.as_str()
        };
        let metrics = compute_metrics(raw, extracted);

        SummaryReport {
            summary,
            tags,
            metrics,
        }
    }
}
