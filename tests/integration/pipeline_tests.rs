/*!
 * End-to-end pipeline tests, keyword strategy forced unless stated
 */

use std::sync::Arc;

use skimmer::app_config::{Config, ScoringMode};
use skimmer::app_controller::Controller;
use skimmer::file_utils::FileManager;
use skimmer::providers::mock::MockEmbedder;
use skimmer::summarizer::EMPTY_SUMMARY;

use crate::common::{create_temp_dir, create_test_file, sample_markdown_article, synthetic_article};

fn keyword_config() -> Config {
    let mut config = Config::default();
    config.scoring.mode = ScoringMode::Keyword;
    config
}

async fn keyword_controller() -> Controller {
    Controller::with_config(keyword_config()).await.unwrap()
}

#[tokio::test]
async fn test_pipeline_withSyntheticArticle_shouldRespectBudgetAndTagCount() {
    let article = synthetic_article(20);
    assert!(article.chars().count() >= 3000, "fixture should be a real article");
    let controller = keyword_controller().await;

    let report = controller.run(&article).await;

    assert_ne!(report.summary, EMPTY_SUMMARY);
    assert!(!report.summary.is_empty());
    // 20 sentences means at most 19 joining spaces on top of the 450 budget
    assert!(report.summary.chars().count() <= 450 + 19);
    assert_eq!(report.tags.len(), 8);
    assert!(report.metrics.summary_words > 0);
    assert!(report.metrics.original_words > report.metrics.summary_words);
}

#[tokio::test]
async fn test_pipeline_withEmptyDocument_shouldReportPlaceholderAndZeroMetrics() {
    let controller = keyword_controller().await;

    let report = controller.run("").await;

    assert_eq!(report.summary, EMPTY_SUMMARY);
    assert_eq!(report.metrics.original_words, 0);
    assert_eq!(report.metrics.summary_words, 0);
    assert_eq!(report.metrics.compression, "0.0%");
}

#[tokio::test]
async fn test_pipeline_withMarkdownArticle_shouldCleanNoiseOutOfSummary() {
    let controller = keyword_controller().await;

    let report = controller.run(sample_markdown_article()).await;

    assert!(!report.summary.contains("title:"));
    assert!(!report.summary.contains("http"));
    assert!(!report.summary.contains("@article"));
    assert!(!report.summary.contains('#'));
    assert!(!report.summary.contains("must not survive cleaning"));
    assert_ne!(report.summary, EMPTY_SUMMARY);
}

#[tokio::test]
async fn test_pipeline_withIdenticalInput_shouldProduceByteIdenticalRecords() {
    let article = synthetic_article(12);
    let controller = keyword_controller().await;

    let first = controller.run(&article).await.to_pretty_json().unwrap();
    let second = controller.run(&article).await.to_pretty_json().unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_pipeline_withFileInput_shouldMatchInMemoryRun() {
    let temp_dir = create_temp_dir().unwrap();
    let article = synthetic_article(10);
    let path = create_test_file(&temp_dir.path().to_path_buf(), "notes.md", &article).unwrap();
    let controller = keyword_controller().await;

    let from_file = FileManager::read_document(path.to_str().unwrap()).unwrap();
    let file_report = controller.run(&from_file).await;
    let memory_report = controller.run(&article).await;

    assert_eq!(file_report.summary, memory_report.summary);
    assert_eq!(file_report.tags, memory_report.tags);
}

#[tokio::test]
async fn test_pipeline_withMissingFile_shouldErrorOnRead() {
    let result = FileManager::read_document("/definitely/not/a/real/file.txt");

    assert!(result.is_err());
}

#[tokio::test]
async fn test_pipeline_withUnreachableProvider_shouldStillSucceedViaKeyword() {
    let mut config = Config::default();
    config.scoring.mode = ScoringMode::Embedding;
    let controller =
        Controller::with_provider(config, Arc::new(MockEmbedder::unreachable())).await;
    let article = synthetic_article(6);

    let report = controller.run(&article).await;

    assert_eq!(controller.strategy(), "keyword");
    assert_ne!(report.summary, EMPTY_SUMMARY);
}

#[tokio::test]
async fn test_pipeline_withWorkingProvider_shouldUseEmbeddingStrategy() {
    let controller =
        Controller::with_provider(Config::default(), Arc::new(MockEmbedder::working())).await;
    let article = synthetic_article(6);

    let report = controller.run(&article).await;

    assert_eq!(controller.strategy(), "embedding");
    assert_ne!(report.summary, EMPTY_SUMMARY);
}

#[tokio::test]
async fn test_pipeline_withNonAsciiDocument_shouldPreserveCharactersInJson() {
    let controller = keyword_controller().await;
    let raw = "Das Modell lernt die Repräsentation über mehrere Domänen hinweg sehr gut. \
               Die Repräsentation über mehrere Domänen verbessert die Übertragung deutlich.";

    let json = controller.run(raw).await.to_pretty_json().unwrap();

    assert!(json.contains("Repräsentation"));
    assert!(!json.contains("\\u"));
}
