/*!
 * Tests for configuration loading and validation
 */

use skimmer::app_config::{Config, ScoringMode};

use crate::common::{create_temp_dir, create_test_file};

#[test]
fn test_config_savedToFile_shouldLoadBack() {
    let temp_dir = create_temp_dir().unwrap();
    let config = Config::default();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let path = create_test_file(&temp_dir.path().to_path_buf(), "conf.json", &json).unwrap();

    let loaded: Config = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();

    assert_eq!(loaded.summary.max_chars, config.summary.max_chars);
    assert_eq!(loaded.tags.top, config.tags.top);
    assert_eq!(loaded.scoring.endpoint, config.scoring.endpoint);
}

#[test]
fn test_config_withPartialScoringSection_shouldDefaultMode() {
    let json = r#"{
        "summary": { "max_chars": 300 },
        "tags": { "top": 5 },
        "scoring": { "endpoint": "http://localhost:11434", "model": "nomic-embed-text" }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.scoring.mode, ScoringMode::Auto);
    assert_eq!(config.summary.max_chars, 300);
}

#[test]
fn test_config_withUnknownMode_shouldFailToParse() {
    let json = r#"{
        "summary": { "max_chars": 300 },
        "tags": { "top": 5 },
        "scoring": { "mode": "semantic", "endpoint": "http://x", "model": "m" }
    }"#;

    let parsed: Result<Config, _> = serde_json::from_str(json);

    assert!(parsed.is_err());
}

#[test]
fn test_validate_withZeroBudget_shouldStillPass() {
    // a zero budget is legal; the selector falls back to the clean prefix
    let mut config = Config::default();
    config.summary.max_chars = 0;

    assert!(config.validate().is_ok());
}
