use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Summary assembly settings
    pub summary: SummaryConfig,

    /// Tag extraction settings
    pub tags: TagConfig,

    /// Scoring strategy settings
    pub scoring: ScoringConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Summary assembly settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SummaryConfig {
    /// Character budget for the assembled summary
    pub max_chars: usize,
}

/// Tag extraction settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TagConfig {
    /// Number of tags to extract
    pub top: usize,
}

/// Scoring strategy settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ScoringConfig {
    /// Strategy selection mode
    #[serde(default)]
    pub mode: ScoringMode,

    /// Base URL of the embedding provider
    pub endpoint: String,

    /// Embedding model name
    pub model: String,
}

/// Scoring strategy selection mode
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    // @mode: Probe the embedding provider, fall back to keyword
    #[default]
    Auto,
    // @mode: Require the embedding provider (still falls back if absent)
    Embedding,
    // @mode: Keyword overlap only, no provider probe
    Keyword,
}

impl ScoringMode {
    // @returns: Lowercase mode identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Auto => "auto".to_string(),
            Self::Embedding => "embedding".to_string(),
            Self::Keyword => "keyword".to_string(),
        }
    }
}

// Implement Display trait for ScoringMode
impl std::fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for ScoringMode
impl std::str::FromStr for ScoringMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "embedding" => Ok(Self::Embedding),
            "keyword" => Ok(Self::Keyword),
            _ => Err(anyhow!("Invalid scoring mode: {}", s)),
        }
    }
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warn level
    Warn,
    /// Info level
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            summary: SummaryConfig {
                max_chars: crate::summarizer::DEFAULT_BUDGET,
            },
            tags: TagConfig {
                top: crate::tags::DEFAULT_TOP_TAGS,
            },
            scoring: ScoringConfig {
                mode: ScoringMode::Auto,
                endpoint: "http://localhost:11434".to_string(),
                model: "nomic-embed-text".to_string(),
            },
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration after loading and CLI overrides
    pub fn validate(&self) -> Result<()> {
        if self.tags.top == 0 {
            return Err(anyhow!("tags.top must be at least 1"));
        }

        if self.scoring.mode != ScoringMode::Keyword {
            Url::parse(&self.scoring.endpoint)
                .map_err(|e| anyhow!("Invalid scoring.endpoint '{}': {}", self.scoring.endpoint, e))?;

            if self.scoring.model.trim().is_empty() {
                return Err(anyhow!("scoring.model must not be empty when the embedding strategy can be selected"));
            }
        }

        Ok(())
    }
}
