// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;

use crate::app_config::{Config, ScoringMode};
use crate::app_controller::Controller;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::report::ErrorReport;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod metrics;
mod providers;
mod report;
mod scoring;
mod summarizer;
mod tags;
mod text_processor;

/// CLI Wrapper for ScoringMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliScoringMode {
    Auto,
    Embedding,
    Keyword,
}

impl From<CliScoringMode> for ScoringMode {
    fn from(cli_mode: CliScoringMode) -> Self {
        match cli_mode {
            CliScoringMode::Auto => ScoringMode::Auto,
            CliScoringMode::Embedding => ScoringMode::Embedding,
            CliScoringMode::Keyword => ScoringMode::Keyword,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize a document (default command)
    #[command(alias = "sum")]
    Summarize(SummarizeArgs),

    /// Generate shell completions for skimmer
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct SummarizeArgs {
    /// Input text file, or '-' to read standard input
    #[arg(value_name = "INPUT_PATH")]
    input_path: String,

    /// Character budget for the summary
    #[arg(short, long)]
    budget: Option<usize>,

    /// Number of tags to extract
    #[arg(short, long)]
    top_tags: Option<usize>,

    /// Scoring strategy to use
    #[arg(short, long, value_enum)]
    scorer: Option<CliScoringMode>,

    /// Embedding model name
    #[arg(short, long)]
    model: Option<String>,

    /// Embedding provider base URL
    #[arg(short, long)]
    url: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Skimmer - Local Note & Paper Summarizer
///
/// Extracts a short extractive summary, topical tags and size metrics from a
/// plain-text or Markdown document, entirely offline.
#[derive(Parser, Debug)]
#[command(name = "skimmer")]
#[command(author = "Skimmer Team")]
#[command(version = "1.0.0")]
#[command(about = "Extractive summarizer for notes and papers")]
#[command(long_about = "Skimmer cleans a text or Markdown document, ranks its sentences by
document relevance and prints a JSON record with a budgeted extractive
summary, topical tags and size metrics.

EXAMPLES:
    skimmer notes.md                       # Summarize a file
    cat paper.txt | skimmer -              # Summarize standard input
    skimmer -b 600 -t 12 notes.md          # Larger budget, more tags
    skimmer -s keyword notes.md            # Skip the embedding provider probe
    skimmer -u http://gpu-box:11434 notes.md  # Remote embedding server
    skimmer --log-level debug notes.md     # Show pipeline details on stderr
    skimmer completions bash > skimmer.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config. If the config file doesn't exist, a
    default one will be created automatically.

SCORING STRATEGIES:
    auto      - Probe the embedding provider, fall back to keyword (default)
    embedding - Semantic centrality via a local embedding model
    keyword   - Frequency-based keyword overlap, no external dependencies")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input text file, or '-' to read standard input
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<String>,

    /// Character budget for the summary
    #[arg(short, long)]
    budget: Option<usize>,

    /// Number of tags to extract
    #[arg(short, long)]
    top_tags: Option<usize>,

    /// Scoring strategy to use
    #[arg(short, long, value_enum)]
    scorer: Option<CliScoringMode>,

    /// Embedding model name
    #[arg(short, long)]
    model: Option<String>,

    /// Embedding provider base URL
    #[arg(short, long)]
    url: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    // All diagnostics go to stderr; stdout carries only the JSON record
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    let _ = CustomLogger::init(LevelFilter::Info);

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    let args = match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "skimmer", &mut std::io::stdout());
            return;
        }
        Some(Commands::Summarize(args)) => args,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let Some(input_path) = cli.input_path else {
                let report = ErrorReport::new(AppError::Usage(
                    "pass a text file path, or '-' to read standard input".to_string(),
                ));
                println!("{}", report.to_pretty_json());
                std::process::exit(1);
            };

            SummarizeArgs {
                input_path,
                budget: cli.budget,
                top_tags: cli.top_tags,
                scorer: cli.scorer,
                model: cli.model,
                url: cli.url,
                config_path: cli.config_path,
                log_level: cli.log_level,
            }
        }
    };

    match run_summarize(args).await {
        Ok(json) => println!("{}", json),
        Err(e) => {
            println!("{}", ErrorReport::new(&e).to_pretty_json());
            std::process::exit(1);
        }
    }
}

async fn run_summarize(options: SummarizeArgs) -> Result<String, AppError> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(to_level_filter(&config_log_level));
    }

    let config = load_config(&options)?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(to_level_filter(&config.log_level));
    }

    // Read the document before touching the provider: a missing file should
    // fail fast, with the read error surfaced in the error record
    let raw = FileManager::read_document(&options.input_path)
        .map_err(|e| AppError::File(e.to_string()))?;

    // Create controller; the scoring strategy is fixed here for the process
    let controller = Controller::with_config(config).await?;
    let report = controller.run(&raw).await;

    report.to_pretty_json().map_err(AppError::from)
}

fn load_config(options: &SummarizeArgs) -> Result<Config, AppError> {
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .with_context(|| format!("Failed to open config file: {}", config_path))
            .map_err(AppError::from)?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", config_path))
            .map_err(AppError::from)?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")
            .map_err(AppError::from)?;
        FileManager::write_to_file(config_path, &config_json).map_err(AppError::from)?;

        config
    };

    // Override config with CLI options if provided
    if let Some(budget) = options.budget {
        config.summary.max_chars = budget;
    }
    if let Some(top_tags) = options.top_tags {
        config.tags.top = top_tags;
    }
    if let Some(scorer) = &options.scorer {
        config.scoring.mode = scorer.clone().into();
    }
    if let Some(model) = &options.model {
        config.scoring.model = model.clone();
    }
    if let Some(url) = &options.url {
        config.scoring.endpoint = url.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")
        .map_err(AppError::from)?;

    Ok(config)
}
