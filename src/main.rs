// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error};

use dialint::app_config::{self, Config, OutputFormat};
use dialint::Controller;

/// Printed when the corpus path is missing
const USAGE: &str = "Usage: dialint <corpus_file>";

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

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// dialint - Dialogue episode corpus linter
///
/// Validates a corpus of dialogue episodes and reports every structural
/// and linguistic problem found.
#[derive(Parser, Debug)]
#[command(name = "dialint")]
#[command(version)]
#[command(about = "Validate a corpus of dialogue episodes")]
#[command(long_about = "dialint checks a corpus of nine-line dialogue episodes: header fields, id uniqueness, category and level membership, speaker alternation and per-level sentence lengths.

EXAMPLES:
    dialint corpus.txt                      # Validate and print one line per problem
    dialint --format json corpus.txt        # Print a structured JSON report
    dialint --log-level debug corpus.txt    # Trace every block on stderr")]
struct CommandLineOptions {
    /// Corpus file to validate
    #[arg(value_name = "CORPUS_PATH")]
    corpus_path: PathBuf,

    /// Report output format
    #[arg(short, long, value_enum)]
    format: Option<CliOutputFormat>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Optional configuration file path (JSON)
    #[arg(short, long = "config", value_name = "CONFIG_PATH")]
    config_path: Option<PathBuf>,
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

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => "💬 ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI colour for log level
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

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let level = record.level();

            // stdout is reserved for the report
            let _ = writeln!(
                std::io::stderr(),
                "{}{} {} {}\x1B[0m",
                Self::get_color_for_level(level),
                now,
                Self::get_emoji_for_level(level),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    let options = match CommandLineOptions::try_parse() {
        Ok(options) => options,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            eprintln!("{}", USAGE);
            return ExitCode::from(1);
        }
    };

    // The global max level is narrowed once the configuration is loaded
    if let Err(e) = CustomLogger::init(LevelFilter::Trace) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(options: CommandLineOptions) -> Result<()> {
    let config = match &options.config_path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load configuration: {:?}", path))?,
        None => Config::default(),
    };
    let config = config.with_overrides(
        options.log_level.map(Into::into),
        options.format.map(Into::into),
    );

    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config);
    let output = controller
        .run(&options.corpus_path)
        .with_context(|| format!("Failed to validate corpus: {:?}", options.corpus_path))?;

    println!("{}", output);
    Ok(())
}
