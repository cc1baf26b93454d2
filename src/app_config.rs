use std::fs;
use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Application configuration module
/// This module handles the application configuration: loading it from a
/// JSON file and merging command line overrides into it.
/// The category set and level rules are fixed and not configurable.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Format of the validation report
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Config {
    /// Load a configuration file; absent fields take their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply command line overrides on top of this configuration
    pub fn with_overrides(mut self, log_level: Option<LogLevel>, output_format: Option<OutputFormat>) -> Self {
        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }
        if let Some(output_format) = output_format {
            self.output_format = output_format;
        }
        self
    }
}

/// Log verbosity
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Filter for the log facade
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

/// Report output format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    // @format: One line per diagnostic, or the success line
    #[default]
    Text,
    // @format: Structured report
    Json,
}
