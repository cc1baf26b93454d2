/*!
 * Error types for the dialint application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions. Validation findings
 * are not errors: they are reported as diagnostics.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a corpus file
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The file could not be read
    #[error("Failed to read corpus file {path:?}: {source}")]
    Read {
        /// Path of the corpus file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8
    #[error("Corpus file {path:?} is not valid UTF-8 (first invalid byte at offset {offset})")]
    Encoding {
        /// Path of the corpus file
        path: PathBuf,
        /// Byte offset of the first invalid sequence
        offset: usize,
    },
}

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid configuration
    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from corpus loading
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    /// Error from configuration loading
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Error serializing the report
    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}
