/*!
 * # dialint - Dialogue episode corpus linter
 *
 * A Rust library for validating flat-text corpora of short dialogue
 * episodes before they are consumed by downstream products.
 *
 * ## Features
 *
 * - Slices the corpus into nine-line episode blocks
 * - Checks header fields, id uniqueness and category membership
 * - Checks speaker alternation of the four dialogue turns
 * - Applies per-level sentence-length bounds
 * - Reports every problem found, in discovery order, as text or JSON
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `validation`: The validation engine:
 *   - `validation::parser`: Block segmentation of the line stream
 *   - `validation::fields`: Header field and identity checks
 *   - `validation::turns`: Speaker alternation checks
 *   - `validation::sentences`: Sentence-length rules
 *   - `validation::report`: Diagnostics and the ordered report
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: Corpus file loading
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
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, ConfigError, CorpusError};
pub use validation::{CorpusValidator, Diagnostic, ValidationReport};
