/*!
 * Validation engine for episode corpora.
 *
 * This module checks a flat-text corpus of dialogue episodes:
 * - Block structure (header window, four turns, blank separators)
 * - Header fields (prefixes, id uniqueness, category and level membership)
 * - Speaker alternation of the turns
 * - Per-level sentence-length bounds
 *
 * # Architecture
 *
 * - `catalog`: Category set and level rule table
 * - `cursor`: Line cursor used by the parser
 * - `parser`: Slices the line stream into raw blocks
 * - `fields`: Validates header fields and tracks ids
 * - `turns`: Validates speaker alternation
 * - `sentences`: Sentence segmentation and length rules
 * - `report`: Diagnostics and the ordered report
 * - `service`: Orchestrates all validators over a corpus
 */

pub mod catalog;
pub mod cursor;
pub mod parser;
pub mod fields;
pub mod turns;
pub mod sentences;
pub mod report;
pub mod service;

// Re-export main types
pub use catalog::{Category, LengthRule, Level};
pub use report::{Diagnostic, HeaderField, ValidationReport, SUCCESS_MESSAGE};
pub use service::CorpusValidator;
