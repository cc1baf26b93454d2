/*!
 * Header field and identity validation.
 *
 * Checks the five header lines of a block:
 * - Literal field prefixes and the `script:` marker
 * - Global uniqueness of the episode id
 * - Id/category consistency
 * - Category and level membership
 */

use std::collections::HashSet;

use log::debug;

use super::catalog::{Category, Level};
use super::parser::HEADER_LINES;
use super::report::{Diagnostic, HeaderField};

/// Exact content of the fifth header line
pub const SCRIPT_MARKER: &str = "script:";

/// Values extracted from a block header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeHeader {
    pub id: String,
    /// Raw category text, valid or not
    pub category: String,
    pub title: String,
    /// Raw level text, valid or not
    pub level_name: String,
    /// Parsed level; `None` when the level is unknown
    pub level: Option<Level>,
}

impl EpisodeHeader {
    /// Extract field values from the header lines, without judging them
    pub fn extract(header: &[&str; HEADER_LINES]) -> Self {
        let level_name = field_value(header[3], HeaderField::Level);
        Self {
            id: field_value(header[0], HeaderField::Id),
            category: field_value(header[1], HeaderField::Category),
            title: field_value(header[2], HeaderField::Title),
            level: Level::lookup(&level_name),
            level_name,
        }
    }

    /// Parsed category; `None` when the category is not in the catalog
    pub fn known_category(&self) -> Option<Category> {
        Category::lookup(&self.category)
    }
}

/// Strip every occurrence of the field prefix and trim the rest
fn field_value(line: &str, field: HeaderField) -> String {
    line.replace(field.prefix(), "").trim().to_string()
}

/// Validates block headers, tracking ids across one validation run
#[derive(Debug, Default)]
pub struct FieldValidator {
    seen_ids: HashSet<String>,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct ids seen so far
    pub fn distinct_ids(&self) -> usize {
        self.seen_ids.len()
    }

    /// Validate one header
    ///
    /// # Arguments
    /// * `header` - The five header lines
    /// * `start_line` - One-based line number of the first header line
    ///
    /// # Returns
    /// * The extracted header and every diagnostic found, in reporting order
    pub fn validate(
        &mut self,
        header: &[&str; HEADER_LINES],
        start_line: usize,
    ) -> (EpisodeHeader, Vec<Diagnostic>) {
        let mut diagnostics = Self::check_layout(header, start_line);
        let fields = EpisodeHeader::extract(header);

        if !self.seen_ids.insert(fields.id.clone()) {
            diagnostics.push(Diagnostic::DuplicateId {
                id: fields.id.clone(),
            });
        }

        if !fields.id.starts_with(&format!("{}_", fields.category)) {
            diagnostics.push(Diagnostic::IdCategoryMismatch {
                id: fields.id.clone(),
                category: fields.category.clone(),
            });
        }

        if fields.known_category().is_none() {
            diagnostics.push(Diagnostic::UnknownCategory {
                category: fields.category.clone(),
            });
        }

        if fields.level.is_none() {
            diagnostics.push(Diagnostic::UnknownLevel {
                level: fields.level_name.clone(),
            });
        }

        debug!(
            "Header of {} at line {}: {} issue(s)",
            fields.id,
            start_line,
            diagnostics.len()
        );

        (fields, diagnostics)
    }

    /// Prefix checks for the four fields plus the `script:` marker
    fn check_layout(header: &[&str; HEADER_LINES], start_line: usize) -> Vec<Diagnostic> {
        let mut diagnostics: Vec<Diagnostic> = HeaderField::ORDER
            .iter()
            .zip(header.iter())
            .enumerate()
            .filter(|(_, (field, line))| !line.starts_with(field.prefix()))
            .map(|(offset, (field, _))| Diagnostic::BadField {
                field: *field,
                line: start_line + offset,
            })
            .collect();

        if header[4] != SCRIPT_MARKER {
            diagnostics.push(Diagnostic::MissingScriptHeader {
                line: start_line + 4,
            });
        }

        diagnostics
    }
}
