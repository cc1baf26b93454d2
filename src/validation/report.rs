/*!
 * Diagnostics and the validation report.
 *
 * Every problem found while scanning a corpus becomes one `Diagnostic`.
 * The `ValidationReport` keeps them in discovery order and renders the
 * final output of a run, as text lines or as JSON.
 */

use std::fmt;

use serde::Serialize;

use super::catalog::Level;

/// Line printed when a corpus has no diagnostics at all
pub const SUCCESS_MESSAGE: &str = "OK: all episodes passed basic validation.";

/// Header field whose literal prefix is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderField {
    Id,
    Category,
    Title,
    Level,
}

impl HeaderField {
    /// Header fields in the order they appear in a block
    pub const ORDER: [HeaderField; 4] = [
        HeaderField::Id,
        HeaderField::Category,
        HeaderField::Title,
        HeaderField::Level,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Category => "category",
            Self::Title => "title",
            Self::Level => "level",
        }
    }

    /// Literal prefix the header line must start with
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Id => "id: ",
            Self::Category => "category: ",
            Self::Title => "title: ",
            Self::Level => "level: ",
        }
    }
}

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Fewer than five lines left for a header; ends the scan
    IncompleteBlock { line: usize },
    /// A header line does not start with its field prefix
    BadField { field: HeaderField, line: usize },
    /// The fifth header line is not exactly `script:`
    MissingScriptHeader { line: usize },
    DuplicateId { id: String },
    IdCategoryMismatch { id: String, category: String },
    UnknownCategory { category: String },
    UnknownLevel { level: String },
    /// Input ended before the four turns of a block
    ShortScript { id: String },
    /// A turn does not start with the expected speaker prefix
    BadTurnPrefix { id: String, turn: usize, expected: String },
    /// A sentence breaks the length rule of the episode's level
    SentenceLength { id: String, level: Level, words: usize, sentence: String },
    /// The line after a block is not blank
    MissingSeparator { id: String },
}

impl Diagnostic {
    /// Whether this diagnostic stops the scan
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::IncompleteBlock { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteBlock { line } => {
                write!(f, "ERROR: incomplete block starting at line {}", line)
            }
            Self::BadField { field, line } => {
                write!(f, "ERROR: bad {} field at line {}", field.name(), line)
            }
            Self::MissingScriptHeader { line } => {
                write!(f, "ERROR: missing 'script:' at line {}", line)
            }
            Self::DuplicateId { id } => write!(f, "ERROR: duplicated id: {}", id),
            Self::IdCategoryMismatch { id, category } => {
                write!(f, "ERROR: id/category mismatch: {} vs {}", id, category)
            }
            Self::UnknownCategory { category } => {
                write!(f, "ERROR: unknown category: {}", category)
            }
            Self::UnknownLevel { level } => write!(f, "ERROR: unknown level: {}", level),
            Self::ShortScript { id } => {
                write!(f, "ERROR: script block too short for id {}", id)
            }
            Self::BadTurnPrefix { id, turn, expected } => {
                write!(
                    f,
                    "ERROR: turn {} for {} should start with '{}'",
                    turn, id, expected
                )
            }
            Self::SentenceLength {
                id,
                level,
                words,
                sentence,
            } => match level {
                Level::Beginner => write!(
                    f,
                    "{}: beginner sentence too long ({} words): {}",
                    id, words, sentence
                ),
                Level::Intermediate | Level::Advanced => write!(
                    f,
                    "{}: {} sentence length {} out of range: {}",
                    id, level, words, sentence
                ),
            },
            Self::MissingSeparator { id } => {
                write!(f, "ERROR: missing blank line after id {}", id)
            }
        }
    }
}

/// Serialized form of a diagnostic: its data plus the rendered message
#[derive(Serialize)]
struct DiagnosticRecord<'a> {
    #[serde(flatten)]
    diagnostic: &'a Diagnostic,
    message: String,
}

#[derive(Serialize)]
struct ReportRecord<'a> {
    passed: bool,
    blocks_checked: usize,
    aborted: bool,
    diagnostics: Vec<DiagnosticRecord<'a>>,
}

/// Ordered outcome of one validation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    diagnostics: Vec<Diagnostic>,
    blocks_checked: usize,
    aborted: bool,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic; a fatal one marks the run as aborted
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_fatal() {
            self.aborted = true;
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, diagnostics: I) {
        for diagnostic in diagnostics {
            self.push(diagnostic);
        }
    }

    /// Count one more scanned block
    pub fn record_block(&mut self) {
        self.blocks_checked += 1;
    }

    pub fn passed(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn aborted(&self) -> bool {
        self.aborted
    }

    pub fn blocks_checked(&self) -> usize {
        self.blocks_checked
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Rendered diagnostic messages in discovery order
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.to_string()).collect()
    }

    /// Output lines of the run: the success line, or one line per diagnostic
    pub fn to_lines(&self) -> Vec<String> {
        if self.passed() {
            vec![SUCCESS_MESSAGE.to_string()]
        } else {
            self.messages()
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let record = ReportRecord {
            passed: self.passed(),
            blocks_checked: self.blocks_checked,
            aborted: self.aborted,
            diagnostics: self
                .diagnostics
                .iter()
                .map(|diagnostic| DiagnosticRecord {
                    diagnostic,
                    message: diagnostic.to_string(),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&record)
    }
}
