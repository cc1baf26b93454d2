/*!
 * Validation service that runs all validators over a corpus.
 *
 * This module drives one validation run: the block parser slices the
 * lines, each block goes through header, turn and sentence-length checks,
 * and every diagnostic lands in a single ordered report.
 */

use log::{debug, info};

use super::fields::FieldValidator;
use super::parser::{BlockParser, RawBlock, ScanEvent, Separator, TURN_LINES};
use super::report::{Diagnostic, ValidationReport};
use super::sentences::SentenceLengthChecker;
use super::turns::TurnValidator;

/// Entry point for validating an episode corpus
#[derive(Debug, Default, Clone, Copy)]
pub struct CorpusValidator;

impl CorpusValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a corpus given as decoded lines, without line terminators
    pub fn validate<S: AsRef<str>>(&self, lines: &[S]) -> ValidationReport {
        let lines: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
        let mut fields = FieldValidator::new();
        let mut report = ValidationReport::new();

        for event in BlockParser::new(&lines) {
            match event {
                ScanEvent::Block(block) => {
                    report.record_block();
                    Self::validate_block(&block, &mut fields, &mut report);
                }
                ScanEvent::Truncated { start_line } => {
                    report.push(Diagnostic::IncompleteBlock { line: start_line });
                }
            }
        }

        info!(
            "Checked {} episode block(s) over {} line(s): {} diagnostic(s){}",
            report.blocks_checked(),
            lines.len(),
            report.diagnostics().len(),
            if report.aborted() { ", scan aborted" } else { "" }
        );

        report
    }

    /// Validate a whole corpus text
    pub fn validate_text(&self, text: &str) -> ValidationReport {
        let lines: Vec<&str> = text.lines().collect();
        self.validate(&lines)
    }

    fn validate_block(block: &RawBlock<'_>, fields: &mut FieldValidator, report: &mut ValidationReport) {
        let (header, header_issues) = fields.validate(&block.header, block.start_line);
        report.extend(header_issues);

        match <&[&str; TURN_LINES]>::try_from(block.turns) {
            Ok(turns) => {
                let (texts, turn_issues) = TurnValidator::validate(&header.id, turns);
                report.extend(turn_issues);
                report.extend(SentenceLengthChecker::check(&header.id, header.level, &texts));
            }
            Err(_) => {
                debug!(
                    "Script of {} has only {} turn line(s)",
                    header.id,
                    block.turns.len()
                );
                report.push(Diagnostic::ShortScript {
                    id: header.id.clone(),
                });
            }
        }

        if let Separator::NonBlank(line) = block.separator {
            debug!("Expected blank line after {}, found {:?}", header.id, line);
            report.push(Diagnostic::MissingSeparator { id: header.id });
        }
    }
}
