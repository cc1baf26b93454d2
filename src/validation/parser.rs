/*!
 * Block parser for the episode corpus.
 *
 * The corpus is a repeating sequence of nine-line blocks:
 * - a five-line header (`id: `, `category: `, `title: `, `level: `, `script:`)
 * - four dialogue turns
 * - an optional separator line, expected to be blank
 *
 * The parser only slices the line stream into these windows; judging
 * their content is left to the field and turn validators.
 */

use log::{debug, warn};

use super::cursor::LineCursor;

/// Lines in a block header
pub const HEADER_LINES: usize = 5;

/// Dialogue turns in a block
pub const TURN_LINES: usize = 4;

/// What followed the turns of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator<'a> {
    /// A whitespace-only line
    Blank,
    /// A line with content where a blank line was expected
    NonBlank(&'a str),
    /// Input ended right after the block
    EndOfInput,
}

/// Raw line windows of one episode block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock<'a> {
    /// One-based line number of the `id: ` line
    pub start_line: usize,
    pub header: [&'a str; HEADER_LINES],
    /// Up to four turn lines; fewer only at the end of input
    pub turns: &'a [&'a str],
    pub separator: Separator<'a>,
}

impl RawBlock<'_> {
    /// Whether all four turn lines were present
    pub fn has_full_script(&self) -> bool {
        self.turns.len() == TURN_LINES
    }
}

/// One step of the scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent<'a> {
    Block(RawBlock<'a>),
    /// Fewer than five lines remained for a header; the scan is over
    Truncated { start_line: usize },
}

/// Iterator slicing a line sequence into episode blocks
pub struct BlockParser<'a> {
    cursor: LineCursor<'a>,
    finished: bool,
}

impl<'a> BlockParser<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self {
            cursor: LineCursor::new(lines),
            finished: false,
        }
    }

    fn next_block(&mut self) -> Option<ScanEvent<'a>> {
        let start_line = self.cursor.line_number();

        let Some(header) = self.cursor.take_exact(HEADER_LINES) else {
            warn!(
                "Incomplete block at line {}: only {} line(s) left",
                start_line,
                self.cursor.remaining()
            );
            self.finished = true;
            return Some(ScanEvent::Truncated { start_line });
        };
        let header: [&'a str; HEADER_LINES] = header.try_into().ok()?;

        // A short script consumes what is left, so the separator is always end of input
        let turns = self.cursor.take_up_to(TURN_LINES);

        let separator = match self.cursor.advance() {
            None => Separator::EndOfInput,
            Some(line) if line.trim().is_empty() => Separator::Blank,
            Some(line) => Separator::NonBlank(line),
        };

        debug!(
            "Parsed block at line {} ({} turn line(s), separator {:?})",
            start_line,
            turns.len(),
            separator
        );

        Some(ScanEvent::Block(RawBlock {
            start_line,
            header,
            turns,
            separator,
        }))
    }
}

impl<'a> Iterator for BlockParser<'a> {
    type Item = ScanEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.cursor.is_exhausted() {
            return None;
        }
        self.next_block()
    }
}
