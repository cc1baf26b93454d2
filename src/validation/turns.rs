/*!
 * Dialogue turn validation.
 *
 * A script has four turns alternating between speaker A and speaker B,
 * always starting with A. Each turn line is checked for its speaker
 * prefix, and its text is extracted for the sentence-length rules.
 */

use std::fmt;

use super::parser::TURN_LINES;
use super::report::Diagnostic;

/// Speaker of a dialogue turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    A,
    B,
}

impl Speaker {
    /// Line prefix that attributes a turn to this speaker
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::A => "A:",
            Self::B => "B:",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Expected speaker of each turn
pub const SPEAKER_ORDER: [Speaker; TURN_LINES] = [Speaker::A, Speaker::B, Speaker::A, Speaker::B];

/// Text of a turn: everything after the first `:`, or the whole line without one
pub fn turn_text(line: &str) -> &str {
    line.split_once(':').map_or(line, |(_, text)| text)
}

/// Checks the speaker alternation of a four-turn script
pub struct TurnValidator;

impl TurnValidator {
    /// Validate the turns of one episode
    ///
    /// Every turn is checked, and its text extracted, even after a mismatch.
    pub fn validate<'a>(
        episode_id: &str,
        turns: &[&'a str; TURN_LINES],
    ) -> (Vec<&'a str>, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let mut texts = Vec::with_capacity(TURN_LINES);

        for (index, (speaker, &line)) in SPEAKER_ORDER.iter().zip(turns.iter()).enumerate() {
            if !line.starts_with(speaker.prefix()) {
                diagnostics.push(Diagnostic::BadTurnPrefix {
                    id: episode_id.to_string(),
                    turn: index + 1,
                    expected: speaker.prefix().to_string(),
                });
            }
            texts.push(turn_text(line));
        }

        (texts, diagnostics)
    }
}
