/*!
 * Sentence segmentation and sentence-length rules.
 *
 * The turns of an episode are joined into one text, split on runs of
 * terminal punctuation, and every non-empty sentence is checked against
 * the length rule of the episode's level.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::catalog::Level;
use super::report::Diagnostic;

/// One or more consecutive sentence terminators
static SENTENCE_TERMINATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?]+").expect("Invalid sentence terminator regex")
});

/// Split text into trimmed, non-empty sentences
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    SENTENCE_TERMINATOR_REGEX
        .split(text)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
}

/// Number of whitespace-delimited words
pub fn count_words(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}

/// Checks every sentence of an episode against its level's length rule
pub struct SentenceLengthChecker;

impl SentenceLengthChecker {
    /// Check the combined turn text of one episode
    ///
    /// # Arguments
    /// * `episode_id` - Id the diagnostics are keyed by
    /// * `level` - Parsed level; `None` means no rule applies
    /// * `fragments` - Turn texts, joined with single spaces before splitting
    pub fn check<S: AsRef<str>>(
        episode_id: &str,
        level: Option<Level>,
        fragments: &[S],
    ) -> Vec<Diagnostic> {
        let Some(level) = level else {
            debug!("Skipping sentence lengths for {}: no valid level", episode_id);
            return vec![];
        };

        let text = fragments
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(" ");
        let rule = level.length_rule();

        let mut diagnostics = Vec::new();
        let mut checked = 0;
        for sentence in split_sentences(&text) {
            checked += 1;
            let words = count_words(sentence);
            if !rule.accepts(words) {
                diagnostics.push(Diagnostic::SentenceLength {
                    id: episode_id.to_string(),
                    level,
                    words,
                    sentence: sentence.to_string(),
                });
            }
        }

        debug!(
            "Sentence lengths for {} ({}): {} sentences, {} out of range",
            episode_id,
            level,
            checked,
            diagnostics.len()
        );

        diagnostics
    }
}
