/*!
 * Tests for sentence segmentation and length rules
 */

use dialint::validation::sentences::{count_words, split_sentences, SentenceLengthChecker};
use dialint::validation::{Diagnostic, Level};
use crate::common::word_run;

fn check(level: Level, words: usize) -> Vec<Diagnostic> {
    let fragments = [format!(" {}.", word_run(words)), String::new(), String::new(), String::new()];
    SentenceLengthChecker::check("ai_future_01", Some(level), &fragments)
}

/// Test beginner boundary: 11 passes, 12 fails with the count reported
#[test]
fn test_check_withBeginnerBoundary_shouldFailFromTwelveWords() {
    assert!(check(Level::Beginner, 11).is_empty());

    let diagnostics = check(Level::Beginner, 12);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].to_string(),
        format!("ai_future_01: beginner sentence too long (12 words): {}", word_run(12))
    );
}

/// Test intermediate boundaries: 9 and 19 fail, 10 and 18 pass
#[test]
fn test_check_withIntermediateBoundaries_shouldUseClosedInterval() {
    assert_eq!(check(Level::Intermediate, 9).len(), 1);
    assert!(check(Level::Intermediate, 10).is_empty());
    assert!(check(Level::Intermediate, 18).is_empty());
    assert_eq!(check(Level::Intermediate, 19).len(), 1);
}

/// Test advanced boundaries: 14 and 26 fail, 15 and 25 pass
#[test]
fn test_check_withAdvancedBoundaries_shouldUseClosedInterval() {
    assert_eq!(check(Level::Advanced, 14).len(), 1);
    assert!(check(Level::Advanced, 15).is_empty());
    assert!(check(Level::Advanced, 25).is_empty());

    let diagnostics = check(Level::Advanced, 26);
    assert!(matches!(
        &diagnostics[0],
        Diagnostic::SentenceLength { words: 26, level: Level::Advanced, .. }
    ));
}

/// Test that every offending sentence is reported in order
#[test]
fn test_check_withSeveralLongSentences_shouldReportEachInOrder() {
    let fragments = [
        format!(" {}! Short one.", word_run(12)),
        format!(" {}?", word_run(13)),
    ];
    let diagnostics = SentenceLengthChecker::check("x_1", Some(Level::Beginner), &fragments);

    let counts: Vec<usize> = diagnostics
        .iter()
        .map(|d| match d {
            Diagnostic::SentenceLength { words, .. } => *words,
            other => panic!("unexpected diagnostic: {:?}", other),
        })
        .collect();
    assert_eq!(counts, vec![12, 13]);
}

/// Test that text without terminators is one sentence
#[test]
fn test_splitSentences_withoutTerminator_shouldYieldWholeText() {
    let sentences: Vec<&str> = split_sentences("  just some words  ").collect();
    assert_eq!(sentences, vec!["just some words"]);
    assert_eq!(count_words(sentences[0]), 3);
}

/// Test that the offending sentence is reported verbatim, inner spacing included
#[test]
fn test_check_withIrregularSpacing_shouldKeepSentenceText() {
    let fragments = ["  one,  two  three"];
    let diagnostics = SentenceLengthChecker::check("x_1", Some(Level::Intermediate), &fragments);
    assert_eq!(
        diagnostics[0].to_string(),
        "x_1: intermediate sentence length 3 out of range: one,  two  three"
    );
}
