/*!
 * Tests for the command line interface
 */

use std::process::Command;

use anyhow::Result;
use crate::common::{self, EpisodeBuilder};

fn dialint() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dialint"))
}

/// Test that a missing argument prints usage and exits with 1
#[test]
fn test_cli_withoutArguments_shouldExitWithUsage() -> Result<()> {
    let output = dialint().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: dialint <corpus_file>"));
    assert!(output.stdout.is_empty());
    Ok(())
}

/// Test that a clean corpus prints the success line and exits with 0
#[test]
fn test_cli_withCleanCorpus_shouldPrintOk() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let text = common::corpus_text(&[EpisodeBuilder::new("home_life", 1)]);
    let path = common::create_test_file(temp_dir.path(), "corpus.txt", &text)?;

    let output = dialint().arg(&path).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "OK: all episodes passed basic validation.\n"
    );
    assert!(output.stderr.is_empty());
    Ok(())
}

/// Test that a default run with diagnostics only writes the report
#[test]
fn test_cli_withDiagnosticsAndDefaultLogLevel_shouldKeepStderrEmpty() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let text = common::corpus_text(&[EpisodeBuilder::new("home_life", 1).turn(1, "A: Hi.")]);
    let path = common::create_test_file(temp_dir.path(), "corpus.txt", &text)?;

    let output = dialint().arg(&path).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "ERROR: turn 2 for home_life_01 should start with 'B:'\n"
    );
    assert!(output.stderr.is_empty());
    Ok(())
}

/// Test that info logging goes to stderr with its glyph and leaves stdout untouched
#[test]
fn test_cli_withInfoLogLevel_shouldLogToStderrOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let text = common::corpus_text(&[EpisodeBuilder::new("home_life", 1)]);
    let path = common::create_test_file(temp_dir.path(), "corpus.txt", &text)?;

    let output = dialint().arg(&path).args(["--log-level", "info"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "OK: all episodes passed basic validation.\n"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .find(|line| line.contains("Validating corpus"))
        .expect("info line on stderr");
    assert!(line.contains("💬"));
    Ok(())
}

/// Test that diagnostics still exit with 0
#[test]
fn test_cli_withDiagnostics_shouldPrintThemAndExitZero() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let text = common::corpus_text(&[EpisodeBuilder::new("home_life", 1).turn(0, "B: Hi.")]);
    let path = common::create_test_file(temp_dir.path(), "corpus.txt", &text)?;

    let output = dialint().arg(&path).args(["--log-level", "error"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "ERROR: turn 1 for home_life_01 should start with 'A:'\n"
    );
    Ok(())
}

/// Test the JSON output selected through a config file
#[test]
fn test_cli_withJsonConfigFile_shouldPrintJson() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let text = common::corpus_text(&[EpisodeBuilder::new("home_life", 1)]);
    let corpus = common::create_test_file(temp_dir.path(), "corpus.txt", &text)?;
    let config = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "output_format": "json", "log_level": "warn" }"#,
    )?;

    let output = dialint().arg(&corpus).arg("--config").arg(&config).output()?;

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["passed"], true);
    Ok(())
}

/// Test that an unreadable corpus is reported on stderr with exit code 1
#[test]
fn test_cli_withMissingCorpus_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = dialint().arg(temp_dir.path().join("nope.txt")).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to validate corpus"));
    Ok(())
}
