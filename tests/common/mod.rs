/*!
 * Common test utilities for the dialint test suite
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// Initialize test logging once; later calls are ignored
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Builder for one episode block
#[derive(Debug, Clone)]
pub struct EpisodeBuilder {
    pub id: String,
    pub category: String,
    pub title: String,
    pub level: String,
    pub turns: Vec<String>,
}

impl EpisodeBuilder {
    /// A valid beginner episode in the given category
    pub fn new(category: &str, number: u32) -> Self {
        Self {
            id: format!("{}_{:02}", category, number),
            category: category.to_string(),
            title: "A short chat".to_string(),
            level: "beginner".to_string(),
            turns: vec![
                "A: Hi, how are you today?".to_string(),
                "B: I am fine, thank you.".to_string(),
                "A: Do you want some tea?".to_string(),
                "B: Yes, please. That sounds nice.".to_string(),
            ],
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn level(mut self, level: &str) -> Self {
        self.level = level.to_string();
        self
    }

    pub fn turn(mut self, index: usize, line: &str) -> Self {
        self.turns[index] = line.to_string();
        self
    }

    /// Replace the turns with a single sentence of `words` words
    pub fn single_sentence(mut self, words: usize) -> Self {
        self.turns = vec![
            format!("A: {}.", word_run(words)),
            "B:".to_string(),
            "A:".to_string(),
            "B:".to_string(),
        ];
        self
    }

    /// The nine lines of the block
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("id: {}", self.id),
            format!("category: {}", self.category),
            format!("title: {}", self.title),
            format!("level: {}", self.level),
            "script:".to_string(),
        ];
        lines.extend(self.turns.iter().cloned());
        lines
    }
}

/// `n` distinct words separated by single spaces
pub fn word_run(n: usize) -> String {
    (1..=n)
        .map(|i| format!("word{}", i))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join blocks with blank separator lines
pub fn corpus(blocks: &[EpisodeBuilder]) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, block) in blocks.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.extend(block.lines());
    }
    lines
}

/// Corpus as file text with a trailing newline
pub fn corpus_text(blocks: &[EpisodeBuilder]) -> String {
    let mut text = corpus(blocks).join("\n");
    text.push('\n');
    text
}
