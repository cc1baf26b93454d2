use std::path::Path;

use log::info;

use crate::app_config::{Config, OutputFormat};
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::validation::{CorpusValidator, ValidationReport};

// @module: Application controller for corpus validation

/// Main application controller: loads a corpus, validates it, renders the report
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Validation engine
    validator: CorpusValidator,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            validator: CorpusValidator::new(),
        }
    }

    /// Load and validate one corpus file
    pub fn validate_file<P: AsRef<Path>>(&self, corpus_path: P) -> Result<ValidationReport, AppError> {
        let corpus_path = corpus_path.as_ref();
        info!("Validating corpus: {:?}", corpus_path);

        let lines = FileManager::read_corpus_lines(corpus_path)?;
        let report = self.validator.validate(&lines);

        if !report.passed() {
            info!(
                "{} problem(s) found in {:?}",
                report.diagnostics().len(),
                corpus_path
            );
        }

        Ok(report)
    }

    /// Render a report in the configured output format
    pub fn render(&self, report: &ValidationReport) -> Result<String, AppError> {
        match self.config.output_format {
            OutputFormat::Text => Ok(report.to_lines().join("\n")),
            OutputFormat::Json => Ok(report.to_json()?),
        }
    }

    /// Validate a corpus file and return the rendered report
    pub fn run<P: AsRef<Path>>(&self, corpus_path: P) -> Result<String, AppError> {
        let report = self.validate_file(corpus_path)?;
        self.render(&report)
    }
}
