use std::fs;
use std::path::Path;

use log::debug;

use crate::errors::CorpusError;

// @module: File utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    /// Read a corpus file as strict UTF-8 text
    pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<String, CorpusError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| CorpusError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        String::from_utf8(bytes).map_err(|e| CorpusError::Encoding {
            path: path.to_path_buf(),
            offset: e.utf8_error().valid_up_to(),
        })
    }

    /// Read a corpus file and split it into lines without their terminators
    pub fn read_corpus_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CorpusError> {
        let content = Self::read_corpus(&path)?;
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        debug!("Read {} line(s) from {:?}", lines.len(), path.as_ref());
        Ok(lines)
    }
}
