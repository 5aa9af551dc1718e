//! Line sources
//!
//! The analysis core never touches files; it receives lines. [`LogReader`] is the seam
//! for whatever supplies them, and [`FileReader`] reads a whole file into memory.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use tracing::info;

pub trait LogReader {
    /// Human-readable description of where lines come from.
    fn source(&self) -> String;

    fn read_lines(&self) -> Result<Vec<String>>;
}

pub struct FileReader {
    path: PathBuf,
}

impl FileReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LogReader for FileReader {
    fn source(&self) -> String {
        self.path.display().to_string()
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open log file: {}", self.path.display()))?;
        let reader = BufReader::new(file);

        let lines = reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .with_context(|| format!("Failed to read log file: {}", self.path.display()))?;

        info!(path = %self.path.display(), lines = lines.len(), "Read log file");
        Ok(lines)
    }
}
