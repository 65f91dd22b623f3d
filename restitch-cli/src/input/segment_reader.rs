//! Reading ordered segment sequences from files or standard input

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// How segments are encoded in an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentEncoding {
    /// A JSON array of strings, in sequence order
    Json,
    /// One segment per line, in file order
    Lines,
}

/// Reads ordered segment sequences for reconciliation
#[derive(Debug, Clone, Copy)]
pub struct SegmentReader {
    encoding: SegmentEncoding,
}

impl SegmentReader {
    /// Create a reader for the given encoding
    pub fn new(encoding: SegmentEncoding) -> Self {
        Self { encoding }
    }

    /// Read and parse one file
    pub fn read_file(&self, path: &Path) -> Result<Vec<String>> {
        let raw = fs::read_to_string(path)
            .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;
        self.parse(&raw)
            .with_context(|| format!("in {}", path.display()))
    }

    /// Read and parse standard input to exhaustion
    pub fn read_stdin(&self) -> Result<Vec<String>> {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .map_err(CliError::Io)?;
        self.parse(&raw)
    }

    /// Parse raw input into a segment sequence
    pub fn parse(&self, raw: &str) -> Result<Vec<String>> {
        match self.encoding {
            SegmentEncoding::Json => {
                let segments: Vec<String> = serde_json::from_str(raw)
                    .map_err(|e| CliError::InvalidSegments(e.to_string()))?;
                Ok(segments)
            }
            SegmentEncoding::Lines => Ok(raw.lines().map(str::to_string).collect()),
        }
    }
}
