//! CSV Ingestor Module
//! Turns raw CSV text into [`TabularData`] with a naive comma split.
//!
//! Quoting is not supported: a comma inside a quoted field is a separator.

use crate::data::TabularData;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("CSV input is empty")]
    EmptyInput,
    #[error("Failed to read file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parses CSV text and files into tabular data.
pub struct CsvIngestor;

impl CsvIngestor {
    /// Parse raw CSV text.
    ///
    /// The first line holds the headers. Lines that are blank after trimming
    /// are dropped; every other line becomes one row, even when its cell count
    /// differs from the header count.
    pub fn parse(raw_text: &str) -> Result<TabularData, IngestError> {
        if raw_text.trim().is_empty() {
            return Err(IngestError::EmptyInput);
        }

        let mut lines = raw_text.split('\n');
        let headers = lines
            .next()
            .map(split_line)
            .ok_or(IngestError::EmptyInput)?;

        let rows: Vec<Vec<String>> = lines
            .filter(|line| !line.trim().is_empty())
            .map(split_line)
            .collect();

        debug!(
            headers = headers.len(),
            rows = rows.len(),
            "parsed CSV text"
        );

        Ok(TabularData::new(headers, rows))
    }

    /// Read a file from disk and decode it as (lossy) UTF-8.
    pub fn read_file(path: &Path) -> Result<String, IngestError> {
        let bytes = std::fs::read(path).map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Read and parse a CSV file.
    pub fn ingest_file(path: &Path) -> Result<TabularData, IngestError> {
        let text = Self::read_file(path)?;
        Self::parse(&text)
    }
}

fn split_line(line: &str) -> Vec<String> {
    line.split(',').map(|cell| cell.trim().to_string()).collect()
}
