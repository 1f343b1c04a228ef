//! CSV Data Loader Module
//! Holds the current upload and everything derived from it.

use crate::charts::{CellParseAnomaly, ChartPoint, ChartProjector};
use crate::data::{CsvIngestor, IngestError, TabularData};
use crate::stats::{InsightSummary, StatsCalculator};
use std::path::{Path, PathBuf};
use tracing::info;

/// A parsed upload with its chart projection and column statistics.
#[derive(Debug, Clone)]
pub struct CsvAnalysis {
    pub table: TabularData,
    pub chart_points: Vec<ChartPoint>,
    pub series_keys: Vec<String>,
    pub anomalies: Vec<CellParseAnomaly>,
    pub insights: InsightSummary,
}

impl CsvAnalysis {
    /// Derive the chart projection and statistics for a table.
    pub fn from_table(table: TabularData) -> Self {
        let chart_points = ChartProjector::project_for_chart(&table);
        let series_keys = ChartProjector::series_keys(&table);
        let anomalies = ChartProjector::cell_anomalies(&table);
        let insights = StatsCalculator::summarize(&table);
        Self {
            table,
            chart_points,
            series_keys,
            anomalies,
            insights,
        }
    }

    /// Parse text and analyze it in one step.
    pub fn from_text(raw_text: &str) -> Result<Self, IngestError> {
        CsvIngestor::parse(raw_text).map(Self::from_table)
    }

    /// Read a file, parse it and analyze it.
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        CsvIngestor::ingest_file(path).map(Self::from_table)
    }

    pub fn has_chart(&self) -> bool {
        !self.chart_points.is_empty()
    }
}

/// Keeps the most recent upload. A new upload replaces the old one wholesale.
#[derive(Default)]
pub struct DataLoader {
    analysis: Option<CsvAnalysis>,
    file_path: Option<PathBuf>,
}

impl DataLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a finished analysis, replacing the previous upload.
    pub fn set_analysis(&mut self, analysis: CsvAnalysis, file_path: Option<PathBuf>) -> &CsvAnalysis {
        info!(
            rows = analysis.table.row_count(),
            columns = analysis.table.column_count(),
            path = ?file_path,
            "loaded CSV upload"
        );
        self.file_path = file_path;
        self.analysis.insert(analysis)
    }

    pub fn analysis(&self) -> Option<&CsvAnalysis> {
        self.analysis.as_ref()
    }

    /// Get list of column names from the loaded table.
    pub fn get_columns(&self) -> Vec<String> {
        self.analysis
            .as_ref()
            .map(|a| a.table.headers.clone())
            .unwrap_or_default()
    }

    /// Get the number of data rows.
    pub fn get_row_count(&self) -> usize {
        self.analysis
            .as_ref()
            .map(|a| a.table.row_count())
            .unwrap_or(0)
    }

    pub fn get_file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}
