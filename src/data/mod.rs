//! Data module - CSV ingestion and the tabular model

mod cell;
mod ingest;
mod loader;
mod table;

pub use cell::{is_numeric, parse_numeric, round_to};
pub use ingest::{CsvIngestor, IngestError};
pub use loader::{CsvAnalysis, DataLoader};
pub use table::TabularData;
