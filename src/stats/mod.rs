//! Stats module - Per-column summary statistics

mod summary;

pub use summary::{ColumnKind, InsightSummary, MostCommon, StatsCalculator, SummaryStatistic};
