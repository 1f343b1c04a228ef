//! Column Summary Module
//! Classifies every column as numeric or text and computes its summary card.

use crate::data::{parse_numeric, round_to, TabularData};
use rayon::prelude::*;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Column classification used by the statistics cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Text,
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Text => write!(f, "text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostCommon {
    pub value: String,
    pub count: usize,
}

/// Summary for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryStatistic {
    Numeric {
        min: f64,
        max: f64,
        avg: f64,
        sum: f64,
    },
    Text {
        #[serde(rename = "uniqueValues")]
        unique_values: usize,
        #[serde(rename = "mostCommon")]
        most_common: MostCommon,
    },
}

impl SummaryStatistic {
    pub fn kind(&self) -> ColumnKind {
        match self {
            SummaryStatistic::Numeric { .. } => ColumnKind::Numeric,
            SummaryStatistic::Text { .. } => ColumnKind::Text,
        }
    }
}

/// Row/column counts plus per-column classification and statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightSummary {
    pub row_count: usize,
    pub column_count: usize,
    pub column_types: IndexMap<String, ColumnKind>,
    pub summary_stats: IndexMap<String, SummaryStatistic>,
}

impl InsightSummary {
    pub fn stat(&self, header: &str) -> Option<&SummaryStatistic> {
        self.summary_stats.get(header)
    }

    pub fn kind(&self, header: &str) -> Option<ColumnKind> {
        self.column_types.get(header).copied()
    }
}

/// Handles column statistics with multi-threading support.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Summarize every column of the table.
    ///
    /// A column is numeric only when it has at least one value and every value
    /// parses as a number. When headers repeat, the later column wins and keeps
    /// the position of the first.
    pub fn summarize(table: &TabularData) -> InsightSummary {
        let per_column: Vec<(String, SummaryStatistic)> = table
            .headers
            .par_iter()
            .enumerate()
            .map(|(i, header)| (header.clone(), Self::summarize_column(&table.column(i))))
            .collect();

        let mut insights = InsightSummary {
            row_count: table.row_count(),
            column_count: table.column_count(),
            ..Default::default()
        };

        for (header, stat) in per_column {
            insights.column_types.insert(header.clone(), stat.kind());
            insights.summary_stats.insert(header, stat);
        }

        debug!(
            rows = insights.row_count,
            columns = insights.column_count,
            "summarized columns"
        );
        insights
    }

    /// Summarize one column of raw cell values.
    pub fn summarize_column(values: &[&str]) -> SummaryStatistic {
        let numeric: Option<Vec<f64>> = values.iter().map(|v| parse_numeric(v)).collect();

        match numeric {
            Some(numbers) if !numbers.is_empty() => Self::numeric_summary(&numbers),
            _ => SummaryStatistic::Text {
                unique_values: Self::unique_count(values),
                most_common: Self::most_common_value(values),
            },
        }
    }

    fn numeric_summary(numbers: &[f64]) -> SummaryStatistic {
        let sum: f64 = numbers.iter().sum();
        SummaryStatistic::Numeric {
            min: Statistics::min(numbers.iter()),
            max: Statistics::max(numbers.iter()),
            avg: round_to(Statistics::mean(numbers.iter()), 2),
            sum: round_to(sum, 2),
        }
    }

    fn unique_count(values: &[&str]) -> usize {
        values.iter().collect::<HashSet<_>>().len()
    }

    /// Most frequent raw value.
    ///
    /// Ties go to the value that appeared first in the column. An empty
    /// column yields `("", 0)`.
    pub fn most_common_value(values: &[&str]) -> MostCommon {
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for &v in values {
            let count = counts.entry(v).or_insert(0);
            if *count == 0 {
                order.push(v);
            }
            *count += 1;
        }

        let mut best = MostCommon {
            value: String::new(),
            count: 0,
        };
        for v in order {
            let count = counts[v];
            if count > best.count {
                best = MostCommon {
                    value: v.to_string(),
                    count,
                };
            }
        }
        best
    }
}
