//! Chart Projection Module
//! Projects tabular data into labelled points with named numeric fields.
//!
//! Numeric columns are picked from the first data row only. Statistics use a
//! separate all-rows test (see `stats::summary`); do not merge the two.

use crate::data::{parse_numeric, TabularData};
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, warn};

/// One labelled data point with named numeric series values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartPoint {
    pub name: String,
    fields: Vec<(String, f64)>,
}

impl ChartPoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Builder form of [`ChartPoint::set`].
    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.set(key, value);
        self
    }

    /// Set a field, overwriting an existing field with the same key in place.
    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> &[(String, f64)] {
        &self.fields
    }
}

impl Serialize for ChartPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // A field keyed `name` replaces the label, so every key is written once.
        let shadowed = self.get("name").is_some();
        let len = self.fields.len() + usize::from(!shadowed);
        let mut map = serializer.serialize_map(Some(len))?;
        if !shadowed {
            map.serialize_entry("name", &self.name)?;
        }
        for (key, value) in &self.fields {
            // serde_json writes non-finite floats as null
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A cell in a charted column that did not parse as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellParseAnomaly {
    pub row: usize,
    pub column: usize,
    pub header: String,
    pub raw: String,
}

/// Column layout derived from the first data row.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ChartLayout {
    numeric_columns: Vec<usize>,
    label_column: Option<usize>,
}

impl ChartLayout {
    fn detect(table: &TabularData) -> Option<Self> {
        let first_row = table.rows.first()?;
        let numeric_columns: Vec<usize> = first_row
            .iter()
            .enumerate()
            .filter(|(_, cell)| parse_numeric(cell).is_some())
            .map(|(i, _)| i)
            .collect();

        if numeric_columns.is_empty() {
            return None;
        }

        let label_column = if numeric_columns.contains(&0) {
            None
        } else {
            Some(0)
        };

        Some(Self {
            numeric_columns,
            label_column,
        })
    }

    fn value_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.numeric_columns
            .iter()
            .copied()
            .filter(move |&i| Some(i) != self.label_column)
    }
}

fn series_key(table: &TabularData, col: usize) -> String {
    match table.headers.get(col) {
        Some(h) if !h.is_empty() => h.clone(),
        _ => format!("Column {}", col + 1),
    }
}

/// Projects tabular data into chart points.
pub struct ChartProjector;

impl ChartProjector {
    /// One point per row, or nothing when the first row has no numeric cell.
    ///
    /// Cells that fail to parse become NaN.
    pub fn project_for_chart(table: &TabularData) -> Vec<ChartPoint> {
        let Some(layout) = ChartLayout::detect(table) else {
            debug!("no numeric columns in first row, chart suppressed");
            return Vec::new();
        };

        let points: Vec<ChartPoint> = table
            .rows
            .iter()
            .enumerate()
            .map(|(row_index, _)| {
                let name = match layout.label_column {
                    Some(col) => table.cell(row_index, col).to_string(),
                    None => format!("Row {}", row_index + 1),
                };
                let mut point = ChartPoint::new(name);
                for col in layout.value_columns() {
                    let value = parse_numeric(table.cell(row_index, col)).unwrap_or(f64::NAN);
                    point.set(series_key(table, col), value);
                }
                point
            })
            .collect();

        debug!(
            points = points.len(),
            series = layout.numeric_columns.len(),
            "projected chart points"
        );
        points
    }

    /// Field keys produced by [`ChartProjector::project_for_chart`], in order.
    pub fn series_keys(table: &TabularData) -> Vec<String> {
        let Some(layout) = ChartLayout::detect(table) else {
            return Vec::new();
        };

        let mut keys: Vec<String> = Vec::new();
        for col in layout.value_columns() {
            let key = series_key(table, col);
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    /// Cells in charted columns that project to NaN.
    pub fn cell_anomalies(table: &TabularData) -> Vec<CellParseAnomaly> {
        let Some(layout) = ChartLayout::detect(table) else {
            return Vec::new();
        };

        let anomalies: Vec<CellParseAnomaly> = (0..table.row_count())
            .flat_map(|row| {
                layout
                    .value_columns()
                    .filter(move |&col| parse_numeric(table.cell(row, col)).is_none())
                    .map(move |col| CellParseAnomaly {
                        row,
                        column: col,
                        header: series_key(table, col),
                        raw: table.cell(row, col).to_string(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        if !anomalies.is_empty() {
            warn!(count = anomalies.len(), "non-numeric cells in charted columns");
        }
        anomalies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CsvIngestor;

    fn table(text: &str) -> TabularData {
        CsvIngestor::parse(text).unwrap()
    }

    #[test]
    fn text_first_column_becomes_label() {
        let points = ChartProjector::project_for_chart(&table("name,score\nAlice,10\nBob,20\n"));
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].name, "Alice");
        assert_eq!(points[1].get("score"), Some(20.0));
        assert_eq!(points[0].fields().len(), 1);
    }

    #[test]
    fn numeric_first_column_uses_row_labels() {
        let points = ChartProjector::project_for_chart(&table("a,b\n1,2\n3,4\n"));
        assert_eq!(points[0].name, "Row 1");
        assert_eq!(points[1].name, "Row 2");
        assert_eq!(points[1].get("a"), Some(3.0));
        assert_eq!(points[1].get("b"), Some(4.0));
    }

    #[test]
    fn no_numeric_cells_suppresses_chart() {
        let t = table("x,y\nfoo,bar\n1,2\n");
        assert!(ChartProjector::project_for_chart(&t).is_empty());
        assert!(ChartProjector::series_keys(&t).is_empty());
    }

    #[test]
    fn header_only_projects_nothing() {
        assert!(ChartProjector::project_for_chart(&table("a,b\n")).is_empty());
    }

    #[test]
    fn empty_header_gets_column_name() {
        let points = ChartProjector::project_for_chart(&table("label,\nx,5\n"));
        assert_eq!(points[0].get("Column 2"), Some(5.0));
    }

    #[test]
    fn later_bad_cells_become_nan() {
        let t = table("t,v\nA,1\nB,oops\nC\n");
        let points = ChartProjector::project_for_chart(&t);
        assert_eq!(points.len(), 3);
        assert!(points[1].get("v").unwrap().is_nan());
        assert!(points[2].get("v").unwrap().is_nan());

        let anomalies = ChartProjector::cell_anomalies(&t);
        assert_eq!(anomalies.len(), 2);
        assert_eq!(anomalies[0].row, 1);
        assert_eq!(anomalies[0].raw, "oops");
        assert_eq!(anomalies[1].raw, "");
    }

    #[test]
    fn duplicate_headers_overwrite_field() {
        let t = table("k,v,v\nA,1,2\n");
        let points = ChartProjector::project_for_chart(&t);
        assert_eq!(points[0].fields().len(), 1);
        assert_eq!(points[0].get("v"), Some(2.0));
        assert_eq!(ChartProjector::series_keys(&t), vec!["v"]);
    }

    #[test]
    fn serializes_flat() {
        let point = ChartPoint::new("Row 1").with("a", 1.5).with("b", f64::NAN);
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"name":"Row 1","a":1.5,"b":null}"#);
    }

    #[test]
    fn name_column_replaces_label_in_json() {
        let t = table("id,name\nx,5\n");
        let points = ChartProjector::project_for_chart(&t);
        assert_eq!(points[0].name, "x");
        assert_eq!(points[0].get("name"), Some(5.0));
        let json = serde_json::to_string(&points[0]).unwrap();
        assert_eq!(json, r#"{"name":5.0}"#);
    }
}
