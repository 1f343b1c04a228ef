//! In-memory tabular representation of an uploaded CSV file.

use serde::{Deserialize, Serialize};

/// Headers plus rows of raw, trimmed string cells.
///
/// Row lengths are not checked against the header count. Reading past the end
/// of a short row yields the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TabularData {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Cell at `(row, col)`, or `""` when the row is short or missing.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// All cells of one column in row order, absent cells as `""`.
    pub fn column(&self, col: usize) -> Vec<&str> {
        (0..self.rows.len()).map(|row| self.cell(row, col)).collect()
    }

    /// The first `n` rows, for the preview table.
    pub fn preview(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..self.rows.len().min(n)]
    }

    /// Number of rows whose cell count differs from the header count.
    pub fn ragged_row_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.len() != self.headers.len())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TabularData {
        TabularData::new(
            vec!["a".into(), "b".into()],
            vec![
                vec!["1".into(), "2".into()],
                vec!["3".into()],
                vec!["5".into(), "6".into(), "7".into()],
            ],
        )
    }

    #[test]
    fn short_rows_read_as_empty() {
        let t = sample();
        assert_eq!(t.cell(1, 1), "");
        assert_eq!(t.cell(9, 0), "");
        assert_eq!(t.column(1), vec!["2", "", "6"]);
    }

    #[test]
    fn preview_is_bounded() {
        let t = sample();
        assert_eq!(t.preview(2).len(), 2);
        assert_eq!(t.preview(10).len(), 3);
    }

    #[test]
    fn counts_ragged_rows() {
        assert_eq!(sample().ragged_row_count(), 2);
    }
}
