//! Property tests over parsing, statistics and chart projection.

use proptest::prelude::*;
use twinscope::charts::ChartProjector;
use twinscope::data::{is_numeric, round_to, CsvIngestor};
use twinscope::stats::{StatsCalculator, SummaryStatistic};

fn cell() -> impl Strategy<Value = String> {
    "[a-z0-9.]{1,5}"
}

/// Header count, then rows of exactly that many cells.
fn grid() -> impl Strategy<Value = (Vec<String>, Vec<Vec<String>>)> {
    (1usize..6).prop_flat_map(|width| {
        (
            prop::collection::vec(cell(), width),
            prop::collection::vec(prop::collection::vec(cell(), width), 0..10),
        )
    })
}

fn to_csv(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut lines = vec![headers.join(",")];
    lines.extend(rows.iter().map(|r| r.join(",")));
    lines.join("\n")
}

proptest! {
    #[test]
    fn counts_match_input((headers, rows) in grid()) {
        let text = to_csv(&headers, &rows);
        let table = CsvIngestor::parse(&text).unwrap();
        prop_assert_eq!(table.headers.len(), headers.len());
        prop_assert_eq!(table.rows.len(), rows.len());
    }

    #[test]
    fn blank_lines_are_ignored((headers, rows) in grid()) {
        let mut text = to_csv(&headers, &rows);
        text.push_str("\n\n   \n");
        let table = CsvIngestor::parse(&text).unwrap();
        prop_assert_eq!(table.rows.len(), rows.len());
    }

    #[test]
    fn parsing_is_deterministic(text in "[a-z0-9,\n ]{1,60}") {
        let first = CsvIngestor::parse(&text);
        let second = CsvIngestor::parse(&text);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "parse results differ"),
        }
    }

    #[test]
    fn numeric_summary_is_ordered(values in prop::collection::vec(-10_000i64..10_000, 1..40)) {
        let cells: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let refs: Vec<&str> = cells.iter().map(String::as_str).collect();
        let SummaryStatistic::Numeric { min, max, avg, sum } = StatsCalculator::summarize_column(&refs) else {
            return Err(TestCaseError::fail("expected numeric summary"));
        };
        prop_assert!(max >= avg && avg >= min);
        let total: f64 = values.iter().map(|&v| v as f64).sum();
        prop_assert_eq!(sum, round_to(total, 2));
    }

    #[test]
    fn text_summary_counts(values in prop::collection::vec("[a-d]{1,2}", 1..40)) {
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();
        let SummaryStatistic::Text { unique_values, most_common } = StatsCalculator::summarize_column(&refs) else {
            return Err(TestCaseError::fail("expected text summary"));
        };
        let mut distinct = values.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(unique_values, distinct.len());

        let max_freq = distinct
            .iter()
            .map(|d| values.iter().filter(|v| *v == d).count())
            .max()
            .unwrap_or(0);
        prop_assert_eq!(most_common.count, max_freq);
        prop_assert_eq!(
            values.iter().filter(|v| **v == most_common.value).count(),
            max_freq
        );
    }

    #[test]
    fn projection_is_all_or_nothing((headers, rows) in grid()) {
        let table = CsvIngestor::parse(&to_csv(&headers, &rows)).unwrap();
        let points = ChartProjector::project_for_chart(&table);
        let chartable = rows.first().is_some_and(|r| r.iter().any(|c| is_numeric(c)));
        if chartable {
            prop_assert_eq!(points.len(), rows.len());
        } else {
            prop_assert!(points.is_empty());
        }
    }
}
