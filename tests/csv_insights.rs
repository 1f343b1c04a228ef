//! End-to-end checks of CSV upload handling: parse, chart, summarize.

use twinscope::charts::ChartProjector;
use twinscope::data::{CsvAnalysis, CsvIngestor, IngestError};
use twinscope::stats::{ColumnKind, MostCommon, StatsCalculator, SummaryStatistic};

#[test]
fn two_numeric_columns() {
    let table = CsvIngestor::parse("a,b\n1,2\n3,4\n").unwrap();
    assert_eq!(table.headers, vec!["a", "b"]);
    assert_eq!(table.rows, vec![vec!["1", "2"], vec!["3", "4"]]);

    let insights = StatsCalculator::summarize(&table);
    assert_eq!(insights.kind("a"), Some(ColumnKind::Numeric));
    assert_eq!(insights.kind("b"), Some(ColumnKind::Numeric));
    assert_eq!(
        insights.stat("a"),
        Some(&SummaryStatistic::Numeric {
            min: 1.0,
            max: 3.0,
            avg: 2.0,
            sum: 4.0
        })
    );

    let points = ChartProjector::project_for_chart(&table);
    assert_eq!(points.len(), 2);
    assert_eq!(points[1].get("a"), Some(3.0));
    assert_eq!(points[1].get("b"), Some(4.0));
}

#[test]
fn text_and_numeric_columns() {
    let table = CsvIngestor::parse("name,score\nAlice,10\nBob,20\nAlice,30\n").unwrap();
    let insights = StatsCalculator::summarize(&table);

    assert_eq!(insights.kind("name"), Some(ColumnKind::Text));
    assert_eq!(
        insights.stat("name"),
        Some(&SummaryStatistic::Text {
            unique_values: 2,
            most_common: MostCommon {
                value: "Alice".to_string(),
                count: 2
            }
        })
    );

    let Some(SummaryStatistic::Numeric { avg, .. }) = insights.stat("score") else {
        panic!("score should be numeric");
    };
    assert_eq!(*avg, 20.0);

    let points = ChartProjector::project_for_chart(&table);
    let names: Vec<&str> = points.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Alice"]);
    assert_eq!(ChartProjector::series_keys(&table), vec!["score"]);
}

#[test]
fn empty_text_is_rejected() {
    assert!(matches!(CsvIngestor::parse(""), Err(IngestError::EmptyInput)));
    assert!(matches!(
        CsvAnalysis::from_text("  \n "),
        Err(IngestError::EmptyInput)
    ));
}

#[test]
fn chart_and_statistics_classify_independently() {
    let analysis = CsvAnalysis::from_text("v\n1\nx\n").unwrap();

    // First row decides the chart, so `v` is charted with a NaN hole.
    assert_eq!(analysis.chart_points.len(), 2);
    assert_eq!(analysis.chart_points[0].get("v"), Some(1.0));
    assert!(analysis.chart_points[1].get("v").is_some_and(f64::is_nan));
    assert_eq!(analysis.anomalies.len(), 1);
    assert_eq!(analysis.anomalies[0].raw, "x");

    // Statistics need every value numeric.
    assert_eq!(analysis.insights.kind("v"), Some(ColumnKind::Text));
}

#[test]
fn text_first_row_suppresses_chart() {
    let analysis = CsvAnalysis::from_text("city,country\nOslo,Norway\nLima,Peru\n").unwrap();
    assert!(!analysis.has_chart());
    assert!(analysis.series_keys.is_empty());
    assert_eq!(analysis.insights.row_count, 2);
}

#[test]
fn ragged_rows_read_missing_cells_as_empty() {
    let analysis = CsvAnalysis::from_text("label,x,y\nA,1,2\nB,3\n").unwrap();
    assert_eq!(analysis.table.rows[1].len(), 2);
    assert_eq!(analysis.table.ragged_row_count(), 1);
    assert!(analysis.chart_points[1].get("y").is_some_and(f64::is_nan));
    assert_eq!(analysis.insights.kind("y"), Some(ColumnKind::Text));
    assert_eq!(analysis.insights.kind("x"), Some(ColumnKind::Numeric));
}

#[test]
fn chart_points_serialize_flat() {
    let analysis = CsvAnalysis::from_text("t,v\nmon,1.5\ntue,oops\n").unwrap();
    let json = serde_json::to_value(&analysis.chart_points).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"name": "mon", "v": 1.5},
            {"name": "tue", "v": null}
        ])
    );
}

#[test]
fn insights_serialize_with_camel_case_keys() {
    let analysis = CsvAnalysis::from_text("name\nAlice\n").unwrap();
    let json = serde_json::to_value(&analysis.insights).unwrap();
    assert_eq!(json["rowCount"], 1);
    assert_eq!(json["columnTypes"]["name"], "text");
    assert_eq!(json["summaryStats"]["name"]["uniqueValues"], 1);
    assert_eq!(json["summaryStats"]["name"]["mostCommon"]["value"], "Alice");
}
