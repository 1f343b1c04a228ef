//! Mock module - Synthetic sensor series for the analytics dashboard

mod generators;

pub use generators::{
    series_summary, temperature_alert, Metric, MockSeries, SeriesSummary, Timeframe,
    TEMPERATURE_ALERT,
};
