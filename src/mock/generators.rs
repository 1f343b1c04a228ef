//! Mock Sensor Series Module
//! Synthetic time series shown by the analytics dashboard.
//!
//! Timestamps come from the caller and randomness from a seedable RNG, so a
//! fixed seed and a fixed `now` always give the same series.

use crate::charts::ChartPoint;
use crate::data::round_to;
use chrono::{Datelike, Duration, Months, NaiveDateTime, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Temperature above which the real-time card raises an alert.
pub const TEMPERATURE_ALERT: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Temperature,
    Vibration,
    Energy,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Temperature, Metric::Vibration, Metric::Energy];

    pub fn title(self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature History",
            Metric::Vibration => "Vibration History",
            Metric::Energy => "Energy Consumption History",
        }
    }

    pub fn units(self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Vibration => "mm/s",
            Metric::Energy => "kWh",
        }
    }

    /// Reference line drawn on month and year views.
    pub fn threshold(self) -> f64 {
        match self {
            Metric::Temperature => 30.0,
            Metric::Vibration => 0.5,
            Metric::Energy => 60.0,
        }
    }

    /// Series keys of the base (week) view.
    pub fn series_keys(self) -> &'static [&'static str] {
        match self {
            Metric::Temperature => &["Actual", "Predicted"],
            Metric::Vibration => &["Axial", "Radial", "Threshold"],
            Metric::Energy => &["Current", "Optimized"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Week,
    Month,
    Year,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::Week, Timeframe::Month, Timeframe::Year];

    pub fn label(self) -> &'static str {
        match self {
            Timeframe::Week => "Past Week",
            Timeframe::Month => "Past Month",
            Timeframe::Year => "Past Year",
        }
    }
}

/// Average (one decimal), maximum and minimum of one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub average: f64,
    pub max: f64,
    pub min: f64,
}

/// Seedable generator for the dashboard's synthetic series.
pub struct MockSeries {
    rng: StdRng,
}

impl MockSeries {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use the seed when present, OS entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_else(Self::from_os_rng)
    }

    fn jitter(&mut self, half_width: f64) -> f64 {
        self.rng.random_range(-half_width..half_width)
    }

    /// Twelve readings two hours apart, with a spike in the earliest three.
    pub fn temperature(&mut self, now: NaiveDateTime) -> Vec<ChartPoint> {
        (0..12)
            .rev()
            .map(|i| {
                let time = now - Duration::hours(i * 2);
                let x = i as f64;
                let base = 24.0 + (x / 3.0).sin() * 2.0;
                let normal = base + self.jitter(1.0);
                let actual = if i >= 9 {
                    normal + 12.0 * (-(x - 10.0) * (x - 10.0) / 2.0).exp()
                } else {
                    normal
                };
                ChartPoint::new(format!("{:02}:00", time.hour()))
                    .with("Actual", round_to(actual, 1))
                    .with("Predicted", round_to(normal, 1))
            })
            .collect()
    }

    pub fn vibration(&mut self, now: NaiveDateTime) -> Vec<ChartPoint> {
        (0..12)
            .rev()
            .map(|i| {
                let time = now - Duration::hours(i * 2);
                let base = 0.2 + (i as f64 / 2.0).sin() * 0.1;
                let normal = base + self.jitter(0.1);
                ChartPoint::new(format!("{:02}:00", time.hour()))
                    .with("Axial", round_to(normal, 2))
                    .with("Radial", round_to(normal * 0.7, 2))
                    .with("Threshold", 0.5)
            })
            .collect()
    }

    /// Seven daily readings, labelled `M/D`.
    pub fn energy(&mut self, now: NaiveDateTime) -> Vec<ChartPoint> {
        (0..7)
            .rev()
            .map(|i| {
                let day = now - Duration::days(i);
                let base = 45.0 - i as f64 * 0.5;
                let actual = base + self.jitter(5.0);
                ChartPoint::new(format!("{}/{}", day.month(), day.day()))
                    .with("Current", actual.round())
                    .with("Optimized", (actual * 0.85).round())
            })
            .collect()
    }

    pub fn base_series(&mut self, metric: Metric, now: NaiveDateTime) -> Vec<ChartPoint> {
        match metric {
            Metric::Temperature => self.temperature(now),
            Metric::Vibration => self.vibration(now),
            Metric::Energy => self.energy(now),
        }
    }

    /// Historical view: the base series for a week, 30 daily points for a
    /// month, 12 monthly points for a year.
    pub fn historical(
        &mut self,
        metric: Metric,
        timeframe: Timeframe,
        now: NaiveDateTime,
    ) -> Vec<ChartPoint> {
        let threshold = metric.threshold();
        match timeframe {
            Timeframe::Week => self.base_series(metric, now),
            Timeframe::Month => (0..30)
                .map(|i| {
                    let day = now - Duration::days(29 - i);
                    let base = 20.0 + (i as f64 / 5.0).sin() * 5.0;
                    let value = base + self.jitter(2.0);
                    ChartPoint::new(format!("{}/{}", day.month(), day.day()))
                        .with("Value", round_to(value, 1))
                        .with("Average", round_to(base, 1))
                        .with("Threshold", threshold)
                })
                .collect(),
            Timeframe::Year => (0..12u32)
                .map(|i| {
                    let month = now
                        .checked_sub_months(Months::new(11 - i))
                        .unwrap_or(now)
                        .month0();
                    let base = 20.0 + (i as f64 / 3.0).cos() * 8.0;
                    let value = base + self.jitter(2.5);
                    ChartPoint::new(MONTH_NAMES[month as usize])
                        .with("Value", round_to(value, 1))
                        .with("Average", round_to(base, 1))
                        .with("Threshold", threshold)
                })
                .collect(),
        }
    }
}

/// Summary of one field across a series; `None` when no point carries it.
pub fn series_summary(points: &[ChartPoint], key: &str) -> Option<SeriesSummary> {
    let values: Vec<f64> = points
        .iter()
        .filter_map(|p| p.get(key))
        .filter(|v| !v.is_nan())
        .collect();
    if values.is_empty() {
        return None;
    }

    let average = values.iter().sum::<f64>() / values.len() as f64;
    Some(SeriesSummary {
        average: round_to(average, 1),
        max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        min: values.iter().copied().fold(f64::INFINITY, f64::min),
    })
}

/// True when the latest `Actual` reading is above [`TEMPERATURE_ALERT`].
pub fn temperature_alert(points: &[ChartPoint]) -> bool {
    points
        .last()
        .and_then(|p| p.get("Actual"))
        .is_some_and(|t| t > TEMPERATURE_ALERT)
}
