//! Simulation state and its pure transitions.
//!
//! Every transition takes the current state by reference and returns the next
//! one; nothing here mutates shared state.

use crate::data::round_to;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const DEFAULT_TEMPERATURE: f64 = 25.0;
pub const DEFAULT_PRESSURE: f64 = 1.0;
pub const DEFAULT_LOAD: f64 = 50.0;
pub const DEFAULT_SPEED: f64 = 60.0;

/// Upper bound the temperature saturates at while running.
pub const MAX_TEMPERATURE: f64 = 65.0;
pub const WARNING_TEMPERATURE: f64 = 35.0;
pub const WARNING_PRESSURE: f64 = 2.0;
/// Loads above this heat the system faster.
pub const HIGH_LOAD: f64 = 70.0;

/// User-adjustable simulation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    Temperature,
    Pressure,
    Load,
    Speed,
}

impl Parameter {
    pub const ALL: [Parameter; 4] = [
        Parameter::Temperature,
        Parameter::Pressure,
        Parameter::Load,
        Parameter::Speed,
    ];

    /// Slider bounds. The engine itself does not enforce them.
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Parameter::Temperature => -10.0..=50.0,
            Parameter::Pressure => 0.1..=2.5,
            Parameter::Load => 10.0..=100.0,
            Parameter::Speed => 20.0..=100.0,
        }
    }

    pub fn step(self) -> f64 {
        match self {
            Parameter::Temperature => 1.0,
            Parameter::Pressure => 0.1,
            Parameter::Load | Parameter::Speed => 5.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Parameter::Temperature => "Ambient Temperature",
            Parameter::Pressure => "System Pressure",
            Parameter::Load => "Load Factor",
            Parameter::Speed => "Motor Speed",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Parameter::Temperature => "°C",
            Parameter::Pressure => "MPa",
            Parameter::Load | Parameter::Speed => "%",
        }
    }

    /// Temperature and pressure sliders are locked while the simulation runs.
    pub fn locked_while_running(self) -> bool {
        matches!(self, Parameter::Temperature | Parameter::Pressure)
    }
}

/// Snapshot of the toy process model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationState {
    pub running: bool,
    pub temperature: f64,
    pub pressure: f64,
    pub load: f64,
    pub speed: f64,
    pub flow_rate: f64,
    pub elapsed_time_s: u64,
    pub overheat_warning: bool,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            running: false,
            temperature: DEFAULT_TEMPERATURE,
            pressure: DEFAULT_PRESSURE,
            load: DEFAULT_LOAD,
            speed: DEFAULT_SPEED,
            flow_rate: 0.0,
            elapsed_time_s: 0,
            overheat_warning: false,
        }
    }
}

impl SimulationState {
    pub fn started(&self) -> Self {
        Self {
            running: true,
            ..*self
        }
    }

    /// Stop without touching parameters or accumulated outputs.
    pub fn paused(&self) -> Self {
        Self {
            running: false,
            ..*self
        }
    }

    pub fn with_parameter(&self, parameter: Parameter, value: f64) -> Self {
        let mut next = *self;
        match parameter {
            Parameter::Temperature => next.temperature = value,
            Parameter::Pressure => next.pressure = value,
            Parameter::Load => next.load = value,
            Parameter::Speed => next.speed = value,
        }
        next
    }

    pub fn parameter(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Temperature => self.temperature,
            Parameter::Pressure => self.pressure,
            Parameter::Load => self.load,
            Parameter::Speed => self.speed,
        }
    }

    /// Advance one tick. A stopped state is returned unchanged.
    pub fn ticked(&self) -> Self {
        if !self.running {
            return *self;
        }

        let flow_rate =
            round_to((self.speed / 100.0) * (self.pressure * 0.8) * (self.load / 50.0), 2);
        let heating = if self.load > HIGH_LOAD { 0.5 } else { 0.1 };
        let temperature = (self.temperature + heating).min(MAX_TEMPERATURE);

        Self {
            flow_rate,
            temperature,
            elapsed_time_s: self.elapsed_time_s + 1,
            overheat_warning: temperature > WARNING_TEMPERATURE
                || self.pressure > WARNING_PRESSURE,
            ..*self
        }
    }

    /// Efficiency in percent, one decimal.
    pub fn efficiency(&self) -> f64 {
        round_to((90.0 - (self.temperature - DEFAULT_TEMPERATURE) * 2.0).max(0.0), 1)
    }

    /// Power draw in kW.
    pub fn power_draw(&self) -> f64 {
        (self.load * self.speed / 100.0).round()
    }

    /// Days until the next maintenance window.
    pub fn maintenance_days(&self) -> u64 {
        let penalty = if self.temperature > WARNING_TEMPERATURE {
            20
        } else {
            0
        };
        120u64.saturating_sub(self.elapsed_time_s / 6 + penalty)
    }

    /// Elapsed time as `MM:SS`.
    pub fn elapsed_label(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.elapsed_time_s / 60,
            self.elapsed_time_s % 60
        )
    }

    pub fn status_label(&self) -> &'static str {
        if self.running {
            "Active"
        } else {
            "Standby"
        }
    }
}
