//! Sim module - Toy process model driven by a fixed tick

mod engine;
mod state;
mod ticker;

pub use engine::SimulationEngine;
pub use state::{
    Parameter, SimulationState, DEFAULT_LOAD, DEFAULT_PRESSURE, DEFAULT_SPEED,
    DEFAULT_TEMPERATURE, HIGH_LOAD, MAX_TEMPERATURE, WARNING_PRESSURE, WARNING_TEMPERATURE,
};
pub use ticker::{Ticker, DEFAULT_TICK_INTERVAL};
