//! Simulation Engine Module
//! Owns the live simulation state and ties the ticker to the running flag.

use crate::sim::{Parameter, SimulationState, Ticker};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Single live simulation instance for one panel.
#[derive(Debug, Clone, Default)]
pub struct SimulationEngine {
    state: SimulationState,
    ticker: Ticker,
}

impl SimulationEngine {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            state: SimulationState::default(),
            ticker: Ticker::new(tick_interval),
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Stopped -> Running. No-op while running.
    pub fn start(&mut self, now: Instant) {
        if self.state.running {
            return;
        }
        self.state = self.state.started();
        self.ticker.start(now);
        info!(elapsed_s = self.state.elapsed_time_s, "simulation started");
    }

    /// Running -> Stopped. No-op while stopped.
    pub fn pause(&mut self) {
        if !self.state.running {
            return;
        }
        self.state = self.state.paused();
        self.ticker.stop();
        info!(elapsed_s = self.state.elapsed_time_s, "simulation paused");
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.state.running {
            self.pause();
        } else {
            self.start(now);
        }
    }

    /// Back to defaults, stopped.
    pub fn reset(&mut self) {
        self.state = SimulationState::default();
        self.ticker.stop();
        info!("simulation reset");
    }

    pub fn set_parameter(&mut self, parameter: Parameter, value: f64) {
        debug!(?parameter, value, "parameter changed");
        self.state = self.state.with_parameter(parameter, value);
    }

    /// Apply one tick directly. Has no effect while stopped.
    pub fn tick(&mut self) {
        let was_warning = self.state.overheat_warning;
        self.state = self.state.ticked();
        if self.state.overheat_warning && !was_warning {
            warn!(
                temperature = self.state.temperature,
                pressure = self.state.pressure,
                "overheat warning raised"
            );
        }
    }

    /// Apply every tick that became due up to `now`. Returns how many ran.
    pub fn advance(&mut self, now: Instant) -> u32 {
        if !self.state.running {
            return 0;
        }
        let ticks = self.ticker.due_ticks(now);
        for _ in 0..ticks {
            self.tick();
        }
        ticks
    }

    /// When the frame loop should wake up next, `None` while stopped.
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_next(now)
    }

    pub fn efficiency(&self) -> f64 {
        self.state.efficiency()
    }

    pub fn power_draw(&self) -> f64 {
        self.state.power_draw()
    }
}
