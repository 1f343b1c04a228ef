//! Simulation scenarios driven through the public engine API.

use std::time::{Duration, Instant};
use twinscope::sim::{Parameter, SimulationEngine, SimulationState};

fn running_engine(now: Instant) -> SimulationEngine {
    let mut engine = SimulationEngine::new(Duration::from_secs(1));
    engine.start(now);
    engine
}

#[test]
fn single_tick_at_high_load() {
    let t0 = Instant::now();
    let mut engine = running_engine(t0);
    engine.set_parameter(Parameter::Load, 80.0);
    engine.set_parameter(Parameter::Speed, 60.0);
    engine.set_parameter(Parameter::Pressure, 1.0);
    engine.tick();

    let s = engine.state();
    assert_eq!(s.flow_rate, 0.77);
    assert_eq!(s.temperature, 25.5);
    assert_eq!(s.elapsed_time_s, 1);
    assert!(!s.overheat_warning);
}

#[test]
fn warning_raised_once_temperature_passes_threshold() {
    let t0 = Instant::now();
    let mut engine = running_engine(t0);
    engine.set_parameter(Parameter::Load, 80.0);

    for n in 1..=25 {
        engine.tick();
        let s = engine.state();
        assert_eq!(s.overheat_warning, s.temperature > 35.0, "tick {n}");
    }
    assert_eq!(engine.state().temperature, 37.5);
    assert!(engine.state().overheat_warning);
    assert_eq!(engine.efficiency(), 65.0);
    assert_eq!(engine.power_draw(), 48.0);
}

#[test]
fn ticks_follow_wall_clock() {
    let t0 = Instant::now();
    let mut engine = running_engine(t0);

    assert_eq!(engine.advance(t0 + Duration::from_millis(999)), 0);
    assert_eq!(engine.advance(t0 + Duration::from_secs(1)), 1);
    assert_eq!(engine.advance(t0 + Duration::from_millis(3500)), 2);
    assert_eq!(engine.state().elapsed_time_s, 3);
    assert_eq!(
        engine.time_until_next_tick(t0 + Duration::from_millis(3500)),
        Some(Duration::from_millis(500))
    );

    engine.pause();
    assert_eq!(engine.advance(t0 + Duration::from_secs(10)), 0);
    assert_eq!(engine.time_until_next_tick(t0), None);
    assert_eq!(engine.state().elapsed_time_s, 3);
}

#[test]
fn stopped_engine_ignores_ticks_but_accepts_parameters() {
    let mut engine = SimulationEngine::new(Duration::from_secs(1));
    engine.set_parameter(Parameter::Temperature, 40.0);
    engine.tick();
    assert_eq!(engine.state().elapsed_time_s, 0);
    assert_eq!(engine.state().temperature, 40.0);
    assert!(!engine.is_running());
}

#[test]
fn reset_restores_defaults_and_stops() {
    let t0 = Instant::now();
    let mut engine = running_engine(t0);
    engine.set_parameter(Parameter::Load, 90.0);
    engine.advance(t0 + Duration::from_secs(5));
    engine.reset();

    assert_eq!(*engine.state(), SimulationState::default());
    assert_eq!(engine.advance(t0 + Duration::from_secs(20)), 0);
}

#[test]
fn toggle_resumes_from_paused_values() {
    let t0 = Instant::now();
    let mut engine = running_engine(t0);
    engine.advance(t0 + Duration::from_secs(2));
    engine.toggle(t0 + Duration::from_secs(2));
    assert!(!engine.is_running());

    let t1 = t0 + Duration::from_secs(30);
    engine.toggle(t1);
    assert!(engine.is_running());
    assert_eq!(engine.advance(t1 + Duration::from_secs(1)), 1);
    assert_eq!(engine.state().elapsed_time_s, 3);
}
