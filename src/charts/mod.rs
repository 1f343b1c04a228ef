//! Charts module - Chart projection and rendering

mod plotter;
mod projection;
mod renderer;

pub use plotter::{ChartKind, ChartPlotter, OK_COLOR, PALETTE_RGB, WARNING_COLOR};
pub use projection::{CellParseAnomaly, ChartPoint, ChartProjector};
pub use renderer::{RenderError, StaticChartRenderer};
