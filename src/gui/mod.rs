//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;
mod notice;

pub use app::TwinscopeApp;
pub use chart_viewer::{field_keys, ChartViewer, ChartViewerAction, CsvView, DashboardTab};
pub use control_panel::{ControlPanel, ControlPanelAction};
pub use notice::{Notice, NoticeBoard, NoticeLevel};
