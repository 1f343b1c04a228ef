//! Twinscope Main Application
//! Main window with the simulation panel, the analytics dashboard and notices.

use crate::charts::StaticChartRenderer;
use crate::config::AppConfig;
use crate::data::{CsvAnalysis, DataLoader};
use crate::gui::{
    ChartViewer, ChartViewerAction, ControlPanel, ControlPanelAction, CsvView, NoticeBoard,
};
use crate::mock::MockSeries;
use crate::sim::SimulationEngine;
use egui::{SidePanel, TopBottomPanel};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::Instant;
use tracing::error;

/// CSV loading result from background thread
enum LoadResult {
    Complete {
        analysis: Box<CsvAnalysis>,
        path: PathBuf,
    },
    Error(String),
}

/// Main application window.
pub struct TwinscopeApp {
    config: AppConfig,
    engine: SimulationEngine,
    loader: DataLoader,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
    mock: MockSeries,
    notices: NoticeBoard,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl TwinscopeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut app = Self {
            engine: SimulationEngine::new(config.tick_interval()),
            loader: DataLoader::new(),
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
            mock: MockSeries::new(config.mock_seed),
            notices: NoticeBoard::new(config.notice_duration()),
            load_rx: None,
            is_loading: false,
            config,
        };
        app.refresh_realtime();
        app.regenerate_historical();
        app
    }

    fn now_local() -> chrono::NaiveDateTime {
        chrono::Local::now().naive_local()
    }

    fn refresh_realtime(&mut self) {
        let now = Self::now_local();
        let temperature = self.mock.temperature(now);
        let vibration = self.mock.vibration(now);
        let energy = self.mock.energy(now);
        self.chart_viewer.set_realtime(temperature, vibration, energy);
    }

    fn regenerate_historical(&mut self) {
        let points = self.mock.historical(
            self.chart_viewer.metric,
            self.chart_viewer.timeframe,
            Self::now_local(),
        );
        self.chart_viewer.set_historical(points);
    }

    fn handle_control_action(&mut self, action: ControlPanelAction) {
        match action {
            ControlPanelAction::Toggle => self.engine.toggle(Instant::now()),
            ControlPanelAction::Reset => self.engine.reset(),
            ControlPanelAction::SetParameter(parameter, value) => {
                self.engine.set_parameter(parameter, value)
            }
            ControlPanelAction::None => {}
        }
    }

    /// Handle CSV file selection; parsing runs on a background thread.
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        else {
            return;
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        self.notices.info(format!("Processing {name}..."), Instant::now());
        self.is_loading = true;
        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let result = match CsvAnalysis::from_path(&path) {
                Ok(analysis) => LoadResult::Complete {
                    analysis: Box::new(analysis),
                    path,
                },
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        let now = Instant::now();
        let mut should_keep_receiver = true;
        while let Ok(result) = rx.try_recv() {
            match result {
                LoadResult::Complete { analysis, path } => {
                    let analysis = self.loader.set_analysis(*analysis, Some(path));
                    let message = format!(
                        "CSV file processed successfully: {} rows, {} columns",
                        analysis.table.row_count(),
                        analysis.table.column_count()
                    );
                    self.notices.success(message, now);
                    self.is_loading = false;
                    should_keep_receiver = false;
                }
                LoadResult::Error(message) => {
                    error!(error = %message, "CSV upload failed");
                    self.notices.error(format!("Error processing CSV: {message}"), now);
                    self.is_loading = false;
                    should_keep_receiver = false;
                }
            }
        }

        if should_keep_receiver {
            self.load_rx = Some(rx);
        }
    }

    /// Export the uploaded CSV chart to a PNG chosen by the user.
    fn handle_export_chart(&mut self) {
        let now = Instant::now();
        let Some(analysis) = self.loader.analysis() else {
            self.notices.error("No chart to export", now);
            return;
        };

        let Some(output_path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("twinscope_chart.png")
            .save_file()
        else {
            return;
        };

        let title = self
            .loader
            .get_file_path()
            .and_then(|p| p.file_stem())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "CSV Upload".to_string());

        match StaticChartRenderer::save_png(
            &output_path,
            &title,
            &analysis.chart_points,
            &analysis.series_keys,
            self.config.export_width,
            self.config.export_height,
        ) {
            Ok(()) => self
                .notices
                .success(format!("Chart exported to {}", output_path.display()), now),
            Err(e) => {
                error!(error = %e, "chart export failed");
                self.notices.error(format!("Export failed: {e}"), now);
            }
        }
    }

    fn handle_viewer_action(&mut self, action: ChartViewerAction) {
        match action {
            ChartViewerAction::BrowseCsv => self.handle_browse_csv(),
            ChartViewerAction::ExportChart => self.handle_export_chart(),
            ChartViewerAction::RefreshRealtime => self.refresh_realtime(),
            ChartViewerAction::RegenerateHistorical => self.regenerate_historical(),
            ChartViewerAction::None => {}
        }
    }
}

impl eframe::App for TwinscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.check_load_results();
        self.engine.advance(now);
        self.notices.prune(now);

        // Repaint while loading, at the next tick, or when a notice expires
        if self.is_loading {
            ctx.request_repaint();
        } else {
            let next = [
                self.engine.time_until_next_tick(now),
                self.notices.next_expiry(now),
            ]
            .into_iter()
            .flatten()
            .min();
            if let Some(delay) = next {
                ctx.request_repaint_after(delay);
            }
        }

        // Left panel - Simulation controls
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let state = *self.engine.state();
                    let action = self.control_panel.show(ui, &state);
                    self.handle_control_action(action);
                });
            });

        // Bottom panel - Notices
        TopBottomPanel::bottom("notices")
            .min_height(24.0)
            .show(ctx, |ui| {
                self.notices.show(ui);
            });

        // Central panel - Dashboard
        egui::CentralPanel::default().show(ctx, |ui| {
            let file_name = self
                .loader
                .get_file_path()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().to_string());
            let csv = CsvView {
                analysis: self.loader.analysis(),
                file_name,
                is_loading: self.is_loading,
                preview_rows: self.config.preview_rows,
            };
            let action = self.chart_viewer.show(ui, csv);
            self.handle_viewer_action(action);
        });
    }
}
