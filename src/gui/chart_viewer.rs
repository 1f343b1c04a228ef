//! Chart Viewer Widget
//! Central analytics dashboard: real-time mock charts, historical views and
//! the CSV upload tab.

use crate::charts::{ChartKind, ChartPlotter, ChartPoint, OK_COLOR, WARNING_COLOR};
use crate::data::CsvAnalysis;
use crate::mock::{series_summary, temperature_alert, Metric, Timeframe, TEMPERATURE_ALERT};
use egui::{Color32, ComboBox, RichText, ScrollArea};

const CHART_HEIGHT: f32 = 260.0;
const CARD_SPACING: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    RealTime,
    Historical,
    CsvUpload,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::RealTime,
        DashboardTab::Historical,
        DashboardTab::CsvUpload,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::RealTime => "📡 Real-time",
            DashboardTab::Historical => "🕓 Historical",
            DashboardTab::CsvUpload => "📁 CSV Upload",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartViewerAction {
    None,
    BrowseCsv,
    ExportChart,
    RefreshRealtime,
    RegenerateHistorical,
}

/// What the CSV tab needs from the app for one frame.
pub struct CsvView<'a> {
    pub analysis: Option<&'a CsvAnalysis>,
    pub file_name: Option<String>,
    pub is_loading: bool,
    pub preview_rows: usize,
}

/// Field names of a series, in the order of its first point.
pub fn field_keys(points: &[ChartPoint]) -> Vec<String> {
    points
        .first()
        .map(|p| p.fields().iter().map(|(k, _)| k.clone()).collect())
        .unwrap_or_default()
}

/// Tabbed analytics dashboard.
#[derive(Default)]
pub struct ChartViewer {
    pub tab: DashboardTab,
    pub metric: Metric,
    pub timeframe: Timeframe,
    pub chart_kind: ChartKind,
    pub csv_chart_kind: ChartKind,
    temperature: Vec<ChartPoint>,
    vibration: Vec<ChartPoint>,
    energy: Vec<ChartPoint>,
    historical: Vec<ChartPoint>,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_realtime(
        &mut self,
        temperature: Vec<ChartPoint>,
        vibration: Vec<ChartPoint>,
        energy: Vec<ChartPoint>,
    ) {
        self.temperature = temperature;
        self.vibration = vibration;
        self.energy = energy;
    }

    pub fn set_historical(&mut self, points: Vec<ChartPoint>) {
        self.historical = points;
    }

    /// Draw the dashboard
    pub fn show(&mut self, ui: &mut egui::Ui, csv: CsvView<'_>) -> ChartViewerAction {
        let mut action = ChartViewerAction::None;

        ui.horizontal(|ui| {
            for tab in DashboardTab::ALL {
                ui.selectable_value(&mut self.tab, tab, RichText::new(tab.label()).size(14.0));
            }
        });
        ui.separator();

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let tab_action = match self.tab {
                    DashboardTab::RealTime => self.show_realtime(ui),
                    DashboardTab::Historical => self.show_historical(ui),
                    DashboardTab::CsvUpload => self.show_csv(ui, &csv),
                };
                if tab_action != ChartViewerAction::None {
                    action = tab_action;
                }
            });

        action
    }

    fn show_realtime(&mut self, ui: &mut egui::Ui) -> ChartViewerAction {
        let mut action = ChartViewerAction::None;

        ui.horizontal(|ui| {
            ui.label(RichText::new("Live Sensor Readings").size(16.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🔄 Refresh").clicked() {
                    action = ChartViewerAction::RefreshRealtime;
                }
            });
        });
        ui.add_space(CARD_SPACING);

        let alert = temperature_alert(&self.temperature);
        Self::chart_card(ui, "Temperature", "°C", alert, |ui| {
            ChartPlotter::draw_series_chart(
                ui,
                "rt_temperature",
                &self.temperature,
                &field_keys(&self.temperature),
                ChartKind::Line,
                CHART_HEIGHT,
            );
            if alert {
                ui.label(
                    RichText::new(format!(
                        "⚠ Temperature above {TEMPERATURE_ALERT} °C, inspect cooling"
                    ))
                    .size(12.0)
                    .color(WARNING_COLOR),
                );
            }
        });
        ui.add_space(CARD_SPACING);

        Self::chart_card(ui, "Vibration", "mm/s", false, |ui| {
            ChartPlotter::draw_series_chart(
                ui,
                "rt_vibration",
                &self.vibration,
                &field_keys(&self.vibration),
                ChartKind::Line,
                CHART_HEIGHT,
            );
        });
        ui.add_space(CARD_SPACING);

        Self::chart_card(ui, "Energy", "kWh", false, |ui| {
            ChartPlotter::draw_series_chart(
                ui,
                "rt_energy",
                &self.energy,
                &field_keys(&self.energy),
                ChartKind::Bar,
                CHART_HEIGHT,
            );
        });

        action
    }

    fn show_historical(&mut self, ui: &mut egui::Ui) -> ChartViewerAction {
        let mut action = ChartViewerAction::None;

        ui.horizontal(|ui| {
            ui.label("Metric:");
            ComboBox::from_id_salt("hist_metric")
                .width(150.0)
                .selected_text(self.metric.title())
                .show_ui(ui, |ui| {
                    for metric in Metric::ALL {
                        if ui
                            .selectable_value(&mut self.metric, metric, metric.title())
                            .clicked()
                        {
                            action = ChartViewerAction::RegenerateHistorical;
                        }
                    }
                });

            ui.add_space(10.0);
            ui.label("Timeframe:");
            ComboBox::from_id_salt("hist_timeframe")
                .width(110.0)
                .selected_text(self.timeframe.label())
                .show_ui(ui, |ui| {
                    for timeframe in Timeframe::ALL {
                        if ui
                            .selectable_value(&mut self.timeframe, timeframe, timeframe.label())
                            .clicked()
                        {
                            action = ChartViewerAction::RegenerateHistorical;
                        }
                    }
                });

            ui.add_space(10.0);
            ui.label("Chart:");
            for kind in ChartKind::ALL {
                ui.radio_value(&mut self.chart_kind, kind, kind.label());
            }
        });
        ui.add_space(CARD_SPACING);

        let keys = field_keys(&self.historical);
        let title = format!("{} ({})", self.metric.title(), self.timeframe.label());
        Self::chart_card(ui, &title, self.metric.units(), false, |ui| {
            ChartPlotter::draw_series_chart(
                ui,
                "historical_chart",
                &self.historical,
                &keys,
                self.chart_kind,
                CHART_HEIGHT + 80.0,
            );
        });
        ui.add_space(CARD_SPACING);

        if let Some(summary) = keys
            .first()
            .and_then(|key| series_summary(&self.historical, key))
        {
            let units = self.metric.units();
            ui.horizontal(|ui| {
                Self::stat_card(ui, "Average", &format!("{} {units}", summary.average));
                Self::stat_card(ui, "Maximum", &format!("{} {units}", summary.max));
                Self::stat_card(ui, "Minimum", &format!("{} {units}", summary.min));
            });
        }

        action
    }

    fn show_csv(&mut self, ui: &mut egui::Ui, csv: &CsvView<'_>) -> ChartViewerAction {
        let mut action = ChartViewerAction::None;

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let name = csv
                        .file_name
                        .clone()
                        .unwrap_or_else(|| "No file selected".to_string());
                    let color = if csv.file_name.is_some() {
                        Color32::WHITE
                    } else {
                        Color32::GRAY
                    };
                    ui.label(RichText::new(name).size(12.0).color(color));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if csv.is_loading {
                            ui.spinner();
                            ui.label(RichText::new("Processing...").size(12.0));
                        } else if ui.button("📂 Browse").clicked() {
                            action = ChartViewerAction::BrowseCsv;
                        }
                    });
                });
            });
        ui.add_space(CARD_SPACING);

        let Some(analysis) = csv.analysis else {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(
                    RichText::new("Upload a CSV file to preview and chart it")
                        .size(16.0)
                        .color(Color32::GRAY),
                );
            });
            return action;
        };

        ui.label(
            RichText::new(format!(
                "Data Preview (first {} of {} rows)",
                csv.preview_rows.min(analysis.table.row_count()),
                analysis.table.row_count()
            ))
            .size(14.0)
            .strong(),
        );
        ChartPlotter::draw_preview_table(ui, &analysis.table, csv.preview_rows);
        ui.add_space(CARD_SPACING);

        if analysis.has_chart() {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Chart").size(14.0).strong());
                for kind in ChartKind::ALL {
                    ui.radio_value(&mut self.csv_chart_kind, kind, kind.label());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("💾 Export PNG").clicked() {
                        action = ChartViewerAction::ExportChart;
                    }
                });
            });
            ChartPlotter::draw_series_chart(
                ui,
                "csv_chart",
                &analysis.chart_points,
                &analysis.series_keys,
                self.csv_chart_kind,
                CHART_HEIGHT + 40.0,
            );
        } else {
            ui.label(
                RichText::new("No numeric values in the first data row; nothing to chart")
                    .size(12.0)
                    .color(Color32::GRAY),
            );
        }

        let ragged = analysis.table.ragged_row_count();
        if ragged > 0 {
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!(
                    "⚠ {ragged} row(s) have a different cell count than the header; missing cells read as empty"
                ))
                .size(12.0)
                .color(WARNING_COLOR),
            );
        }

        if !analysis.anomalies.is_empty() {
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!(
                    "⚠ {} cell(s) could not be read as numbers and are left out of the chart",
                    analysis.anomalies.len()
                ))
                .size(12.0)
                .color(WARNING_COLOR),
            );
        }
        ui.add_space(CARD_SPACING);

        ui.label(
            RichText::new(format!(
                "Column Statistics ({} rows, {} columns)",
                analysis.insights.row_count, analysis.insights.column_count
            ))
            .size(14.0)
            .strong(),
        );
        ChartPlotter::draw_stats_table(ui, &analysis.table.headers, &analysis.insights);

        action
    }

    /// Framed card with a title, units and a coloured border when alerting.
    fn chart_card(
        ui: &mut egui::Ui,
        title: &str,
        units: &str,
        alert: bool,
        add_contents: impl FnOnce(&mut egui::Ui),
    ) {
        let border_color = if alert { WARNING_COLOR } else { OK_COLOR };
        egui::Frame::none()
            .stroke(egui::Stroke::new(1.5, border_color))
            .rounding(8.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(title).size(15.0).strong());
                    ui.label(RichText::new(units).size(11.0).color(Color32::GRAY));
                });
                add_contents(ui);
            });
    }

    fn stat_card(ui: &mut egui::Ui, label: &str, value: &str) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(label).size(11.0).color(Color32::GRAY));
                    ui.label(RichText::new(value).size(16.0).strong());
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_follow_first_point() {
        let points = vec![
            ChartPoint::new("a").with("Value", 1.0).with("Average", 2.0),
            ChartPoint::new("b").with("Value", 3.0),
        ];
        assert_eq!(field_keys(&points), vec!["Value", "Average"]);
        assert!(field_keys(&[]).is_empty());
    }

    #[test]
    fn starts_on_realtime_tab() {
        let viewer = ChartViewer::new();
        assert_eq!(viewer.tab, DashboardTab::RealTime);
        assert_eq!(viewer.chart_kind, ChartKind::Line);
        assert!(viewer.historical.is_empty());
    }
}
