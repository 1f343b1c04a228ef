//! Chart Plotter Module
//! Creates interactive visualizations using egui_plot.

use crate::charts::ChartPoint;
use crate::data::TabularData;
use crate::stats::{InsightSummary, SummaryStatistic};
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

/// Series palette as RGB triples, shared with the static renderer.
pub const PALETTE_RGB: [(u8, u8, u8); 10] = [
    (52, 152, 219),  // Blue
    (231, 76, 60),   // Red
    (46, 204, 113),  // Green
    (155, 89, 182),  // Purple
    (243, 156, 18),  // Orange
    (26, 188, 156),  // Teal
    (233, 30, 99),   // Pink
    (0, 188, 212),   // Cyan
    (255, 87, 34),   // Deep Orange
    (96, 125, 139),  // Blue Grey
];

pub const WARNING_COLOR: Color32 = Color32::from_rgb(220, 53, 69);
pub const OK_COLOR: Color32 = Color32::from_rgb(40, 167, 69);

/// How a series chart is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Line,
    Area,
    Bar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Line, ChartKind::Area, ChartKind::Bar];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Area => "Area",
            ChartKind::Bar => "Bar",
        }
    }
}

/// Draws chart points and summary cards with egui.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn series_color(index: usize) -> Color32 {
        let (r, g, b) = PALETTE_RGB[index % PALETTE_RGB.len()];
        Color32::from_rgb(r, g, b)
    }

    /// `[x, y]` pairs for one field, x being the point index. NaN is skipped.
    pub fn series_values(points: &[ChartPoint], key: &str) -> Vec<[f64; 2]> {
        points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.get(key).filter(|v| v.is_finite()).map(|v| [i as f64, v]))
            .collect()
    }

    /// Category label under an integer x position.
    pub fn label_at(labels: &[String], x: f64) -> String {
        let idx = x.round();
        if (x - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    }

    /// Draw one chart with a series per key, x-axis labelled by point name.
    pub fn draw_series_chart(
        ui: &mut egui::Ui,
        id: &str,
        points: &[ChartPoint],
        keys: &[String],
        kind: ChartKind,
        height: f32,
    ) {
        let labels: Vec<String> = points.iter().map(|p| p.name.clone()).collect();

        Plot::new(id)
            .height(height)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _range| Self::label_at(&labels, mark.value))
            .show(ui, |plot_ui| {
                let series_count = keys.len().max(1) as f64;
                let bar_width = 0.8 / series_count;

                for (k, key) in keys.iter().enumerate() {
                    let color = Self::series_color(k);
                    let values = Self::series_values(points, key);

                    match kind {
                        ChartKind::Line => {
                            plot_ui.line(
                                Line::new(PlotPoints::from(values))
                                    .color(color)
                                    .width(2.0)
                                    .name(key),
                            );
                        }
                        ChartKind::Area => {
                            plot_ui.line(
                                Line::new(PlotPoints::from(values))
                                    .color(color)
                                    .width(1.5)
                                    .fill(0.0)
                                    .name(key),
                            );
                        }
                        ChartKind::Bar => {
                            let offset = (k as f64 - (series_count - 1.0) / 2.0) * bar_width;
                            let bars: Vec<Bar> = values
                                .iter()
                                .map(|&[x, y]| Bar::new(x + offset, y).width(bar_width * 0.9))
                                .collect();
                            plot_ui.bar_chart(BarChart::new(bars).color(color).name(key));
                        }
                    }
                }
            });
    }

    /// Raw preview of the first rows.
    pub fn draw_preview_table(ui: &mut egui::Ui, table: &TabularData, rows: usize) {
        egui::ScrollArea::horizontal()
            .id_salt("csv_preview_scroll")
            .show(ui, |ui| {
                egui::Grid::new("csv_preview")
                    .striped(true)
                    .min_col_width(60.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for header in &table.headers {
                            ui.label(RichText::new(header).strong().size(12.0));
                        }
                        ui.end_row();

                        for row in table.preview(rows) {
                            for col in 0..table.column_count() {
                                ui.label(
                                    RichText::new(row.get(col).map(String::as_str).unwrap_or(""))
                                        .size(12.0),
                                );
                            }
                            ui.end_row();
                        }
                    });
            });
    }

    /// One line per column with its classification and statistics.
    pub fn draw_stats_table(ui: &mut egui::Ui, headers: &[String], insights: &InsightSummary) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("csv_stats_table")
                    .striped(true)
                    .min_col_width(70.0)
                    .spacing([10.0, 4.0])
                    .show(ui, |ui| {
                        for title in ["Column", "Type", "Min / Unique", "Max / Most common", "Avg", "Sum"] {
                            ui.label(RichText::new(title).strong().size(11.0));
                        }
                        ui.end_row();

                        let mut shown: Vec<&str> = Vec::new();
                        for header in headers {
                            if shown.contains(&header.as_str()) {
                                continue;
                            }
                            shown.push(header);

                            let Some(stat) = insights.stat(header) else {
                                continue;
                            };
                            ui.label(RichText::new(header).size(11.0));
                            ui.label(RichText::new(stat.kind().to_string()).size(11.0));
                            match stat {
                                SummaryStatistic::Numeric { min, max, avg, sum } => {
                                    ui.label(RichText::new(format!("{min}")).size(11.0));
                                    ui.label(RichText::new(format!("{max}")).size(11.0));
                                    ui.label(RichText::new(format!("{avg}")).size(11.0));
                                    ui.label(RichText::new(format!("{sum}")).size(11.0));
                                }
                                SummaryStatistic::Text {
                                    unique_values,
                                    most_common,
                                } => {
                                    ui.label(RichText::new(unique_values.to_string()).size(11.0));
                                    ui.label(
                                        RichText::new(format!(
                                            "{} ({})",
                                            most_common.value, most_common.count
                                        ))
                                        .size(11.0),
                                    );
                                    ui.label(RichText::new("-").size(11.0));
                                    ui.label(RichText::new("-").size(11.0));
                                }
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_values_skip_nan() {
        let points = vec![
            ChartPoint::new("a").with("v", 1.0),
            ChartPoint::new("b").with("v", f64::NAN),
            ChartPoint::new("c").with("v", 3.0),
        ];
        assert_eq!(
            ChartPlotter::series_values(&points, "v"),
            vec![[0.0, 1.0], [2.0, 3.0]]
        );
    }

    #[test]
    fn labels_only_on_integer_marks() {
        let labels = vec!["x".to_string(), "y".to_string()];
        assert_eq!(ChartPlotter::label_at(&labels, 1.0), "y");
        assert_eq!(ChartPlotter::label_at(&labels, 0.5), "");
        assert_eq!(ChartPlotter::label_at(&labels, -1.0), "");
        assert_eq!(ChartPlotter::label_at(&labels, 5.0), "");
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(ChartPlotter::series_color(0), ChartPlotter::series_color(10));
    }
}
