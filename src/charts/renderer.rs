//! Static Chart Renderer
//! Renders chart points to a PNG with plotters, for the export button.
//!
//! Layout: centered title, one line per series over the point index, x-axis
//! labelled with point names, legend in the upper right.

use crate::charts::plotter::PALETTE_RGB;
use crate::charts::ChartPoint;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No chartable values to render")]
    Empty,
    #[error("Drawing failed: {0}")]
    Draw(String),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    fn series_color(index: usize) -> RGBColor {
        let (r, g, b) = PALETTE_RGB[index % PALETTE_RGB.len()];
        RGBColor(r, g, b)
    }

    /// Finite min/max over all series, padded so a flat series still has height.
    pub fn value_range(points: &[ChartPoint], keys: &[String]) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in points {
            for key in keys {
                if let Some(v) = point.get(key).filter(|v| v.is_finite()) {
                    min = min.min(v);
                    max = max.max(v);
                }
            }
        }

        if !min.is_finite() || !max.is_finite() {
            return None;
        }
        let pad = if max > min { (max - min) * 0.05 } else { 1.0 };
        Some((min - pad, max + pad))
    }

    /// Render a line chart to in-memory PNG bytes.
    pub fn render_png_bytes(
        title: &str,
        points: &[ChartPoint],
        keys: &[String],
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        let (y_min, y_max) = Self::value_range(points, keys).ok_or(RenderError::Empty)?;
        let labels: Vec<String> = points.iter().map(|p| p.name.clone()).collect();
        let x_max = (points.len().max(2) - 1) as f64;

        let mut buffer = vec![255u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(draw_err)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(title, ("sans-serif", 24))
                .margin(15)
                .x_label_area_size(40)
                .y_label_area_size(60)
                .build_cartesian_2d(0f64..x_max, y_min..y_max)
                .map_err(draw_err)?;

            let label_formatter = |x: &f64| crate::charts::ChartPlotter::label_at(&labels, *x);
            chart
                .configure_mesh()
                .x_labels(labels.len().clamp(2, 12))
                .x_label_formatter(&label_formatter)
                .draw()
                .map_err(draw_err)?;

            for (k, key) in keys.iter().enumerate() {
                let color = Self::series_color(k);
                let series: Vec<(f64, f64)> = points
                    .iter()
                    .enumerate()
                    .filter_map(|(i, p)| p.get(key).filter(|v| v.is_finite()).map(|v| (i as f64, v)))
                    .collect();

                chart
                    .draw_series(LineSeries::new(series, color.stroke_width(2)))
                    .map_err(draw_err)?
                    .label(key.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
            }

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.85))
                .border_style(BLACK)
                .draw()
                .map_err(draw_err)?;

            root.present().map_err(draw_err)?;
        }

        let image = image::RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| RenderError::Draw("pixel buffer size mismatch".to_string()))?;
        let mut bytes: Vec<u8> = Vec::new();
        image.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render and write a PNG file.
    pub fn save_png(
        path: &Path,
        title: &str,
        points: &[ChartPoint],
        keys: &[String],
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        let bytes = Self::render_png_bytes(title, points, keys, width, height)?;
        std::fs::write(path, &bytes).map_err(|source| RenderError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), bytes = bytes.len(), "exported chart");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_ignores_nan_and_pads() {
        let points = vec![
            ChartPoint::new("a").with("v", 0.0),
            ChartPoint::new("b").with("v", f64::NAN),
            ChartPoint::new("c").with("v", 100.0),
        ];
        let keys = vec!["v".to_string()];
        assert_eq!(
            StaticChartRenderer::value_range(&points, &keys),
            Some((-5.0, 105.0))
        );
    }

    #[test]
    fn flat_series_gets_height() {
        let points = vec![ChartPoint::new("a").with("v", 3.0)];
        let keys = vec!["v".to_string()];
        assert_eq!(
            StaticChartRenderer::value_range(&points, &keys),
            Some((2.0, 4.0))
        );
    }

    #[test]
    fn nothing_to_render() {
        let points = vec![ChartPoint::new("a").with("v", f64::NAN)];
        let keys = vec!["v".to_string()];
        assert!(matches!(
            StaticChartRenderer::render_png_bytes("t", &points, &keys, 100, 100),
            Err(RenderError::Empty)
        ));
        assert!(matches!(
            StaticChartRenderer::render_png_bytes("t", &[], &[], 100, 100),
            Err(RenderError::Empty)
        ));
    }
}
