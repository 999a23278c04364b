//! PNG rendering of planned charts with [`plotters`].
//!
//! Histograms are 800x500 and the heatmap 1000x800, drawn through the
//! bitmap backend so no window system is needed. Text goes through the
//! `ttf` font feature.

use std::fmt::Display;
use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::histogram::Histogram;
use super::plan::Chart;
use crate::error::{AutolysisError, Result};

const HISTOGRAM_SIZE: (u32, u32) = (800, 500);
const HEATMAP_SIZE: (u32, u32) = (1000, 800);
const COLORBAR_WIDTH: u32 = 120;

const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);
const COOL: (f64, f64, f64) = (59.0, 76.0, 192.0);
const NEUTRAL: (f64, f64, f64) = (221.0, 221.0, 221.0);
const WARM: (f64, f64, f64) = (180.0, 4.0, 38.0);

/// Draws a chart to an image file.
pub trait ChartRenderer {
    /// Render `chart` to `path`, replacing any existing file.
    fn render(&self, chart: &Chart, path: &Path) -> Result<()>;
}

impl<T: ChartRenderer + ?Sized> ChartRenderer for std::rc::Rc<T> {
    fn render(&self, chart: &Chart, path: &Path) -> Result<()> {
        (**self).render(chart, path)
    }
}

/// Renderer producing PNG files with the plotters bitmap backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlottersRenderer;

impl PlottersRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render(&self, chart: &Chart, path: &Path) -> Result<()> {
        match chart {
            Chart::Histogram { column, histogram } => draw_histogram(column, histogram, path),
            Chart::CorrelationHeatmap { columns, matrix } => draw_heatmap(columns, matrix, path),
        }
    }
}

fn render_error(path: &Path, e: impl Display) -> AutolysisError {
    AutolysisError::Render {
        file: path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        message: e.to_string(),
    }
}

/// Map a correlation in [-1, 1] onto a blue-grey-red diverging scale.
pub fn coolwarm(value: f64) -> RGBColor {
    if !value.is_finite() {
        return WHITE;
    }
    let t = value.clamp(-1.0, 1.0);
    let (from, to, f) = if t < 0.0 {
        (COOL, NEUTRAL, t + 1.0)
    } else {
        (NEUTRAL, WARM, t)
    };
    let lerp = |a: f64, b: f64| (a + (b - a) * f).round() as u8;
    RGBColor(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

/// Cell annotation for a correlation value.
pub fn annotation(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        "nan".to_string()
    }
}

fn draw_histogram(column: &str, histogram: &Histogram, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, HISTOGRAM_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(path, e))?;

    let peak = histogram.counts.iter().copied().max().unwrap_or(0).max(1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Distribution of {}", column), ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(histogram.min..histogram.max, 0f64..peak * 1.05)
        .map_err(|e| render_error(path, e))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(column)
        .y_desc("Frequency")
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(|e| render_error(path, e))?;

    chart
        .draw_series(histogram.bins().map(|(lower, upper, count)| {
            Rectangle::new([(lower, 0.0), (upper, count as f64)], BAR_COLOR.filled())
        }))
        .map_err(|e| render_error(path, e))?;

    root.present().map_err(|e| render_error(path, e))?;
    Ok(())
}

fn draw_heatmap(columns: &[String], matrix: &[Vec<f64>], path: &Path) -> Result<()> {
    let n = columns.len();
    let root = BitMapBackend::new(path, HEATMAP_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(path, e))?;

    let (main, legend) = root.split_horizontally((HEATMAP_SIZE.0 - COLORBAR_WIDTH) as i32);

    let mut chart = ChartBuilder::on(&main)
        .caption("Correlation Heatmap", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(140)
        .build_cartesian_2d(0f64..n as f64, 0f64..n as f64)
        .map_err(|e| render_error(path, e))?;

    // Row 0 is drawn at the top
    let cells: Vec<(f64, f64, f64)> = (0..n)
        .flat_map(|i| (0..n).map(move |j| (i, j)))
        .map(|(i, j)| (j as f64, (n - 1 - i) as f64, matrix[i][j]))
        .collect();

    chart
        .draw_series(cells.iter().map(|&(x, y, r)| {
            Rectangle::new([(x, y), (x + 1.0, y + 1.0)], coolwarm(r).filled())
        }))
        .map_err(|e| render_error(path, e))?;

    let centered = Pos::new(HPos::Center, VPos::Center);
    let font_size = if n > 8 { 12 } else { 18 };
    chart
        .draw_series(cells.iter().map(|&(x, y, r)| {
            let font = ("sans-serif", font_size).into_font();
            let style = if r.is_finite() && r.abs() > 0.6 {
                font.color(&WHITE)
            } else {
                font.color(&BLACK)
            };
            let style = style.pos(centered);
            Text::new(annotation(r), (x + 0.5, y + 0.5), style)
        }))
        .map_err(|e| render_error(path, e))?;

    // Column names along both axes, in pixel space outside the plot area
    let (x_px, y_px) = chart.plotting_area().get_pixel_range();
    let cell_w = (x_px.end - x_px.start) as f64 / n as f64;
    let cell_h = (y_px.end - y_px.start) as f64 / n as f64;
    let label_font = ("sans-serif", 14).into_font().color(&BLACK);

    for (k, name) in columns.iter().enumerate() {
        let label = short_label(name);
        let cx = x_px.start + (cell_w * (k as f64 + 0.5)) as i32;
        let cy = y_px.start + (cell_h * (k as f64 + 0.5)) as i32;

        root.draw(&Text::new(
            label.clone(),
            (cx, y_px.end + 8),
            label_font.pos(Pos::new(HPos::Center, VPos::Top)),
        ))
        .map_err(|e| render_error(path, e))?;
        root.draw(&Text::new(
            label,
            (x_px.start - 8, cy),
            label_font.pos(Pos::new(HPos::Right, VPos::Center)),
        ))
        .map_err(|e| render_error(path, e))?;
    }

    draw_colorbar(&legend, y_px.start, y_px.end).map_err(|e| render_error(path, e))?;

    root.present().map_err(|e| render_error(path, e))?;
    Ok(())
}

fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    top: i32,
    bottom: i32,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    const STEPS: i32 = 100;
    let height = (bottom - top).max(STEPS);
    let (left, right) = (20, 45);

    for k in 0..STEPS {
        let value = 1.0 - 2.0 * k as f64 / (STEPS - 1) as f64;
        let y0 = top + height * k / STEPS;
        let y1 = top + height * (k + 1) / STEPS;
        area.draw(&Rectangle::new([(left, y0), (right, y1)], coolwarm(value).filled()))?;
    }
    area.draw(&Rectangle::new([(left, top), (right, top + height)], BLACK.stroke_width(1)))?;

    let font = ("sans-serif", 13).into_font().color(&BLACK).pos(Pos::new(HPos::Left, VPos::Center));
    for tick in [1.0, 0.5, 0.0, -0.5, -1.0] {
        let y = top + ((1.0 - tick) / 2.0 * height as f64) as i32;
        area.draw(&Text::new(format!("{:.1}", tick), (right + 6, y), font.clone()))?;
    }
    Ok(())
}

fn short_label(name: &str) -> String {
    const MAX: usize = 16;
    if name.chars().count() <= MAX {
        name.to_string()
    } else {
        let head: String = name.chars().take(MAX - 1).collect();
        format!("{}…", head)
    }
}
