use crate::error::{PlotError, Result};
use crate::table::LongRecord;

use plotters::prelude::*;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (640, 480);
const ROUTE_FIGURE_SIZE: (u32, u32) = (450, 450);

/// Groups long-format records into one point series per variable, preserving
/// first-appearance order so chart legends match the source column order.
pub fn series_by_variable(records: &[LongRecord]) -> Vec<(String, Vec<(f64, f64)>)> {
    let mut series: Vec<(String, Vec<(f64, f64)>)> = Vec::new();
    for rec in records {
        match series.iter_mut().find(|(name, _)| *name == rec.variable) {
            Some((_, points)) => points.push((rec.map, rec.value)),
            None => series.push((rec.variable.clone(), vec![(rec.map, rec.value)])),
        }
    }
    series
}

/// Renders one line chart: x = map, y = value, one line per variable.
///
/// The file at `out_path` is overwritten unconditionally.
pub fn render_line_chart(records: &[LongRecord], title: &str, out_path: &Path) -> Result<()> {
    let series = series_by_variable(records);
    if series.is_empty() {
        return Err(PlotError::Render(format!("no data to plot for '{title}'")));
    }

    let (x_range, y_range) = axis_ranges(records.iter().map(|r| (r.map, r.value)));

    let root = BitMapBackend::new(out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(backend_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(x_range, y_range)
        .map_err(backend_error)?;

    chart
        .configure_mesh()
        .x_desc("map")
        .y_desc("value")
        .draw()
        .map_err(backend_error)?;

    for (i, (name, points)) in series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))
            .map_err(backend_error)?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(backend_error)?;

    root.present().map_err(backend_error)?;
    Ok(())
}

/// Renders one closed route boundary on a square figure, titled with the
/// route name.
pub fn render_route(boundary: &[(f64, f64)], title: &str, out_path: &Path) -> Result<()> {
    if boundary.is_empty() {
        return Err(PlotError::Render(format!("no points to plot for '{title}'")));
    }

    let (x_range, y_range) = axis_ranges(boundary.iter().copied());

    let root = BitMapBackend::new(out_path, ROUTE_FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(backend_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(x_range, y_range)
        .map_err(backend_error)?;

    chart.configure_mesh().draw().map_err(backend_error)?;

    chart
        .draw_series(LineSeries::new(boundary.iter().copied(), &BLUE))
        .map_err(backend_error)?;

    root.present().map_err(backend_error)?;
    Ok(())
}

/// Min/max of both axes, padded by 5% of the span (unit pad on a zero span).
fn axis_ranges(
    points: impl Iterator<Item = (f64, f64)>,
) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for (x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    (padded(x_min, x_max), padded(y_min, y_max))
}

fn padded(min: f64, max: f64) -> std::ops::Range<f64> {
    let span = max - min;
    let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
    (min - pad)..(max + pad)
}

fn backend_error<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Render(e.to_string())
}
