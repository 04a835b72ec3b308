//! φ-distribution comparison figures: four panels, one per angular
//! observable, each overlaying the matching histogram series.

use std::path::Path;

use coal_model::PhiObservable;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::error::{RenderError, Result, backend};

/// One curve on a φ panel: bin centers against (normalized or ratio)
/// values.
#[derive(Debug, Clone, PartialEq)]
pub struct PhiSeries {
    pub name: String,
    pub centers: Vec<f64>,
    pub values: Vec<f64>,
}

/// Series grouped under the observable whose panel they belong to.
pub type PhiPanels = Vec<(PhiObservable, Vec<PhiSeries>)>;

/// Render the 2×2 φ figure. `y_desc` distinguishes the normalized
/// distribution figures from the single/mix ratio figure.
pub fn render_phi_panels(path: &Path, panels: &PhiPanels, y_desc: &str) -> Result<()> {
    if panels.iter().all(|(_, series)| series.is_empty()) {
        return Err(RenderError::EmptyFigure { path: path.to_path_buf() });
    }
    let root = SVGBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE).map_err(backend)?;
    let areas = root.split_evenly((2, 2));

    for (area, (observable, series)) in areas.iter().zip(panels) {
        draw_phi_panel(area, *observable, series, y_desc)?;
    }

    root.present().map_err(backend)?;
    debug!(path = %path.display(), "wrote phi figure");
    Ok(())
}

/// Single-panel overlay of selected histograms, used for the scaled
/// Δφ comparison figure.
pub fn render_overlay(path: &Path, series: &[PhiSeries], title: &str) -> Result<()> {
    if series.is_empty() {
        return Err(RenderError::EmptyFigure { path: path.to_path_buf() });
    }
    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(backend)?;

    let (x_lo, x_hi) = series
        .iter()
        .flat_map(|s| s.centers.iter().copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let y_hi = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0f64, f64::max);
    let (x_lo, x_hi) = if x_lo.is_finite() && x_lo < x_hi { (x_lo, x_hi) } else { (0.0, 1.0) };

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(x_lo..x_hi, 0.0..y_hi.max(1.0) * 1.15)
        .map_err(backend)?;
    chart
        .configure_mesh()
        .x_desc("Δφ")
        .y_desc("Normalized Counts × Nbins")
        .draw()
        .map_err(backend)?;

    for (i, s) in series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(LineSeries::new(
                s.centers.iter().copied().zip(s.values.iter().copied()),
                color.stroke_width(2),
            ))
            .map_err(backend)?
            .label(&s.name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 15, y)], color));
    }
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 12))
        .draw()
        .map_err(backend)?;

    root.present().map_err(backend)?;
    debug!(path = %path.display(), "wrote overlay figure");
    Ok(())
}

fn draw_phi_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    observable: PhiObservable,
    series: &[PhiSeries],
    y_desc: &str,
) -> Result<()> {
    let (x_lo, x_hi) = series
        .iter()
        .flat_map(|s| s.centers.iter().copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let y_hi = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0f64, f64::max);
    let (x_lo, x_hi) = if x_lo.is_finite() && x_lo < x_hi { (x_lo, x_hi) } else { (0.0, 1.0) };

    let mut chart = ChartBuilder::on(area)
        .caption(observable.title(), ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(x_lo..x_hi, 0.0..y_hi.max(1.0) * 1.15)
        .map_err(backend)?;
    chart
        .configure_mesh()
        .x_desc("φ")
        .y_desc(y_desc)
        .draw()
        .map_err(backend)?;

    for (i, s) in series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(LineSeries::new(
                s.centers.iter().copied().zip(s.values.iter().copied()),
                &color,
            ))
            .map_err(backend)?
            .label(&s.name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 15, y)], color));
        chart
            .draw_series(
                s.centers
                    .iter()
                    .copied()
                    .zip(s.values.iter().copied())
                    .map(|point| Circle::new(point, 2, color.filled())),
            )
            .map_err(backend)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 11))
        .draw()
        .map_err(backend)?;
    Ok(())
}
