//! Ratio-vs-parameter figure for baryon-preference scans.

use std::path::Path;

use coal_analyze::ScanSeries;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::error::{RenderError, Result, backend};

// Panel split of the seven ratio bins: baryon/proton ratios left,
// lambda and light-meson ratios right.
const LEFT_RATIOS: [usize; 4] = [0, 1, 2, 3];
const RIGHT_RATIOS: [usize; 3] = [4, 5, 6];

/// Two-panel ratio-vs-r figure with dashed-style reference guides.
///
/// `labels` and `reference` are indexed like the scan series; both are
/// expected to cover all seven ratio bins.
pub fn render_scan(
    path: &Path,
    series: &ScanSeries,
    labels: &[&str],
    reference: &[f64],
) -> Result<()> {
    if series.is_empty() {
        return Err(RenderError::EmptyFigure { path: path.to_path_buf() });
    }
    let root = SVGBackend::new(path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(backend)?;
    let areas = root.split_evenly((1, 2));

    draw_scan_panel(
        &areas[0],
        series,
        labels,
        reference,
        &LEFT_RATIOS,
        "Ratios: Baryons and Protons",
    )?;
    draw_scan_panel(
        &areas[1],
        series,
        labels,
        reference,
        &RIGHT_RATIOS,
        "Ratios: Lambda and Mesons",
    )?;

    root.present().map_err(backend)?;
    debug!(path = %path.display(), "wrote scan figure");
    Ok(())
}

fn draw_scan_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    series: &ScanSeries,
    labels: &[&str],
    reference: &[f64],
    ratios: &[usize],
    title: &str,
) -> Result<()> {
    let r_lo = series.r_values.first().copied().unwrap_or(0.0);
    let r_hi = series.r_values.last().copied().unwrap_or(1.0).max(r_lo + f64::EPSILON);
    let y_hi = ratios
        .iter()
        .filter_map(|&ratio| series.series.get(ratio))
        .flat_map(|values| values.iter().copied())
        .chain(ratios.iter().filter_map(|&ratio| reference.get(ratio).copied()))
        .fold(0.0f64, f64::max);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(r_lo..r_hi, 0.0..y_hi.max(1.0) * 1.15)
        .map_err(backend)?;
    chart
        .configure_mesh()
        .x_desc("Baryon Preference r")
        .y_desc("Hadron Yield Ratios")
        .draw()
        .map_err(backend)?;

    for &ratio in ratios {
        let Some(values) = series.series.get(ratio) else { continue };
        let color = Palette99::pick(ratio).to_rgba();
        chart
            .draw_series(LineSeries::new(
                series.r_values.iter().copied().zip(values.iter().copied()),
                &color,
            ))
            .map_err(backend)?
            .label(labels.get(ratio).copied().unwrap_or(""))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 15, y)], color));
        chart
            .draw_series(
                series
                    .r_values
                    .iter()
                    .copied()
                    .zip(values.iter().copied())
                    .map(|point| Circle::new(point, 3, color.filled())),
            )
            .map_err(backend)?;

        // Reference guide line across the scanned range.
        if let Some(&guide) = reference.get(ratio) {
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(r_lo, guide), (r_hi, guide)],
                    color.mix(0.5),
                )))
                .map_err(backend)?;
            chart
                .draw_series(std::iter::once(Text::new(
                    format!("{guide:.3}"),
                    (r_hi, guide),
                    ("sans-serif", 12),
                )))
                .map_err(backend)?;
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 12))
        .draw()
        .map_err(backend)?;
    Ok(())
}
