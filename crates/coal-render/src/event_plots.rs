//! Single-event display figures: spatial projections, coordinate
//! distributions, and global yield ratios.

use std::path::Path;

use coal_analyze::{ConstituentLinks, EventStats, PartonIndex, axis_limit, bin_counts};
use coal_model::{Event, Hadron, HadronClass, Parton, PartonClass};
use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use tracing::debug;

use crate::error::{Result, backend};
use crate::style::{ClassStyle, Marker, hadron_style, parton_style};

const FIGURE_SIZE: (u32, u32) = (1200, 1200);
const DISTRIBUTION_BINS: usize = 100;
// Zoom windows of the lower projection panels.
const ZOOM_X: f64 = 1.0;
const ZOOM_Y: f64 = 1.0;
const ZOOM_Z: f64 = 2.0;

/// Which pair of coordinates a panel projects onto.
#[derive(Debug, Clone, Copy)]
enum Projection {
    Xy,
    Zy,
}

impl Projection {
    fn parton(self, p: &Parton) -> (f64, f64) {
        match self {
            Projection::Xy => (p.x, p.y),
            Projection::Zy => (p.z, p.y),
        }
    }

    fn hadron(self, h: &Hadron) -> (f64, f64) {
        match self {
            Projection::Xy => (h.x, h.y),
            Projection::Zy => (h.z, h.y),
        }
    }

    fn labels(self) -> (&'static str, &'static str) {
        match self {
            Projection::Xy => ("X", "Y"),
            Projection::Zy => ("Z", "Y"),
        }
    }
}

/// 2×2 spatial projections: full XY, full ZY, zoomed XY, zoomed ZY.
/// Constituent links are drawn in the hadron's class color, lightened.
pub fn render_projections(path: &Path, event: &Event) -> Result<()> {
    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(backend)?;
    let panels = root.split_evenly((2, 2));

    let (x_limit, y_limit, z_limit) = coordinate_limits(event);
    let specs = [
        (Projection::Xy, x_limit, y_limit, "XY Projection"),
        (Projection::Zy, z_limit, y_limit, "ZY Projection"),
        (Projection::Xy, ZOOM_X, ZOOM_Y, "Zoomed XY"),
        (Projection::Zy, ZOOM_Z, ZOOM_Y, "Zoomed ZY"),
    ];
    for (panel, (projection, x_limit, y_limit, title)) in panels.iter().zip(specs) {
        draw_projection_panel(panel, event, projection, x_limit, y_limit, title)?;
    }

    root.present().map_err(backend)?;
    debug!(path = %path.display(), "wrote projection figure");
    Ok(())
}

fn draw_projection_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    event: &Event,
    projection: Projection,
    x_limit: f64,
    y_limit: f64,
    title: &str,
) -> Result<()> {
    let (x_label, y_label) = projection.labels();
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(-x_limit..x_limit, -y_limit..y_limit)
        .map_err(backend)?;
    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()
        .map_err(backend)?;

    for (style, points) in class_points(event, |p| projection.parton(p), |h| projection.hadron(h)) {
        draw_scatter(&mut chart, &points, style)?;
    }

    // Hadron-to-constituent links: one segment for two resolved
    // constituents, a closed triangle for three.
    let index = PartonIndex::build(&event.partons);
    for hadron in &event.hadrons {
        let outcome = index.resolve(hadron);
        let points: Vec<(f64, f64)> =
            outcome.resolved.iter().map(|p| projection.parton(p)).collect();
        let polyline = ConstituentLinks::from_points(&points).polyline();
        if polyline.is_empty() {
            continue;
        }
        let color = hadron_style(HadronClass::classify(hadron)).color;
        chart
            .draw_series(std::iter::once(PathElement::new(polyline, color.mix(0.3))))
            .map_err(backend)?;
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

type Chart2d<'a, 'b> =
    ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn draw_scatter(chart: &mut Chart2d<'_, '_>, points: &[(f64, f64)], style: ClassStyle) -> Result<()> {
    let color = style.color;
    let size = style.size;
    let annotation = match style.marker {
        Marker::Dot => chart
            .draw_series(points.iter().map(|&(x, y)| Circle::new((x, y), size, color.filled())))
            .map_err(backend)?,
        Marker::Circle => chart
            .draw_series(points.iter().map(|&(x, y)| Circle::new((x, y), size, &color)))
            .map_err(backend)?,
        Marker::TriangleUp => chart
            .draw_series(
                points.iter().map(|&(x, y)| TriangleMarker::new((x, y), size, color.filled())),
            )
            .map_err(backend)?,
        Marker::TriangleDown => chart
            .draw_series(points.iter().map(|&(x, y)| {
                EmptyElement::at((x, y))
                    + Polygon::new(
                        vec![(-size, -size), (size, -size), (0, size)],
                        color.filled(),
                    )
            }))
            .map_err(backend)?,
    };
    annotation
        .label(style.label)
        .legend(move |(x, y)| Circle::new((x + 5, y), 3, color.filled()));
    Ok(())
}

/// 2×2 coordinate distributions: X, Y, Z per class, plus a composition
/// panel.
pub fn render_distributions(path: &Path, event: &Event) -> Result<()> {
    let root = SVGBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE).map_err(backend)?;
    let panels = root.split_evenly((2, 2));

    let (x_limit, y_limit, z_limit) = coordinate_limits(event);
    let axes: [(fn(&Parton) -> f64, fn(&Hadron) -> f64, f64, &str); 3] = [
        (|p| p.x, |h| h.x, x_limit, "X Distribution"),
        (|p| p.y, |h| h.y, y_limit, "Y Distribution"),
        (|p| p.z, |h| h.z, z_limit, "Z Distribution"),
    ];
    for (panel, (parton_coord, hadron_coord, limit, title)) in panels.iter().zip(axes) {
        draw_distribution_panel(panel, event, parton_coord, hadron_coord, limit, title)?;
    }
    draw_composition_panel(&panels[3], event)?;

    root.present().map_err(backend)?;
    debug!(path = %path.display(), "wrote distribution figure");
    Ok(())
}

fn draw_distribution_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    event: &Event,
    parton_coord: fn(&Parton) -> f64,
    hadron_coord: fn(&Hadron) -> f64,
    limit: f64,
    title: &str,
) -> Result<()> {
    let class_series: Vec<(ClassStyle, Vec<(f64, u64)>)> =
        class_points(event, |p| (parton_coord(p), 0.0), |h| (hadron_coord(h), 0.0))
            .into_iter()
            .map(|(style, points)| {
                let values: Vec<f64> = points.iter().map(|&(v, _)| v).collect();
                (style, bin_counts(&values, DISTRIBUTION_BINS, -limit, limit))
            })
            .collect();
    let peak = class_series
        .iter()
        .flat_map(|(_, bins)| bins.iter().map(|&(_, count)| count))
        .max()
        .unwrap_or(0) as f64;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(-limit..limit, 0.0..peak.max(1.0) * 1.1)
        .map_err(backend)?;
    chart.configure_mesh().y_desc("Counts").draw().map_err(backend)?;

    for (style, bins) in class_series {
        let color = style.color;
        chart
            .draw_series(LineSeries::new(
                bins.iter().map(|&(center, count)| (center, count as f64)),
                &color,
            ))
            .map_err(backend)?
            .label(style.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 15, y)], color));
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

fn draw_composition_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    event: &Event,
) -> Result<()> {
    let stats = EventStats::compute(&event.partons, &event.hadrons);
    let lines = [
        format!("Event {}", event.id),
        format!("Quarks: {}  Anti-quarks: {}", stats.quarks, stats.antiquarks),
        format!(
            "Mesons: {}  Baryons: {}  Anti-baryons: {}",
            stats.mesons, stats.baryons, stats.antibaryons
        ),
        format!("Net baryon number before: {:.2}", stats.net_baryon_before()),
        format!("Net baryon number after: {}", stats.net_baryon_after()),
        format!(
            "Constituent refs: {} ({} missing)",
            stats.constituent_refs, stats.missing_constituent_refs
        ),
    ];
    for (i, line) in lines.iter().enumerate() {
        area.draw(&Text::new(
            line.clone(),
            (40, 40 + 28 * i as i32),
            ("sans-serif", 18),
        ))
        .map_err(backend)?;
    }
    Ok(())
}

/// Bar chart of the event's global yield ratios with value labels.
pub fn render_ratio_bars(path: &Path, stats: &EventStats) -> Result<()> {
    let root = SVGBackend::new(path, (600, 400)).into_drawing_area();
    root.fill(&WHITE).map_err(backend)?;

    let bars = [
        ("(Anti)Baryon/Meson", stats.baryon_to_meson()),
        ("Baryon/Anti-baryon", stats.baryon_to_antibaryon()),
    ];
    let top = bars.iter().map(|&(_, v)| v).fold(0.0f64, f64::max).max(1.0) * 1.3;

    let mut chart = ChartBuilder::on(&root)
        .caption("Global Ratios", ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(30)
        .y_label_area_size(45)
        .build_cartesian_2d(0.0..bars.len() as f64, 0.0..top)
        .map_err(backend)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc("Value")
        .draw()
        .map_err(backend)?;

    for (i, (label, value)) in bars.iter().enumerate() {
        let x0 = i as f64 + 0.2;
        let x1 = i as f64 + 0.8;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x0, 0.0), (x1, *value)],
                RGBColor(0x80, 0x80, 0x80).mix(0.5).filled(),
            )))
            .map_err(backend)?;
        chart
            .draw_series(std::iter::once(Text::new(
                format!("{value:.2}"),
                (i as f64 + 0.5, value * 1.03),
                ("sans-serif", 16),
            )))
            .map_err(backend)?;
        chart
            .draw_series(std::iter::once(Text::new(
                (*label).to_string(),
                (i as f64 + 0.25, top * 0.02),
                ("sans-serif", 14),
            )))
            .map_err(backend)?;
    }

    root.present().map_err(backend)?;
    debug!(path = %path.display(), "wrote ratio figure");
    Ok(())
}

/// Symmetric axis limits for the event's X, Y, and Z coordinates over
/// partons and hadrons together.
fn coordinate_limits(event: &Event) -> (f64, f64, f64) {
    let collect = |parton: fn(&Parton) -> f64, hadron: fn(&Hadron) -> f64| -> Vec<f64> {
        event
            .partons
            .iter()
            .map(parton)
            .chain(event.hadrons.iter().map(hadron))
            .collect()
    };
    let xs = collect(|p| p.x, |h| h.x);
    let ys = collect(|p| p.y, |h| h.y);
    let zs = collect(|p| p.z, |h| h.z);
    (axis_limit(&xs), axis_limit(&ys), axis_limit(&zs))
}

/// Scatter point lists per class, partons first, then hadrons, in
/// legend order.
fn class_points(
    event: &Event,
    parton_proj: impl Fn(&Parton) -> (f64, f64),
    hadron_proj: impl Fn(&Hadron) -> (f64, f64),
) -> Vec<(ClassStyle, Vec<(f64, f64)>)> {
    let mut groups: Vec<(ClassStyle, Vec<(f64, f64)>)> = Vec::with_capacity(5);
    for class in [PartonClass::Quark, PartonClass::AntiQuark] {
        let points = event
            .partons
            .iter()
            .filter(|p| PartonClass::classify(p) == class)
            .map(&parton_proj)
            .collect();
        groups.push((parton_style(class), points));
    }
    for class in HadronClass::ALL {
        let points = event
            .hadrons
            .iter()
            .filter(|h| HadronClass::classify(h) == class)
            .map(&hadron_proj)
            .collect();
        groups.push((hadron_style(class), points));
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_windows_match_display_convention() {
        // Lower panels: ±1.0 in X and Y, ±2.0 in Z.
        assert_eq!(ZOOM_X, 1.0);
        assert_eq!(ZOOM_Y, 1.0);
        assert_eq!(ZOOM_Z, 2.0);
    }

    #[test]
    fn coordinate_limits_scale_the_extreme_over_both_record_kinds() {
        let event = Event {
            id: 1,
            reaction_plane: 0.0,
            partons: vec![Parton {
                unique_id: 1,
                x: 2.0,
                y: -1.0,
                z: 0.5,
                px: 0.0,
                py: 0.0,
                pz: 0.0,
                baryon_thirds: 1,
            }],
            hadrons: vec![Hadron {
                x: -0.5,
                y: 3.0,
                z: -4.0,
                px: 0.0,
                py: 0.0,
                pz: 0.0,
                baryon_number: 0,
                constituent_ids: vec![],
            }],
        };
        // 1.5 × the largest |coordinate| per axis, hadrons included.
        assert_eq!(coordinate_limits(&event), (3.0, 4.5, 6.0));

        let empty = Event::default();
        assert_eq!(coordinate_limits(&empty), (1.0, 1.0, 1.0));
    }
}
