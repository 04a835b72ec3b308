use coal_analyze::{EventStats, ScanPoint, ScanSeries};
use coal_model::{Event, Hadron, Parton, PhiObservable, RATIO_BIN_LABELS};
use coal_render::{
    PhiSeries, RenderError, render_distributions, render_overlay, render_phi_panels,
    render_projections, render_ratio_bars, render_scan,
};

fn sample_event() -> Event {
    let parton = |id: u32, x: f64, y: f64, b: i32| Parton {
        unique_id: id,
        x,
        y,
        z: 0.1 * x,
        px: 0.0,
        py: 0.0,
        pz: 0.0,
        baryon_thirds: b,
    };
    Event {
        id: 3,
        reaction_plane: 0.0,
        partons: vec![
            parton(1, 0.2, 0.1, 1),
            parton(2, -0.3, 0.4, 1),
            parton(3, 0.5, -0.2, 1),
            parton(4, -0.1, -0.4, -1),
        ],
        hadrons: vec![
            Hadron {
                x: 0.1,
                y: 0.1,
                z: 0.0,
                px: 0.0,
                py: 0.0,
                pz: 0.0,
                baryon_number: 1,
                constituent_ids: vec![1, 2, 3],
            },
            Hadron {
                x: -0.2,
                y: 0.0,
                z: 0.1,
                px: 0.0,
                py: 0.0,
                pz: 0.0,
                baryon_number: 0,
                constituent_ids: vec![4, 99],
            },
        ],
    }
}

#[test]
fn event_figures_are_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let event = sample_event();
    let stats = EventStats::compute(&event.partons, &event.hadrons);

    let projections = dir.path().join("projections.svg");
    let distributions = dir.path().join("distributions.svg");
    let ratios = dir.path().join("ratios.svg");
    render_projections(&projections, &event).expect("projections");
    render_distributions(&distributions, &event).expect("distributions");
    render_ratio_bars(&ratios, &stats).expect("ratios");

    for path in [projections, distributions, ratios] {
        let svg = std::fs::read_to_string(&path).expect("read svg");
        assert!(svg.contains("<svg"), "{} is not an svg", path.display());
    }
}

#[test]
fn phi_panels_require_at_least_one_series() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("phi.svg");
    let empty: coal_render::PhiPanels =
        PhiObservable::ALL.into_iter().map(|obs| (obs, Vec::new())).collect();
    match render_phi_panels(&path, &empty, "Normalized") {
        Err(RenderError::EmptyFigure { .. }) => {}
        other => panic!("expected EmptyFigure, got {other:?}"),
    }

    let panels: coal_render::PhiPanels = PhiObservable::ALL
        .into_iter()
        .map(|obs| {
            (
                obs,
                vec![PhiSeries {
                    name: format!("{}_Baryon_Baryon", obs.prefix()),
                    centers: vec![0.5, 1.5, 2.5],
                    values: vec![1.0, 1.2, 0.8],
                }],
            )
        })
        .collect();
    render_phi_panels(&path, &panels, "Normalized").expect("phi figure");
    assert!(std::fs::read_to_string(&path).expect("read").contains("<svg"));
}

#[test]
fn overlay_and_scan_figures_are_written() {
    let dir = tempfile::tempdir().expect("tempdir");

    let overlay = dir.path().join("overlay.svg");
    let series = vec![PhiSeries {
        name: "hCdPhiM_Baryon_Baryon".to_string(),
        centers: vec![0.1, 0.2, 0.3],
        values: vec![1.0, 1.1, 0.9],
    }];
    render_overlay(&overlay, &series, "Scaled Histograms").expect("overlay");

    let scan = dir.path().join("scan.svg");
    let points = vec![
        ScanPoint { r: 0.5, ratios: vec![0.2; 7] },
        ScanPoint { r: 1.5, ratios: vec![0.3; 7] },
    ];
    let series = ScanSeries::from_points(points, 7);
    render_scan(&scan, &series, &RATIO_BIN_LABELS, &coal_analyze::AMPT_REFERENCE)
        .expect("scan");

    for path in [overlay, scan] {
        assert!(std::fs::read_to_string(&path).expect("read").contains("<svg"));
    }
}
