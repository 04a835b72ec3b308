use coal_analyze::{EventStats, RunTotals, ScanPoint, ScanSeries, yield_ratio};
use coal_model::{Hadron, Parton};
use proptest::prelude::*;

fn parton(id: u32, baryon_thirds: i32) -> Parton {
    Parton {
        unique_id: id,
        x: 0.0,
        y: 0.0,
        z: 0.0,
        px: 0.0,
        py: 0.0,
        pz: 0.0,
        baryon_thirds,
    }
}

fn hadron(baryon_number: i32, constituent_ids: Vec<u32>) -> Hadron {
    Hadron {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        px: 0.0,
        py: 0.0,
        pz: 0.0,
        baryon_number,
        constituent_ids,
    }
}

#[test]
fn yield_ratio_is_guarded() {
    assert_eq!(yield_ratio(0.0, 0.0), 0.0);
    assert_eq!(yield_ratio(5.0, 0.0), 0.0);
    assert_eq!(yield_ratio(4.0, 2.0), 2.0);
}

#[test]
fn empty_event_yields_all_zero_stats() {
    let stats = EventStats::compute(&[], &[]);
    assert_eq!(stats, EventStats::default());
    assert_eq!(stats.net_baryon_before(), 0.0);
    assert_eq!(stats.net_baryon_after(), 0);
    assert_eq!(stats.baryon_to_meson(), 0.0);
    assert_eq!(stats.baryon_to_antibaryon(), 0.0);
}

#[test]
fn counts_and_net_baryon_numbers() {
    // Three quarks, no antiquarks; one baryon, two mesons.
    let partons = vec![parton(1, 1), parton(2, 1), parton(3, 1)];
    let hadrons = vec![
        hadron(1, vec![1, 2, 3]),
        hadron(0, vec![]),
        hadron(0, vec![]),
    ];
    let stats = EventStats::compute(&partons, &hadrons);
    assert_eq!(stats.quarks, 3);
    assert_eq!(stats.antiquarks, 0);
    assert_eq!(stats.baryons, 1);
    assert_eq!(stats.antibaryons, 0);
    assert_eq!(stats.mesons, 2);
    assert_eq!(stats.net_baryon_before(), 1.0);
    assert_eq!(stats.net_baryon_after(), 1);
}

#[test]
fn missing_references_are_counted_not_fatal() {
    let partons = vec![parton(1, 1), parton(2, -1)];
    let hadrons = vec![hadron(0, vec![1, 2]), hadron(0, vec![7, 8, 1])];
    let stats = EventStats::compute(&partons, &hadrons);
    assert_eq!(stats.constituent_refs, 5);
    assert_eq!(stats.missing_constituent_refs, 2);
}

#[test]
fn run_totals_accumulate_and_report_failures() {
    let mut totals = RunTotals::default();
    let stats = EventStats::compute(&[parton(1, 1)], &[hadron(0, vec![])]);
    totals.add_event(&stats);
    totals.add_event(&stats);
    totals.add_failure();
    assert_eq!(totals.events_processed, 2);
    assert_eq!(totals.events_failed, 1);
    assert_eq!(totals.quarks, 2);
    assert_eq!(totals.mesons, 2);
    assert_eq!(totals.as_event_stats().quarks, 2);
}

#[test]
fn stats_and_scan_series_serialize_as_reports() {
    let stats = EventStats::compute(&[parton(1, 1), parton(2, -1)], &[hadron(0, vec![1, 2])]);
    let json = serde_json::to_string(&stats).expect("serialize stats");
    assert!(json.contains("\"quarks\":1"));
    let back: EventStats = serde_json::from_str(&json).expect("deserialize stats");
    assert_eq!(back, stats);

    let series = ScanSeries::from_points(
        vec![ScanPoint { r: 0.5, ratios: vec![0.2, 0.4] }],
        2,
    );
    let json = serde_json::to_string(&series).expect("serialize series");
    let back: ScanSeries = serde_json::from_str(&json).expect("deserialize series");
    assert_eq!(back, series);
}

proptest! {
    /// Merging partial totals is order-independent, so the accumulator
    /// can be split across events or shards safely.
    #[test]
    fn run_totals_merge_commutes(
        quarks_a in 0u64..1000,
        quarks_b in 0u64..1000,
        failures_a in 0u64..10,
        failures_b in 0u64..10,
    ) {
        let mut a = RunTotals::default();
        a.quarks = quarks_a;
        a.events_failed = failures_a;
        let mut b = RunTotals::default();
        b.quarks = quarks_b;
        b.events_failed = failures_b;
        prop_assert_eq!(a.merge(b), b.merge(a));
    }

    /// Class counts partition the hadron list: every hadron lands in
    /// exactly one bucket.
    #[test]
    fn hadron_counts_partition(baryon_numbers in proptest::collection::vec(-3i32..=3, 0..50)) {
        let hadrons: Vec<Hadron> =
            baryon_numbers.iter().map(|&b| hadron(b, Vec::new())).collect();
        let stats = EventStats::compute(&[], &hadrons);
        prop_assert_eq!(
            stats.baryons + stats.antibaryons + stats.mesons,
            hadrons.len() as u64
        );
    }
}
