//! End-to-end tests: write fixture files with the store crate, run the
//! command implementations against them, and check the artifacts.

use std::path::{Path, PathBuf};

use coal_cli::cli::{EventArgs, PhiArgs, ScaledArgs, ScanArgs, StatsArgs};
use coal_cli::commands::{run_event, run_phi, run_scaled, run_scan, run_stats};
use coal_model::{Event, Hadron, Parton};
use coal_store::{Histogram, write_event_file, write_histogram_file};

fn parton(id: u32, x: f64, baryon_thirds: i32) -> Parton {
    Parton {
        unique_id: id,
        x,
        y: -x,
        z: 0.5 * x,
        px: 0.0,
        py: 0.0,
        pz: 0.0,
        baryon_thirds,
    }
}

fn sample_events() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            reaction_plane: 0.0,
            partons: vec![parton(1, 0.2, 1), parton(2, -0.4, 1), parton(3, 0.6, 1)],
            hadrons: vec![Hadron {
                x: 0.1,
                y: 0.1,
                z: 0.0,
                px: 0.0,
                py: 0.0,
                pz: 0.0,
                baryon_number: 1,
                constituent_ids: vec![1, 2, 3],
            }],
        },
        Event {
            id: 2,
            reaction_plane: 0.1,
            partons: vec![parton(4, 0.3, 1), parton(5, -0.2, -1)],
            hadrons: vec![Hadron {
                x: 0.0,
                y: 0.2,
                z: 0.1,
                px: 0.0,
                py: 0.0,
                pz: 0.0,
                baryon_number: 0,
                constituent_ids: vec![4, 5],
            }],
        },
    ]
}

fn phi_histogram(name: &str, scale: f64) -> Histogram {
    let centers: Vec<f64> = (0..20).map(|i| 0.05 + 0.1 * f64::from(i)).collect();
    let contents: Vec<f64> = (0..20).map(|i| scale * (1.0 + f64::from(i % 5))).collect();
    Histogram { name: name.to_string(), centers, contents }
}

fn write_phi_file(path: &Path, mixed: bool) {
    let suffix = if mixed { "_MixEvt" } else { "" };
    let histograms: Vec<Histogram> = [
        "hCdPhiP_Baryon_Baryon",
        "hCdPhiM_Baryon_AntiBaryon",
        "hSdPhiP_Meson_Meson",
        "hSdPhiM_Baryon_Meson",
    ]
    .iter()
    .map(|base| phi_histogram(&format!("{base}{suffix}"), if mixed { 2.0 } else { 1.0 }))
    .collect();
    write_histogram_file(path, &histograms).expect("write histogram file");
}

#[test]
fn event_command_writes_figures_and_stats() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("events.cwe");
    write_event_file(&input, &sample_events()).expect("write events");

    let args = EventArgs {
        input,
        event_index: 0,
        output_dir: dir.path().join("figures"),
    };
    let report = run_event(&args).expect("run event");
    assert_eq!(report.event_id, 1);
    assert_eq!(report.stats.quarks, 3);
    assert_eq!(report.stats.baryons, 1);
    for path in &report.figures {
        assert!(path.exists(), "{} missing", path.display());
    }
    let json = std::fs::read_to_string(dir.path().join("figures/event_00000_stats.json"))
        .expect("read stats json");
    assert!(json.contains("\"quarks\": 3"));
}

#[test]
fn event_command_rejects_out_of_range_index() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("events.cwe");
    write_event_file(&input, &sample_events()).expect("write events");

    let args = EventArgs {
        input,
        event_index: 9,
        output_dir: dir.path().to_path_buf(),
    };
    assert!(run_event(&args).is_err());
}

#[test]
fn stats_command_aggregates_all_events() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("events.cwe");
    write_event_file(&input, &sample_events()).expect("write events");

    let report = run_stats(&StatsArgs { input }).expect("run stats");
    assert_eq!(report.totals.events_processed, 2);
    assert_eq!(report.totals.events_failed, 0);
    assert_eq!(report.totals.quarks, 4);
    assert_eq!(report.totals.antiquarks, 1);
    assert_eq!(report.totals.baryons, 1);
    assert_eq!(report.totals.mesons, 1);
    assert_eq!(report.totals.missing_constituent_refs, 0);
}

#[test]
fn phi_command_renders_each_mode() {
    let dir = tempfile::tempdir().expect("tempdir");
    let single = dir.path().join("cve_single.cwh");
    let mix = dir.path().join("cve_mix.cwh");
    write_phi_file(&single, false);
    write_phi_file(&mix, true);

    let out = dir.path().join("out");
    let figures = run_phi(&PhiArgs {
        single: Some(single.clone()),
        mix: None,
        output_dir: out.clone(),
    })
    .expect("single mode");
    assert_eq!(figures, vec![out.join("cve_phi_single.svg")]);

    let figures = run_phi(&PhiArgs {
        single: None,
        mix: Some(mix.clone()),
        output_dir: out.clone(),
    })
    .expect("mix mode");
    assert_eq!(figures, vec![out.join("cve_phi_mix.svg")]);

    let figures = run_phi(&PhiArgs {
        single: Some(single),
        mix: Some(mix),
        output_dir: out.clone(),
    })
    .expect("ratio mode");
    assert_eq!(figures, vec![out.join("cve_phi_ratio.svg")]);

    for name in ["cve_phi_single.svg", "cve_phi_mix.svg", "cve_phi_ratio.svg"] {
        let svg = std::fs::read_to_string(out.join(name)).expect("read svg");
        assert!(svg.contains("<svg"), "{name} is not an svg");
    }
}

#[test]
fn phi_command_without_inputs_is_a_no_op() {
    let dir = tempfile::tempdir().expect("tempdir");
    let figures = run_phi(&PhiArgs {
        single: None,
        mix: None,
        output_dir: dir.path().to_path_buf(),
    })
    .expect("no-op");
    assert!(figures.is_empty());
}

#[test]
fn scaled_command_skips_missing_names() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("cve.cwh");
    write_histogram_file(
        &input,
        &[
            phi_histogram("hCdPhiM_Baryon_Baryon", 1.0),
            phi_histogram("hCdPhiM_Baryon_AntiBaryon", 1.5),
        ],
    )
    .expect("write histograms");

    let path = run_scaled(&ScaledArgs {
        input,
        names: vec![
            "hCdPhiM_Baryon_Baryon".to_string(),
            "hCdPhiM_Baryon_AntiBaryon".to_string(),
            "hCdPhiM_AntiBaryon_AntiBaryon".to_string(),
        ],
        output_dir: dir.path().to_path_buf(),
    })
    .expect("run scaled");
    assert!(std::fs::read_to_string(path).expect("read svg").contains("<svg"));
}

fn scan_args(dir: PathBuf) -> ScanArgs {
    ScanArgs {
        process: false,
        analyze: true,
        exe: None,
        input: None,
        r_values: vec![0.5, 1.5],
        events: 10,
        dir,
    }
}

#[test]
fn scan_analyze_reads_qa_files_and_renders() {
    let dir = tempfile::tempdir().expect("tempdir");
    for (r, scale) in [("0.50", 0.2), ("1.50", 0.3)] {
        let histogram = Histogram {
            name: "hRatio".to_string(),
            centers: (0..7).map(|i| f64::from(i) + 0.5).collect(),
            contents: vec![scale; 7],
        };
        let path = dir.path().join(format!("qa_KDTreeGlobal_r{r}.cwh"));
        write_histogram_file(&path, &[histogram]).expect("write qa file");
    }
    // Files the discovery pattern must ignore.
    std::fs::write(dir.path().join("qa_notes_r1.txt"), b"ignored").expect("write");
    std::fs::write(dir.path().join("cve_KDTreeGlobal_r0.50.cwh"), b"ignored").expect("write");

    let path = run_scan(&scan_args(dir.path().to_path_buf()))
        .expect("run scan")
        .expect("figure produced");
    assert_eq!(path, dir.path().join("ratios_vs_r.svg"));
    assert!(std::fs::read_to_string(path).expect("read svg").contains("<svg"));
}

#[test]
fn scan_analyze_with_no_qa_files_produces_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let outcome = run_scan(&scan_args(dir.path().to_path_buf())).expect("run scan");
    assert!(outcome.is_none());
}

#[test]
fn scan_process_fails_on_nonzero_exit() {
    let dir = tempfile::tempdir().expect("tempdir");
    let args = ScanArgs {
        process: true,
        analyze: false,
        exe: Some(PathBuf::from("/bin/false")),
        input: Some(dir.path().join("events.cwe")),
        r_values: vec![0.5],
        events: 1,
        dir: dir.path().to_path_buf(),
    };
    assert!(run_scan(&args).is_err());
}
