//! Subcommand implementations.
//!
//! Error policy follows the toolkit convention: per-unit problems
//! (one event, one histogram, one QA file) are logged and skipped;
//! file-open and subprocess failures abort the command.

use std::fs;
use std::path::PathBuf;
use std::process::Command as Subprocess;

use anyhow::{Context, Result, bail};
use regex::Regex;
use tracing::{info, warn};

use coal_analyze::{
    AMPT_REFERENCE, EventStats, RunTotals, ScanPoint, ScanSeries, normalize_bins, ratio_series,
};
use coal_model::{HistogramName, MIX_EVENT_SUFFIX, PhiObservable, RATIO_BIN_LABELS, RATIO_HISTOGRAM};
use coal_render::{
    PhiPanels, PhiSeries, render_distributions, render_overlay, render_phi_panels,
    render_projections, render_ratio_bars, render_scan,
};
use coal_store::{EventFileReader, HistogramFile};

use crate::cli::{EventArgs, PhiArgs, ScaledArgs, ScanArgs, StatsArgs};

/// Result of visualizing one event.
pub struct EventReport {
    pub event_id: u32,
    pub event_index: usize,
    pub stats: EventStats,
    pub figures: Vec<PathBuf>,
}

pub fn run_event(args: &EventArgs) -> Result<EventReport> {
    let reader = EventFileReader::open(&args.input)
        .with_context(|| format!("open event file {}", args.input.display()))?;
    let event = reader
        .read_event(args.event_index)
        .with_context(|| format!("read event {}", args.event_index))?;
    let stats = EventStats::compute(&event.partons, &event.hadrons);

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("create output directory {}", args.output_dir.display()))?;
    let base = format!("event_{:05}", args.event_index);

    let projections = args.output_dir.join(format!("{base}_projections.svg"));
    render_projections(&projections, &event).context("render projections")?;
    let distributions = args.output_dir.join(format!("{base}_distributions.svg"));
    render_distributions(&distributions, &event).context("render distributions")?;
    let ratios = args.output_dir.join(format!("{base}_ratios.svg"));
    render_ratio_bars(&ratios, &stats).context("render ratios")?;

    let stats_path = args.output_dir.join(format!("{base}_stats.json"));
    let json = serde_json::to_string_pretty(&stats).context("serialize event stats")?;
    fs::write(&stats_path, json)
        .with_context(|| format!("write {}", stats_path.display()))?;

    info!(event = event.id, index = args.event_index, "event figures written");
    Ok(EventReport {
        event_id: event.id,
        event_index: args.event_index,
        stats,
        figures: vec![projections, distributions, ratios, stats_path],
    })
}

/// Result of an aggregate file scan.
pub struct StatsReport {
    pub input: PathBuf,
    pub totals: RunTotals,
}

pub fn run_stats(args: &StatsArgs) -> Result<StatsReport> {
    let reader = EventFileReader::open(&args.input)
        .with_context(|| format!("open event file {}", args.input.display()))?;
    let mut totals = RunTotals::default();
    for (index, result) in reader.events().enumerate() {
        match result {
            Ok(event) => {
                totals.add_event(&EventStats::compute(&event.partons, &event.hadrons));
            }
            Err(error) => {
                warn!(index, error = %error, "skipping malformed event");
                totals.add_failure();
            }
        }
    }
    Ok(StatsReport { input: args.input.clone(), totals })
}

pub fn run_phi(args: &PhiArgs) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("create output directory {}", args.output_dir.display()))?;
    match (&args.single, &args.mix) {
        (Some(single), None) => {
            let file = HistogramFile::open(single)
                .with_context(|| format!("open histogram file {}", single.display()))?;
            let panels = normalized_panels(&file, false);
            let path = args.output_dir.join("cve_phi_single.svg");
            render_phi_panels(&path, &panels, "Normalized Counts × Nbins")
                .context("render single-event phi figure")?;
            Ok(vec![path])
        }
        (None, Some(mix)) => {
            let file = HistogramFile::open(mix)
                .with_context(|| format!("open histogram file {}", mix.display()))?;
            let panels = normalized_panels(&file, true);
            let path = args.output_dir.join("cve_phi_mix.svg");
            render_phi_panels(&path, &panels, "Normalized Counts × Nbins")
                .context("render mixed-event phi figure")?;
            Ok(vec![path])
        }
        (Some(single), Some(mix)) => {
            let single_file = HistogramFile::open(single)
                .with_context(|| format!("open histogram file {}", single.display()))?;
            let mix_file = HistogramFile::open(mix)
                .with_context(|| format!("open histogram file {}", mix.display()))?;
            let panels = ratio_panels(&single_file, &mix_file);
            let path = args.output_dir.join("cve_phi_ratio.svg");
            render_phi_panels(&path, &panels, "Single/Mix")
                .context("render phi ratio figure")?;
            Ok(vec![path])
        }
        (None, None) => Ok(Vec::new()),
    }
}

/// Per-observable panels of normalized series, one per histogram whose
/// parsed name matches the observable and the requested mixed flag.
fn normalized_panels(file: &HistogramFile, mixed: bool) -> PhiPanels {
    PhiObservable::ALL
        .into_iter()
        .map(|observable| {
            let mut series: Vec<PhiSeries> = file
                .iter()
                .filter(|histogram| {
                    HistogramName::parse(&histogram.name)
                        .is_ok_and(|name| name.observable == observable && name.mixed == mixed)
                })
                .map(|histogram| PhiSeries {
                    name: histogram.name.clone(),
                    centers: histogram.centers.clone(),
                    values: normalize_bins(&histogram.contents),
                })
                .collect();
            series.sort_by(|a, b| a.name.cmp(&b.name));
            if series.is_empty() {
                warn!(prefix = observable.prefix(), "no histograms found for prefix");
            }
            (observable, series)
        })
        .collect()
}

/// Single/mix ratio panels. For each single-event histogram the mixed
/// counterpart is `<name>_MixEvt` when present, otherwise the same
/// name; pairs that cannot be found are reported and skipped.
fn ratio_panels(single: &HistogramFile, mix: &HistogramFile) -> PhiPanels {
    PhiObservable::ALL
        .into_iter()
        .map(|observable| {
            let mut series = Vec::new();
            let mut names: Vec<&str> = single
                .names()
                .filter(|name| {
                    HistogramName::parse(name)
                        .is_ok_and(|parsed| parsed.observable == observable && !parsed.mixed)
                })
                .collect();
            names.sort_unstable();
            for name in names {
                let mixed_name = format!("{name}{MIX_EVENT_SUFFIX}");
                let counterpart = if mix.contains(&mixed_name) { mixed_name } else { name.to_string() };
                let (Ok(numerator), Ok(denominator)) =
                    (single.histogram(name), mix.histogram(&counterpart))
                else {
                    warn!(single = name, mix = %counterpart, "missing histogram pair");
                    continue;
                };
                series.push(PhiSeries {
                    name: name.to_string(),
                    centers: numerator.centers.clone(),
                    values: ratio_series(
                        &normalize_bins(&numerator.contents),
                        &normalize_bins(&denominator.contents),
                    ),
                });
            }
            (observable, series)
        })
        .collect()
}

pub fn run_scaled(args: &ScaledArgs) -> Result<PathBuf> {
    let file = HistogramFile::open(&args.input)
        .with_context(|| format!("open histogram file {}", args.input.display()))?;
    let mut series = Vec::new();
    for name in &args.names {
        match file.histogram(name) {
            Ok(histogram) => series.push(PhiSeries {
                name: histogram.name.clone(),
                centers: histogram.centers.clone(),
                values: normalize_bins(&histogram.contents),
            }),
            Err(error) => warn!(name, error = %error, "skipping histogram"),
        }
    }
    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("create output directory {}", args.output_dir.display()))?;
    let path = args.output_dir.join("scaled_histos.svg");
    render_overlay(&path, &series, "Scaled Histograms").context("render overlay figure")?;
    Ok(path)
}

pub fn run_scan(args: &ScanArgs) -> Result<Option<PathBuf>> {
    if args.process {
        run_scan_process(args)?;
    }
    if args.analyze {
        return run_scan_analyze(args);
    }
    Ok(None)
}

/// Invoke the simulation executable once per r value, serially in one
/// working directory so the per-configuration output files cannot
/// collide. A nonzero exit aborts the batch.
fn run_scan_process(args: &ScanArgs) -> Result<()> {
    let exe = args.exe.as_ref().context("--exe is required with --process")?;
    let input = args.input.as_ref().context("--input is required with --process")?;
    for &r in &args.r_values {
        info!(r, exe = %exe.display(), "running coalescence executable");
        let status = Subprocess::new(exe)
            .arg("-i")
            .arg(input)
            .arg("-n")
            .arg(args.events.to_string())
            .arg("-r")
            .arg(format!("{r:.2}"))
            .current_dir(&args.dir)
            .status()
            .with_context(|| format!("spawn {}", exe.display()))?;
        if !status.success() {
            bail!("simulation executable failed for r={r:.2}: {status}");
        }
    }
    Ok(())
}

/// Discover `qa_*_r<value>.cwh` files, read their `hRatio` bins, and
/// render the ratio-vs-r figure. Unreadable files and missing
/// histograms are reported and skipped.
fn run_scan_analyze(args: &ScanArgs) -> Result<Option<PathBuf>> {
    let pattern = Regex::new(r"^qa_.*_r([0-9.]+)\.cwh$").context("compile qa file pattern")?;
    let mut points = Vec::new();
    let entries = fs::read_dir(&args.dir)
        .with_context(|| format!("read directory {}", args.dir.display()))?;
    for entry in entries {
        let entry = entry.context("read directory entry")?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else { continue };
        let Some(captures) = pattern.captures(name) else { continue };
        let Ok(r) = captures[1].parse::<f64>() else {
            warn!(name, "unparseable r value in file name");
            continue;
        };
        let file = match HistogramFile::open(&entry.path()) {
            Ok(file) => file,
            Err(error) => {
                warn!(name, error = %error, "skipping unreadable QA file");
                continue;
            }
        };
        match file.histogram(RATIO_HISTOGRAM) {
            Ok(histogram) => {
                points.push(ScanPoint { r, ratios: histogram.contents.clone() });
            }
            Err(error) => warn!(name, error = %error, "skipping QA file"),
        }
    }

    if points.is_empty() {
        warn!(dir = %args.dir.display(), "no usable QA files found");
        return Ok(None);
    }
    info!(configurations = points.len(), "assembling scan series");
    let series = ScanSeries::from_points(points, RATIO_BIN_LABELS.len());
    let path = args.dir.join("ratios_vs_r.svg");
    render_scan(&path, &series, &RATIO_BIN_LABELS, &AMPT_REFERENCE)
        .context("render scan figure")?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qa_file_pattern_extracts_r() {
        let pattern = Regex::new(r"^qa_.*_r([0-9.]+)\.cwh$").unwrap();
        let captures = pattern.captures("qa_KDTreeGlobal_r1.50.cwh").unwrap();
        assert_eq!(&captures[1], "1.50");
        assert!(pattern.captures("cve_KDTreeGlobal_r1.50.cwh").is_none());
        assert!(pattern.captures("qa_KDTreeGlobal_r1.50.root").is_none());
    }
}
