//! CLI argument definitions for the coalview toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "coalview",
    version,
    about = "Analysis and visualization tools for coalescence simulation output",
    long_about = "Read coalescence event and histogram files, compute per-event\n\
                  and aggregate statistics, and render SVG figures:\n\
                  event displays, phi-distribution comparisons, and\n\
                  baryon-preference parameter scans."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Visualize one event: projections, distributions, and ratios.
    Event(EventArgs),

    /// Scan every event in a file and report aggregate statistics.
    Stats(StatsArgs),

    /// Plot phi distributions from single and/or mixed-event files.
    Phi(PhiArgs),

    /// Overlay normalized histograms from one file.
    Scaled(ScaledArgs),

    /// Run and/or analyze a baryon-preference parameter scan.
    Scan(ScanArgs),
}

#[derive(Parser)]
pub struct EventArgs {
    /// Event transport file to read.
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Index of the event to visualize.
    #[arg(short = 'e', long = "event-index", default_value_t = 0)]
    pub event_index: usize,

    /// Output directory for figures.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Event transport file to read.
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,
}

#[derive(Parser)]
pub struct PhiArgs {
    /// Single-event histogram file.
    #[arg(short = 's', long = "single", value_name = "FILE")]
    pub single: Option<PathBuf>,

    /// Mixed-event histogram file.
    #[arg(short = 'm', long = "mix", value_name = "FILE")]
    pub mix: Option<PathBuf>,

    /// Output directory for figures.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Parser)]
pub struct ScaledArgs {
    /// Histogram file to read.
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Histogram names to overlay.
    #[arg(
        long = "names",
        value_name = "NAME",
        num_args = 1..,
        default_values_t = [
            "hCdPhiM_Baryon_Baryon".to_string(),
            "hCdPhiM_Baryon_AntiBaryon".to_string(),
            "hCdPhiM_AntiBaryon_AntiBaryon".to_string(),
        ]
    )]
    pub names: Vec<String>,

    /// Output directory for figures.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Parser)]
pub struct ScanArgs {
    /// Run the coalescence executable for each r value.
    #[arg(short = 'p', long = "process")]
    pub process: bool,

    /// Analyze QA files present in the working directory.
    #[arg(short = 'a', long = "analyze")]
    pub analyze: bool,

    /// Path to the coalescence executable.
    #[arg(long = "exe", value_name = "PATH")]
    pub exe: Option<PathBuf>,

    /// Event transport file passed to the executable.
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Baryon preference r values to scan.
    #[arg(
        short = 'r',
        long = "baryon-preference",
        value_name = "R",
        num_args = 1..,
        default_values_t = [0.1, 0.5, 1.0, 1.5, 2.0, 3.0, 999.99]
    )]
    pub r_values: Vec<f64>,

    /// Number of events to process per configuration.
    #[arg(short = 'n', long = "events", default_value_t = 100)]
    pub events: u32,

    /// Working directory holding the per-configuration QA files.
    #[arg(short = 'd', long = "dir", value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
