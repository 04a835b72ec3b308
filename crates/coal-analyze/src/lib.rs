//! Per-event reconstruction and aggregation for coalescence output.
//!
//! Every operation in this crate is a stateless transform over
//! immutable inputs: build a parton index, resolve constituent
//! references, classify, count, and compute guarded ratios. Nothing here
//! performs I/O or rendering.

pub mod histogram;
pub mod index;
pub mod links;
pub mod scan;
pub mod stats;

pub use histogram::{axis_limit, bin_counts, normalize_bins, ratio_series};
pub use index::{PartonIndex, Resolution};
pub use links::ConstituentLinks;
pub use scan::{AMPT_REFERENCE, ScanPoint, ScanSeries};
pub use stats::{EventStats, RunTotals, yield_ratio};
