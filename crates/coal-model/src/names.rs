//! Histogram naming convention used by the analyzer output files.
//!
//! A φ-correlation histogram name is built from a fixed observable
//! prefix, an optional pair-combination label, and an optional `_MixEvt`
//! suffix marking an event-mixed background sample:
//!
//! ```text
//! hCdPhiM_Baryon_AntiBaryon_MixEvt
//! ^prefix ^combo             ^mixed-event marker
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::classes::PairCombo;
use crate::error::ModelError;

/// Suffix appended to histograms filled from event-mixed pairs.
pub const MIX_EVENT_SUFFIX: &str = "_MixEvt";

/// The four angular observables the analyzer histograms.
///
/// `C` prefixes are angle differences (Δφ), `S` prefixes angle sums;
/// the trailing letter selects position space (`P`) or momentum space
/// (`M`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhiObservable {
    /// Δφ in position space (`hCdPhiP`).
    PositionDifference,
    /// Δφ in momentum space (`hCdPhiM`).
    MomentumDifference,
    /// Σφ in position space (`hSdPhiP`).
    PositionSum,
    /// Σφ in momentum space (`hSdPhiM`).
    MomentumSum,
}

impl PhiObservable {
    pub const ALL: [PhiObservable; 4] = [
        PhiObservable::PositionDifference,
        PhiObservable::MomentumDifference,
        PhiObservable::PositionSum,
        PhiObservable::MomentumSum,
    ];

    /// Histogram name prefix.
    pub fn prefix(&self) -> &'static str {
        match self {
            PhiObservable::PositionDifference => "hCdPhiP",
            PhiObservable::MomentumDifference => "hCdPhiM",
            PhiObservable::PositionSum => "hSdPhiP",
            PhiObservable::MomentumSum => "hSdPhiM",
        }
    }

    /// Human-readable axis title for figure captions.
    pub fn title(&self) -> &'static str {
        match self {
            PhiObservable::PositionDifference => "Δφ Position",
            PhiObservable::MomentumDifference => "Δφ Momentum",
            PhiObservable::PositionSum => "Σφ Position",
            PhiObservable::MomentumSum => "Σφ Momentum",
        }
    }
}

impl fmt::Display for PhiObservable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

impl FromStr for PhiObservable {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhiObservable::ALL
            .into_iter()
            .find(|obs| obs.prefix() == s)
            .ok_or_else(|| ModelError::UnknownObservable(s.to_string()))
    }
}

/// Structured form of a φ-correlation histogram name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistogramName {
    pub observable: PhiObservable,
    pub combo: Option<PairCombo>,
    pub mixed: bool,
}

impl HistogramName {
    /// Parse a histogram name of the form `<prefix>[_<combo>][_MixEvt]`.
    pub fn parse(name: &str) -> Result<Self, ModelError> {
        let (body, mixed) = match name.strip_suffix(MIX_EVENT_SUFFIX) {
            Some(stripped) => (stripped, true),
            None => (name, false),
        };
        let observable = PhiObservable::ALL
            .into_iter()
            .find(|obs| body == obs.prefix() || body.starts_with(&format!("{}_", obs.prefix())))
            .ok_or_else(|| ModelError::MalformedHistogramName(name.to_string()))?;
        let combo = match body.strip_prefix(observable.prefix()) {
            Some("") => None,
            Some(rest) => {
                let label = rest
                    .strip_prefix('_')
                    .ok_or_else(|| ModelError::MalformedHistogramName(name.to_string()))?;
                Some(label.parse::<PairCombo>()?)
            }
            None => None,
        };
        Ok(Self { observable, combo, mixed })
    }
}

impl fmt::Display for HistogramName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.observable.prefix())?;
        if let Some(combo) = self.combo {
            write!(f, "_{combo}")?;
        }
        if self.mixed {
            write!(f, "{MIX_EVENT_SUFFIX}")?;
        }
        Ok(())
    }
}

/// Labels of the seven yield-ratio bins written into `hRatio` by the QA
/// analyzer, in bin order.
pub const RATIO_BIN_LABELS: [&str; 7] = [
    "(B̄+B)/M",
    "B̄/B",
    "p/π+",
    "p̄/p",
    "Λ/p",
    "K+/π+",
    "ρ+/π+",
];

/// Name of the per-configuration yield-ratio histogram.
pub const RATIO_HISTOGRAM: &str = "hRatio";
