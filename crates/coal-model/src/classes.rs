//! Particle classification by baryon number.
//!
//! Classification is a total function of the signed baryon number: every
//! value maps to exactly one class, so downstream counting can never
//! double-book or drop a particle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::particle::{Hadron, Parton};

/// Parton-level classification.
///
/// The sign convention is `baryon_thirds > 0` → quark, everything else →
/// antiquark. A parton with baryon number zero does not occur in
/// simulation output; it is folded into `AntiQuark` rather than modeled
/// as a third class or an error, so classification stays infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartonClass {
    Quark,
    AntiQuark,
}

impl PartonClass {
    pub fn classify(parton: &Parton) -> Self {
        if parton.baryon_thirds > 0 {
            PartonClass::Quark
        } else {
            PartonClass::AntiQuark
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartonClass::Quark => "Quark",
            PartonClass::AntiQuark => "Anti-quark",
        }
    }
}

impl fmt::Display for PartonClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Hadron-level classification: 0 → meson, positive → baryon, negative →
/// anti-baryon. Total and mutually exclusive over all `i32` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HadronClass {
    Meson,
    Baryon,
    AntiBaryon,
}

impl HadronClass {
    pub fn classify(hadron: &Hadron) -> Self {
        Self::from_baryon_number(hadron.baryon_number)
    }

    pub fn from_baryon_number(baryon_number: i32) -> Self {
        match baryon_number {
            0 => HadronClass::Meson,
            n if n > 0 => HadronClass::Baryon,
            _ => HadronClass::AntiBaryon,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HadronClass::Meson => "Meson",
            HadronClass::Baryon => "Baryon",
            HadronClass::AntiBaryon => "Anti-baryon",
        }
    }

    /// All classes in canonical order.
    pub const ALL: [HadronClass; 3] =
        [HadronClass::Meson, HadronClass::Baryon, HadronClass::AntiBaryon];
}

impl fmt::Display for HadronClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unordered pair of hadron classes, as used to label the φ-correlation
/// histograms. Six combinations exist; the label strings match what the
/// analyzer writes into histogram names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairCombo {
    BaryonBaryon,
    BaryonAntiBaryon,
    BaryonMeson,
    AntiBaryonAntiBaryon,
    AntiBaryonMeson,
    MesonMeson,
}

impl PairCombo {
    pub const ALL: [PairCombo; 6] = [
        PairCombo::BaryonBaryon,
        PairCombo::BaryonAntiBaryon,
        PairCombo::BaryonMeson,
        PairCombo::AntiBaryonAntiBaryon,
        PairCombo::AntiBaryonMeson,
        PairCombo::MesonMeson,
    ];

    /// Label as written into histogram names.
    pub fn as_str(&self) -> &'static str {
        match self {
            PairCombo::BaryonBaryon => "Baryon_Baryon",
            PairCombo::BaryonAntiBaryon => "Baryon_AntiBaryon",
            PairCombo::BaryonMeson => "Baryon_Meson",
            PairCombo::AntiBaryonAntiBaryon => "AntiBaryon_AntiBaryon",
            PairCombo::AntiBaryonMeson => "AntiBaryon_Meson",
            PairCombo::MesonMeson => "Meson_Meson",
        }
    }

}

impl fmt::Display for PairCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PairCombo {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PairCombo::ALL
            .into_iter()
            .find(|combo| combo.as_str() == s)
            .ok_or_else(|| ModelError::UnknownPairCombo(s.to_string()))
    }
}
