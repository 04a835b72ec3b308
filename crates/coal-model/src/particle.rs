//! Particle records as produced by the coalescence simulation.
//!
//! A `Parton` is a quark-level constituent with an identity that is unique
//! within one event. A `Hadron` is a bound state that refers back to its
//! constituents by parton ID. Both are immutable once an event is loaded
//! and live exactly as long as the event that owns them.

use serde::{Deserialize, Serialize};

/// Quark or antiquark constituent.
///
/// `baryon_thirds` stores the baryon number scaled by three, the
/// simulation convention for representing fractional baryon number as an
/// integer: a quark carries `+1`, an antiquark `-1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parton {
    /// Unique within one event; events may reuse IDs freely.
    pub unique_id: u32,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub px: f64,
    pub py: f64,
    pub pz: f64,
    pub baryon_thirds: i32,
}

/// Meson, baryon, or anti-baryon produced by coalescence.
///
/// `constituent_ids` are weak references into the same event's parton
/// list. A hadron does not own its constituents and the references are
/// not guaranteed to resolve; a dangling ID is an expected, countable
/// condition, never a memory-safety concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hadron {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub px: f64,
    pub py: f64,
    pub pz: f64,
    /// 0 = meson, positive = baryon, negative = anti-baryon.
    pub baryon_number: i32,
    pub constituent_ids: Vec<u32>,
}
