//! Per-event statistics and run-level aggregation.

use coal_model::{Hadron, HadronClass, Parton, PartonClass};
use serde::{Deserialize, Serialize};

use crate::index::PartonIndex;

/// Guarded yield ratio: `numerator / denominator` when the denominator
/// is positive, otherwise `0.0`. This is a reporting convention, not a
/// mathematical ratio; it keeps empty samples plottable.
pub fn yield_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Classified counts and constituent-reference bookkeeping for one
/// event. Zero-length inputs produce all-zero statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EventStats {
    pub quarks: u64,
    pub antiquarks: u64,
    pub baryons: u64,
    pub antibaryons: u64,
    pub mesons: u64,
    /// Sum of `constituent_ids` lengths across all hadrons.
    pub constituent_refs: u64,
    /// Constituent IDs with no matching parton in the event's index.
    pub missing_constituent_refs: u64,
}

impl EventStats {
    /// Classify and count one event's particles.
    pub fn compute(partons: &[Parton], hadrons: &[Hadron]) -> Self {
        let index = PartonIndex::build(partons);
        let mut stats = EventStats::default();
        for parton in partons {
            match PartonClass::classify(parton) {
                PartonClass::Quark => stats.quarks += 1,
                PartonClass::AntiQuark => stats.antiquarks += 1,
            }
        }
        for hadron in hadrons {
            match HadronClass::classify(hadron) {
                HadronClass::Meson => stats.mesons += 1,
                HadronClass::Baryon => stats.baryons += 1,
                HadronClass::AntiBaryon => stats.antibaryons += 1,
            }
            let outcome = index.resolve(hadron);
            stats.constituent_refs += hadron.constituent_ids.len() as u64;
            stats.missing_constituent_refs += outcome.missing as u64;
        }
        stats
    }

    /// Net baryon number carried by partons, three quarks per baryon.
    /// Kept as a float; it is a ratio, not a rounded count.
    pub fn net_baryon_before(&self) -> f64 {
        (self.quarks as f64 - self.antiquarks as f64) / 3.0
    }

    /// Net baryon number after hadronization.
    pub fn net_baryon_after(&self) -> i64 {
        self.baryons as i64 - self.antibaryons as i64
    }

    /// `(B̄+B)/M`, guarded.
    pub fn baryon_to_meson(&self) -> f64 {
        yield_ratio((self.baryons + self.antibaryons) as f64, self.mesons as f64)
    }

    /// `B/B̄`, guarded.
    pub fn baryon_to_antibaryon(&self) -> f64 {
        yield_ratio(self.baryons as f64, self.antibaryons as f64)
    }
}

/// Running totals across a whole file scan.
///
/// An explicit value threaded through the scan and returned, not a
/// global counter: `merge` is commutative and associative, so partial
/// totals computed per event (or per shard) combine in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunTotals {
    pub events_processed: u64,
    /// Events that failed to decode and were skipped.
    pub events_failed: u64,
    pub quarks: u64,
    pub antiquarks: u64,
    pub baryons: u64,
    pub antibaryons: u64,
    pub mesons: u64,
    pub constituent_refs: u64,
    pub missing_constituent_refs: u64,
}

impl RunTotals {
    pub fn add_event(&mut self, stats: &EventStats) {
        self.events_processed += 1;
        self.quarks += stats.quarks;
        self.antiquarks += stats.antiquarks;
        self.baryons += stats.baryons;
        self.antibaryons += stats.antibaryons;
        self.mesons += stats.mesons;
        self.constituent_refs += stats.constituent_refs;
        self.missing_constituent_refs += stats.missing_constituent_refs;
    }

    pub fn add_failure(&mut self) {
        self.events_failed += 1;
    }

    pub fn merge(mut self, other: RunTotals) -> RunTotals {
        self.events_processed += other.events_processed;
        self.events_failed += other.events_failed;
        self.quarks += other.quarks;
        self.antiquarks += other.antiquarks;
        self.baryons += other.baryons;
        self.antibaryons += other.antibaryons;
        self.mesons += other.mesons;
        self.constituent_refs += other.constituent_refs;
        self.missing_constituent_refs += other.missing_constituent_refs;
        self
    }

    /// Aggregate view with the same derived quantities as one event.
    pub fn as_event_stats(&self) -> EventStats {
        EventStats {
            quarks: self.quarks,
            antiquarks: self.antiquarks,
            baryons: self.baryons,
            antibaryons: self.antibaryons,
            mesons: self.mesons,
            constituent_refs: self.constituent_refs,
            missing_constituent_refs: self.missing_constituent_refs,
        }
    }
}
