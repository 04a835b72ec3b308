//! Parton lookup by unique ID (arena + index pattern).
//!
//! Hadrons reference their constituents by ID, not by pointer, and the
//! references may dangle: cross-event ID reuse and partial event loss
//! make "not found" a first-class outcome that is counted rather than
//! treated as an error.

use std::collections::HashMap;

use coal_model::{Hadron, Parton};

/// Mapping from `unique_id` to parton, borrowed from one event's
/// parton arena.
pub struct PartonIndex<'a> {
    by_id: HashMap<u32, &'a Parton>,
}

impl<'a> PartonIndex<'a> {
    /// Build the index for one event's partons.
    ///
    /// Duplicate IDs are not expected but not rejected; the last record
    /// wins, matching map-insert semantics throughout the toolchain.
    pub fn build(partons: &'a [Parton]) -> Self {
        let mut by_id = HashMap::with_capacity(partons.len());
        for parton in partons {
            by_id.insert(parton.unique_id, parton);
        }
        Self { by_id }
    }

    pub fn get(&self, id: u32) -> Option<&'a Parton> {
        self.by_id.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Resolve a hadron's constituent references in `constituent_ids`
    /// order. Unresolved IDs are omitted from the result and counted in
    /// `missing`; the resolved sequence may be shorter than the input.
    pub fn resolve(&self, hadron: &Hadron) -> Resolution<'a> {
        let mut resolved = Vec::with_capacity(hadron.constituent_ids.len());
        let mut missing = 0usize;
        for &id in &hadron.constituent_ids {
            match self.get(id) {
                Some(parton) => resolved.push(parton),
                None => missing += 1,
            }
        }
        Resolution { resolved, missing }
    }
}

/// Outcome of resolving one hadron's constituent references.
pub struct Resolution<'a> {
    /// Resolved partons, in `constituent_ids` order.
    pub resolved: Vec<&'a Parton>,
    /// Count of IDs with no matching parton in the index.
    pub missing: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parton(id: u32) -> Parton {
        Parton {
            unique_id: id,
            x: id as f64,
            y: 0.0,
            z: 0.0,
            px: 0.0,
            py: 0.0,
            pz: 0.0,
            baryon_thirds: 1,
        }
    }

    fn hadron(constituent_ids: Vec<u32>) -> Hadron {
        Hadron {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            px: 0.0,
            py: 0.0,
            pz: 0.0,
            baryon_number: 1,
            constituent_ids,
        }
    }

    #[test]
    fn empty_input_yields_empty_index() {
        let index = PartonIndex::build(&[]);
        assert!(index.is_empty());
        assert!(index.get(1).is_none());
    }

    #[test]
    fn duplicate_ids_are_last_write_wins() {
        let mut second = parton(5);
        second.x = 42.0;
        let partons = vec![parton(5), second];
        let index = PartonIndex::build(&partons);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(5).expect("id 5").x, 42.0);
    }

    #[test]
    fn resolve_against_empty_index_counts_every_id_missing() {
        let index = PartonIndex::build(&[]);
        let outcome = index.resolve(&hadron(vec![1, 2, 3]));
        assert!(outcome.resolved.is_empty());
        assert_eq!(outcome.missing, 3);
    }

    #[test]
    fn resolve_preserves_order_and_skips_missing() {
        let partons = vec![parton(1), parton(2), parton(3)];
        let index = PartonIndex::build(&partons);
        let outcome = index.resolve(&hadron(vec![3, 99, 1]));
        let ids: Vec<u32> = outcome.resolved.iter().map(|p| p.unique_id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(outcome.missing, 1);
    }

    #[test]
    fn resolve_is_idempotent_over_immutable_inputs() {
        let partons = vec![parton(1), parton(2)];
        let subject = hadron(vec![2, 7, 1]);
        let first = PartonIndex::build(&partons).resolve(&subject);
        let second = PartonIndex::build(&partons).resolve(&subject);
        let ids = |r: &Resolution<'_>| r.resolved.iter().map(|p| p.unique_id).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(first.missing, second.missing);
    }
}
