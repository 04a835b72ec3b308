use serde::{Deserialize, Serialize};

use crate::particle::{Hadron, Parton};

/// One simulated event: ordered parton and hadron records.
///
/// Parton `unique_id` values are unique within one event and serve as
/// mapping keys. Nothing is guaranteed across events; the simulation
/// resets its ID counter and IDs are reused.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    /// Reaction-plane angle Psi, carried through from the generator.
    pub reaction_plane: f64,
    pub partons: Vec<Parton>,
    pub hadrons: Vec<Hadron>,
}
