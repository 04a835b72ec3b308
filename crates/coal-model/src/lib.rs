pub mod classes;
pub mod error;
pub mod event;
pub mod names;
pub mod particle;

pub use classes::{HadronClass, PairCombo, PartonClass};
pub use error::{ModelError, Result};
pub use event::Event;
pub use names::{
    HistogramName, MIX_EVENT_SUFFIX, PhiObservable, RATIO_BIN_LABELS, RATIO_HISTOGRAM,
};
pub use particle::{Hadron, Parton};

#[cfg(test)]
mod tests {
    use super::*;

    fn parton(id: u32, baryon_thirds: i32) -> Parton {
        Parton {
            unique_id: id,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            px: 0.0,
            py: 0.0,
            pz: 0.0,
            baryon_thirds,
        }
    }

    #[test]
    fn parton_sign_convention() {
        assert_eq!(PartonClass::classify(&parton(1, 1)), PartonClass::Quark);
        assert_eq!(PartonClass::classify(&parton(2, -1)), PartonClass::AntiQuark);
        // Zero baryon number folds into AntiQuark by documented policy.
        assert_eq!(PartonClass::classify(&parton(3, 0)), PartonClass::AntiQuark);
    }

    #[test]
    fn event_serializes() {
        let event = Event {
            id: 7,
            reaction_plane: 0.25,
            partons: vec![parton(1, 1)],
            hadrons: vec![Hadron {
                x: 1.0,
                y: 2.0,
                z: 3.0,
                px: 0.0,
                py: 0.0,
                pz: 0.0,
                baryon_number: 0,
                constituent_ids: vec![1, 2],
            }],
        };
        let json = serde_json::to_string(&event).expect("serialize event");
        let round: Event = serde_json::from_str(&json).expect("deserialize event");
        assert_eq!(round, event);
    }
}
