//! Constituent-link topology for event displays.
//!
//! A hadron is connected to its resolved constituents in one of three
//! ways: fewer than two resolved partons draw nothing, exactly two draw
//! one segment, exactly three draw a closed triangle. More than three
//! resolved constituents also draw nothing, matching the original
//! display behavior.

/// Line segments connecting a hadron's resolved constituents in a 2D
/// projection.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstituentLinks {
    /// 0, 1, or more than 3 resolved constituents.
    None,
    /// Exactly two resolved constituents.
    Segment([(f64, f64); 2]),
    /// Exactly three resolved constituents, closed with the wrap-around
    /// edge back to the first.
    Triangle([(f64, f64); 3]),
}

impl ConstituentLinks {
    /// Classify projected constituent points into the link topology.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        match points {
            [a, b] => ConstituentLinks::Segment([*a, *b]),
            [a, b, c] => ConstituentLinks::Triangle([*a, *b, *c]),
            _ => ConstituentLinks::None,
        }
    }

    /// The polyline to draw, closed for triangles, empty when nothing
    /// is drawn.
    pub fn polyline(&self) -> Vec<(f64, f64)> {
        match self {
            ConstituentLinks::None => Vec::new(),
            ConstituentLinks::Segment([a, b]) => vec![*a, *b],
            ConstituentLinks::Triangle([a, b, c]) => vec![*a, *b, *c, *a],
        }
    }
}
