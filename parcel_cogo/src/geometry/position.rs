//! Basic 2D position type used throughout the crate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A position in ground (projected) coordinates.
///
/// Positions deliberately do not implement `PartialEq`: coincidence is
/// always a question of tolerance, see [`Position::is_at`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Checks whether `other` lies within `tol` of this position on both
    /// axes. This is a square test, not a radius.
    pub fn is_at(&self, other: &Position, tol: f64) -> bool {
        (self.x - other.x).abs() <= tol && (self.y - other.y).abs() <= tol
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3},{:.3}", self.x, self.y)
    }
}
