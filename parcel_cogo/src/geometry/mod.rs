//! Planar geometry primitives used to turn survey observations into ground
//! positions.
//!
//! Bearings throughout are clockwise from grid north (the Y axis), in
//! radians.

pub mod basic;
pub mod position;
pub mod quad_vertex;
pub mod turn;
pub mod window;

pub use position::Position;
pub use quad_vertex::{is_clockwise, QuadVertex, Quadrant};
pub use turn::Turn;
pub use window::Window;

/// Magnitudes below this are treated as zero.
///
/// This is the single tolerance used for snapping deltas, angles and
/// squared distances, for parallel detection, and for comparing the numeric
/// content of observations.
pub const TINY: f64 = 1e-12;
