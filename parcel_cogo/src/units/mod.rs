//! Angular and linear value types.

pub mod angle;
pub mod length;

pub use angle::{format_dms, normalize, RadianValue};
pub use length::{to_meters, to_microns, DistanceUnit, Length};
