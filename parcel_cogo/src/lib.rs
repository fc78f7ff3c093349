//! Core library for the parcel COGO engine.
//!
//! Converts field survey observations (angles, bearings, offsets and
//! distances) into planar ground coordinates, and provides the geometric
//! predicates an editor needs along the way.

pub mod error;
pub mod geometry;
pub mod io;
pub mod settings;
pub mod surveying;
pub mod units;

pub use error::{Error, Result};
