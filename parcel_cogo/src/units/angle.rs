//! Angles expressed in radians, with degree and DMS conversions.

use std::f64::consts::TAU;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An angle in radians.
///
/// Absolute bearings are normally held in `[0, 2π)`, but relative angles
/// (for example an angle turned from a backsight) may be negative, meaning
/// counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RadianValue(pub f64);

impl RadianValue {
    pub fn new(radians: f64) -> Self {
        Self(radians)
    }

    /// Creates an angle from a value in decimal degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees.to_radians())
    }

    pub fn radians(self) -> f64 {
        self.0
    }

    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Returns this angle wrapped into `[0, 2π)`.
    pub fn normalized(self) -> Self {
        Self(normalize(self.0))
    }

    /// Parses decimal degrees (`"45.5"`) or dash separated DMS
    /// (`"45-30-00"`, `"-12-15-30.5"`).
    pub fn parse(text: &str) -> Result<Self> {
        parse_degrees(text).map(Self::from_degrees)
    }
}

impl fmt::Display for RadianValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_dms(self.degrees()))
    }
}

/// Wraps an angle in radians into `[0, 2π)`.
pub fn normalize(radians: f64) -> f64 {
    let wrapped = radians.rem_euclid(TAU);
    // rem_euclid can round up to exactly 2π for tiny negative input
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Formats decimal degrees as degrees, minutes and whole seconds.
pub fn format_dms(degrees: f64) -> String {
    let total = (degrees.abs() * 3600.0).round() as u64;
    let d = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    let sign = if degrees < 0.0 && total > 0 { "-" } else { "" };
    format!("{}{}\u{00B0}{}'{}\"", sign, d, m, s)
}

fn parse_degrees(text: &str) -> Result<f64> {
    let invalid = || Error::InvalidAngle(text.to_string());
    let trimmed = text.trim();
    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed),
    };
    if body.is_empty() {
        return Err(invalid());
    }

    let parts: Vec<&str> = body.split('-').collect();
    if parts.len() > 3 {
        return Err(invalid());
    }
    let mut values = [0.0; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        let v: f64 = part.trim().parse().map_err(|_| invalid())?;
        if !v.is_finite() || v < 0.0 {
            return Err(invalid());
        }
        *slot = v;
    }
    if parts.len() > 1 && (values[1] >= 60.0 || values[2] >= 60.0) {
        return Err(invalid());
    }
    Ok(sign * (values[0] + values[1] / 60.0 + values[2] / 3600.0))
}
