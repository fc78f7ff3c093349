//! Observed distances, remembered in the unit they were entered in.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::TINY;
use crate::units::{to_microns, DistanceUnit};

/// A distance observation.
///
/// The value is held in meters. The entry unit is kept so the distance can
/// be shown back to the user the way it was typed. A distance without an
/// entry unit is undefined.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Distance {
    metric: f64,
    unit: Option<DistanceUnit>,
    fixed: bool,
}

impl Distance {
    /// Creates a distance from a value expressed in `unit`.
    pub fn new(value: f64, unit: DistanceUnit) -> Self {
        Self {
            metric: unit.to_metric(value),
            unit: Some(unit),
            fixed: false,
        }
    }

    /// Creates a distance in meters.
    pub fn from_meters(meters: f64) -> Self {
        Self::new(meters, DistanceUnit::Meters)
    }

    /// Parses a number with an optional trailing unit abbreviation, such as
    /// `"12.5"`, `"100ft"` or `"3.2 ch"`. Without an abbreviation the value
    /// is taken to be in `default_unit`.
    pub fn parse(text: &str, default_unit: DistanceUnit) -> Result<Self> {
        let s = text.trim();
        if s.is_empty() {
            return Err(Error::InvalidDistance(text.to_string()));
        }

        // the numeric part runs up to the last character that isn't a letter
        let split = s
            .char_indices()
            .rev()
            .find(|(_, c)| !c.is_alphabetic())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        let (num, abbr) = s.split_at(split);

        let value: f64 = num
            .trim()
            .parse()
            .map_err(|_| Error::InvalidDistance(text.to_string()))?;

        let unit = if abbr.is_empty() {
            default_unit
        } else {
            DistanceUnit::from_abbreviation(abbr)
                .ok_or_else(|| Error::UnknownUnit(abbr.to_string()))?
        };
        Ok(Self::new(value, unit))
    }

    pub fn is_defined(&self) -> bool {
        self.unit.is_some()
    }

    pub fn entry_unit(&self) -> Option<DistanceUnit> {
        self.unit
    }

    pub fn meters(&self) -> f64 {
        self.metric
    }

    pub fn microns(&self) -> i64 {
        to_microns(self.metric)
    }

    /// The value in the unit it was entered in (zero if undefined).
    pub fn observed_value(&self) -> f64 {
        self.unit.map_or(0.0, |u| u.from_metric(self.metric))
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Marks the distance as fixed, so adjustment leaves it alone.
    pub fn set_fixed(&mut self) {
        self.fixed = true;
    }

    /// Makes the distance positive. Returns true if the sign changed.
    pub fn set_positive(&mut self) -> bool {
        if self.metric < 0.0 {
            self.metric = -self.metric;
            true
        } else {
            false
        }
    }

    /// Makes the distance negative. Returns true if the sign changed.
    pub fn set_negative(&mut self) -> bool {
        if self.metric > 0.0 {
            self.metric = -self.metric;
            true
        } else {
            false
        }
    }

    /// Formats the distance in its entry unit, with abbreviation. Empty if
    /// the distance is undefined.
    pub fn format(&self) -> String {
        self.unit
            .map(|u| u.format(self.metric, true, None))
            .unwrap_or_default()
    }

    /// Formats the distance in some other unit.
    pub fn format_in(&self, unit: DistanceUnit, append_abbrev: bool) -> String {
        unit.format(self.metric, append_abbrev, None)
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.fixed == other.fixed && (self.metric - other.metric).abs() < TINY
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}
