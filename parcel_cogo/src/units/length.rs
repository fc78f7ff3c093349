//! Lengths in meters, their micron storage form, and the distance units
//! observations may be entered in.

use serde::{Deserialize, Serialize};

/// A distance in meters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Length(pub f64);

impl Length {
    pub fn new(meters: f64) -> Self {
        Self(meters)
    }

    pub fn from_microns(microns: i64) -> Self {
        Self(to_meters(microns))
    }

    pub fn meters(self) -> f64 {
        self.0
    }

    pub fn microns(self) -> i64 {
        to_microns(self.0)
    }
}

/// Converts meters to whole microns, rounding half away from zero.
pub fn to_microns(meters: f64) -> i64 {
    (meters * 1_000_000.0).round() as i64
}

/// Converts microns back to meters.
pub fn to_meters(microns: i64) -> f64 {
    microns as f64 / 1_000_000.0
}

/// Unit used when a distance was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DistanceUnit {
    /// Whatever unit the distance was originally entered in.
    AsEntered,
    #[default]
    Meters,
    Feet,
    Chains,
}

impl DistanceUnit {
    pub fn name(self) -> &'static str {
        match self {
            DistanceUnit::AsEntered => "",
            DistanceUnit::Meters => "Meters",
            DistanceUnit::Feet => "Feet",
            DistanceUnit::Chains => "Chains",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            DistanceUnit::AsEntered => "",
            DistanceUnit::Meters => "m",
            DistanceUnit::Feet => "ft",
            DistanceUnit::Chains => "ch",
        }
    }

    /// Number of meters in one of this unit.
    pub fn multiplier(self) -> f64 {
        match self {
            DistanceUnit::AsEntered | DistanceUnit::Meters => 1.0,
            DistanceUnit::Feet => 0.3048,
            DistanceUnit::Chains => 20.1168,
        }
    }

    /// Looks up a unit from its abbreviation (case insensitive).
    pub fn from_abbreviation(abbrev: &str) -> Option<Self> {
        match abbrev.trim().to_ascii_lowercase().as_str() {
            "m" => Some(DistanceUnit::Meters),
            "ft" | "f" => Some(DistanceUnit::Feet),
            "ch" | "c" => Some(DistanceUnit::Chains),
            _ => None,
        }
    }

    pub fn to_metric(self, value: f64) -> f64 {
        match self {
            DistanceUnit::Meters => value,
            _ => value * self.multiplier(),
        }
    }

    pub fn from_metric(self, meters: f64) -> f64 {
        match self {
            DistanceUnit::Meters => meters,
            _ => meters / self.multiplier(),
        }
    }

    /// Formats a metric value in this unit.
    ///
    /// Without an explicit precision the value is written with a
    /// unit-appropriate number of decimals and trailing zeros stripped.
    pub fn format(self, meters: f64, append_abbrev: bool, precision: Option<usize>) -> String {
        let value = self.from_metric(meters);
        let mut s = match precision {
            Some(prec) => format!("{:.*}", prec, value),
            None => {
                let digits = match self {
                    DistanceUnit::Feet => 2,
                    DistanceUnit::Chains => 4,
                    _ => 3,
                };
                let s = format!("{:.*}", digits, value);
                if s.contains('.') {
                    s.trim_end_matches('0').trim_end_matches('.').to_string()
                } else {
                    s
                }
            }
        };
        if append_abbrev {
            s.push_str(self.abbreviation());
        }
        s
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn microns_round_half_away_from_zero() {
        assert_eq!(to_microns(1.0000004), 1_000_000);
        assert_eq!(to_microns(1.0000006), 1_000_001);
        assert_eq!(to_microns(-1.0000006), -1_000_001);
        assert_eq!(to_microns(0.0), 0);
        assert_eq!(Length::new(2.5).microns(), 2_500_000);
    }

    #[test]
    fn unit_conversions() {
        assert!((DistanceUnit::Feet.to_metric(100.0) - 30.48).abs() < 1e-9);
        assert!((DistanceUnit::Chains.from_metric(20.1168) - 1.0).abs() < 1e-12);
        assert_eq!(DistanceUnit::Meters.to_metric(7.25), 7.25);
    }

    #[test]
    fn format_strips_trailing_zeros() {
        assert_eq!(DistanceUnit::Meters.format(12.5, true, None), "12.5m");
        assert_eq!(DistanceUnit::Meters.format(12.0, true, None), "12m");
        assert_eq!(DistanceUnit::Feet.format(30.48, true, None), "100ft");
        assert_eq!(DistanceUnit::Chains.format(20.1168 * 1.25, false, None), "1.25");
        assert_eq!(DistanceUnit::Meters.format(12.0, false, Some(2)), "12.00");
    }

    #[test]
    fn abbreviations() {
        assert_eq!(DistanceUnit::from_abbreviation("FT"), Some(DistanceUnit::Feet));
        assert_eq!(DistanceUnit::from_abbreviation("ch"), Some(DistanceUnit::Chains));
        assert_eq!(DistanceUnit::from_abbreviation("yd"), None);
    }
}
