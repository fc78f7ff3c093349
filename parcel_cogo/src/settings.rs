//! User-tunable tolerances and display preferences.

use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::units::DistanceUnit;

/// Settings read from a JSON file. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tolerance used at the ends of circular arcs, in decimal degrees.
    pub angular_tolerance_degrees: f64,
    /// Distance (meters, per axis) within which two positions coincide.
    pub coincidence_tolerance: f64,
    /// Unit assumed for distances typed without an abbreviation.
    pub entry_unit: DistanceUnit,
    pub display_unit: DistanceUnit,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            angular_tolerance_degrees: 0.0,
            coincidence_tolerance: 0.001,
            entry_unit: DistanceUnit::Meters,
            display_unit: DistanceUnit::Meters,
        }
    }
}

impl Settings {
    /// Loads settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads settings if a path is given, falling back to the defaults if
    /// the file cannot be read or parsed.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(s) => s,
            Err(e) => {
                warn!("using default settings, cannot load {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Angular tolerance in radians.
    pub fn angular_tolerance(&self) -> f64 {
        self.angular_tolerance_degrees.to_radians()
    }
}
