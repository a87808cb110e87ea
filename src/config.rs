//! Generation settings.

use crate::compute::grid::GridStepping;
use crate::error::{PolyhashError, Result};
use serde::{Deserialize, Serialize};

/// Longest geohash the generator will produce.
pub const MAX_PRECISION: usize = 20;

/// Settings for a generator: output precision and grid sampling.
///
/// # Examples
///
/// ```rust
/// use polyhash::Config;
///
/// let config = Config::from_json(r#"{"precision": 6}"#)?;
/// assert_eq!(config.precision, 6);
/// assert_eq!(config.lat_step, 1e-4);
/// # Ok::<(), polyhash::PolyhashError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Characters per output geohash (1-20, default: 8)
    #[serde(default = "Config::default_precision")]
    pub precision: usize,

    /// Grid spacing along latitude, in degrees
    #[serde(default = "Config::default_step")]
    pub lat_step: f64,

    /// Grid spacing along longitude, in degrees
    #[serde(default = "Config::default_step")]
    pub lng_step: f64,

    /// How grid coordinates advance across the bounding box
    #[serde(default)]
    pub stepping: GridStepping,

    /// Reject degenerate or out-of-range polygons at construction
    #[serde(default)]
    pub validate_polygon: bool,
}

impl Config {
    const fn default_precision() -> usize {
        8
    }

    const fn default_step() -> f64 {
        1e-4
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Use the same spacing on both axes.
    pub fn with_step(mut self, step: f64) -> Self {
        self.lat_step = step;
        self.lng_step = step;
        self
    }

    pub fn with_lat_step(mut self, step: f64) -> Self {
        self.lat_step = step;
        self
    }

    pub fn with_lng_step(mut self, step: f64) -> Self {
        self.lng_step = step;
        self
    }

    pub fn with_stepping(mut self, stepping: GridStepping) -> Self {
        self.stepping = stepping;
        self
    }

    pub fn with_polygon_validation(mut self, enabled: bool) -> Self {
        self.validate_polygon = enabled;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_PRECISION).contains(&self.precision) {
            return Err(PolyhashError::InvalidPrecision(self.precision));
        }

        for (name, step) in [("lat_step", self.lat_step), ("lng_step", self.lng_step)] {
            if !step.is_finite() {
                return Err(PolyhashError::InvalidConfig(format!(
                    "{} must be finite, got: {}",
                    name, step
                )));
            }
            if step <= 0.0 {
                return Err(PolyhashError::InvalidConfig(format!(
                    "{} must be positive, got: {}",
                    name, step
                )));
            }
        }

        Ok(())
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(toml_str).map_err(|e| PolyhashError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| PolyhashError::Toml(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: Self::default_precision(),
            lat_step: Self::default_step(),
            lng_step: Self::default_step(),
            stepping: GridStepping::default(),
            validate_polygon: false,
        }
    }
}
