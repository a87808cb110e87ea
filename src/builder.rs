//! Generator builder for flexible configuration
//!
//! Collects precision, grid spacing and validation settings before binding
//! them to a polygon.

use crate::compute::grid::GridStepping;
use crate::config::Config;
use crate::error::Result;
use crate::generator::GeohashGenerator;
use polyhash_types::polygon::Polygon;

/// Builder for [`GeohashGenerator`] settings.
///
/// # Examples
///
/// ```rust
/// use polyhash::{GeneratorBuilder, GridStepping};
///
/// let generator = GeneratorBuilder::new()
///     .precision(6)
///     .step(0.001)
///     .stepping(GridStepping::Accumulate)
///     .validate_polygon(true)
///     .build(vec![(0.0, 0.0), (0.0, 0.01), (0.01, 0.01), (0.01, 0.0)])?;
///
/// assert_eq!(generator.precision(), 6);
/// # Ok::<(), polyhash::PolyhashError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
    config: Config,
}

impl GeneratorBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the number of characters per output geohash.
    pub fn precision(mut self, precision: usize) -> Self {
        self.config.precision = precision;
        self
    }

    /// Set the grid spacing on both axes.
    pub fn step(mut self, step: f64) -> Self {
        self.config = self.config.with_step(step);
        self
    }

    pub fn lat_step(mut self, step: f64) -> Self {
        self.config.lat_step = step;
        self
    }

    pub fn lng_step(mut self, step: f64) -> Self {
        self.config.lng_step = step;
        self
    }

    pub fn stepping(mut self, stepping: GridStepping) -> Self {
        self.config.stepping = stepping;
        self
    }

    /// Reject degenerate or out-of-range polygons in [`GeneratorBuilder::build`].
    pub fn validate_polygon(mut self, enabled: bool) -> Self {
        self.config.validate_polygon = enabled;
        self
    }

    /// Bind the settings to a polygon.
    pub fn build(self, polygon: impl Into<Polygon>) -> Result<GeohashGenerator> {
        GeohashGenerator::with_config(polygon, self.config)
    }
}
