//! Polygon to geohash generation.
//!
//! A [`GeohashGenerator`] owns one polygon and its settings. Each call to
//! [`GeohashGenerator::generate`] starts an independent run: a lazy
//! [`Geohashes`] iterator that walks the bounding-box grid, keeps points
//! inside the polygon, encodes them, and yields every geohash the first time
//! it is seen. Memory grows with the number of distinct geohashes found, not
//! with the size of the grid, and dropping the iterator stops the run.

use crate::builder::GeneratorBuilder;
use crate::compute::classify::point_in_polygon;
use crate::compute::encode::encode;
use crate::compute::grid::GridPoints;
use crate::compute::validation::validate_polygon;
use crate::config::Config;
use crate::error::Result;
use polyhash_types::polygon::Polygon;
use polyhash_types::stats::GenerationStats;
use rustc_hash::FxHashSet;
use std::iter::FusedIterator;

/// Produces the geohash cells whose grid sample points fall inside a polygon.
///
/// # Examples
///
/// ```rust
/// use polyhash::GeohashGenerator;
///
/// let generator = GeohashGenerator::new(vec![
///     (40.7000, -74.0100),
///     (40.7000, -74.0000),
///     (40.7060, -74.0000),
///     (40.7060, -74.0100),
/// ]);
///
/// let cells: Vec<String> = generator.generate().collect();
/// assert!(!cells.is_empty());
/// assert!(cells.iter().all(|cell| cell.len() == 8 && cell.starts_with("dr5r")));
/// ```
#[derive(Debug, Clone)]
pub struct GeohashGenerator {
    polygon: Polygon,
    config: Config,
}

impl GeohashGenerator {
    /// Create a generator with the default configuration.
    ///
    /// The polygon is accepted as is. Degenerate input (fewer than three
    /// vertices, non-finite coordinates) produces empty runs instead of an
    /// error; use [`GeohashGenerator::with_config`] with polygon validation
    /// enabled to reject it up front.
    pub fn new(polygon: impl Into<Polygon>) -> Self {
        Self {
            polygon: polygon.into(),
            config: Config::default(),
        }
    }

    /// Create a generator with explicit settings.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid, or if `config.validate_polygon`
    /// is set and the polygon is degenerate or out of range.
    pub fn with_config(polygon: impl Into<Polygon>, config: Config) -> Result<Self> {
        config.validate()?;

        let polygon = polygon.into();
        if config.validate_polygon {
            validate_polygon(&polygon)?;
        }

        Ok(Self { polygon, config })
    }

    /// Create a generator from a GeoJSON `Polygon` geometry or `Feature`.
    #[cfg(feature = "geojson")]
    pub fn from_geojson(input: &str, config: Config) -> Result<Self> {
        let polygon = crate::geojson::polygon_from_geojson(input)?;
        Self::with_config(polygon, config)
    }

    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Characters per generated geohash.
    pub fn precision(&self) -> usize {
        self.config.precision
    }

    /// Start a new generation run.
    pub fn generate(&self) -> Geohashes<'_> {
        let degenerate = self.polygon.is_degenerate() || !self.polygon.is_finite();

        let grid = if degenerate {
            log::warn!(
                "Polygon with {} vertices encloses no usable area; generating nothing",
                self.polygon.len()
            );
            GridPoints::empty()
        } else {
            GridPoints::for_polygon(
                &self.polygon,
                self.config.lat_step,
                self.config.lng_step,
                self.config.stepping,
            )
        };

        if !degenerate {
            let bbox = grid.bounding_box();
            log::debug!(
                "Generating precision {} geohashes over lat [{}, {}] lng [{}, {}] ({:?} stepping)",
                self.config.precision,
                bbox.min_lat,
                bbox.max_lat,
                bbox.min_lng,
                bbox.max_lng,
                self.config.stepping
            );
        }

        Geohashes {
            polygon: &self.polygon,
            grid,
            precision: self.config.precision,
            seen: FxHashSet::default(),
            stats: GenerationStats::new(),
            finished: false,
        }
    }

    /// Run generation to completion and count the distinct cells.
    pub fn count_cells(&self) -> usize {
        self.generate().count()
    }
}

impl<'a> IntoIterator for &'a GeohashGenerator {
    type Item = String;
    type IntoIter = Geohashes<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.generate()
    }
}

/// One generation run: distinct geohashes in grid discovery order.
///
/// Not restartable; call [`GeohashGenerator::generate`] again for a fresh run.
#[derive(Debug)]
pub struct Geohashes<'a> {
    polygon: &'a Polygon,
    grid: GridPoints,
    precision: usize,
    seen: FxHashSet<String>,
    stats: GenerationStats,
    finished: bool,
}

impl Geohashes<'_> {
    /// Counters for the work done so far in this run.
    pub fn stats(&self) -> GenerationStats {
        self.stats
    }

    /// Number of distinct geohashes emitted so far.
    pub fn emitted(&self) -> usize {
        self.seen.len()
    }
}

impl Iterator for Geohashes<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        for (lat, lng) in self.grid.by_ref() {
            self.stats.record_grid_point();

            if !point_in_polygon(lat, lng, self.polygon.vertices()) {
                continue;
            }
            self.stats.record_inside();

            let geohash = encode(lat, lng, self.precision);
            if self.seen.contains(&geohash) {
                self.stats.record_duplicate();
                continue;
            }

            self.seen.insert(geohash.clone());
            self.stats.record_emitted();
            return Some(geohash);
        }

        if !self.finished {
            self.finished = true;
            log::debug!(
                "Generation finished: {} grid points, {} inside, {} unique geohashes",
                self.stats.grid_points,
                self.stats.inside_points,
                self.stats.emitted
            );
        }

        None
    }
}

impl FusedIterator for Geohashes<'_> {}
