//! Map a simple polygon onto the fixed-length geohash cells it covers.
//!
//! The polygon's bounding box is sampled on a regular lat/lng grid. Every
//! sample inside the polygon (even-odd ray casting) is encoded as a standard
//! geohash, and each distinct geohash is yielded once, in the order the grid
//! first reaches it. Generation is lazy: nothing past the last requested
//! cell is computed.
//!
//! ```rust
//! use polyhash::GeohashGenerator;
//!
//! // vertices are (latitude, longitude); the ring closes itself
//! let generator = GeohashGenerator::builder()
//!     .precision(7)
//!     .build(vec![(51.500, -0.130), (51.500, -0.120), (51.506, -0.125)])?;
//!
//! for geohash in generator.generate().take(5) {
//!     assert_eq!(geohash.len(), 7);
//! }
//! # Ok::<(), polyhash::PolyhashError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod generator;

#[cfg(feature = "geojson")]
pub mod geojson;

pub use builder::GeneratorBuilder;
pub use config::{Config, MAX_PRECISION};
pub use error::{PolyhashError, Result};
pub use generator::{GeohashGenerator, Geohashes};

pub use compute::{GEOHASH_ALPHABET, GridPoints, GridStepping, encode, point_in_polygon};

pub use geo::{Coord, Point};
pub use polyhash_types::bbox::BoundingBox;
pub use polyhash_types::polygon::Polygon;
pub use polyhash_types::stats::GenerationStats;
pub use polyhash_types::vertex::Vertex;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{
        Config, GeneratorBuilder, GeohashGenerator, GridStepping, PolyhashError, Polygon, Result,
        Vertex,
    };
}
