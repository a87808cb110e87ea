//! # polyhash-types
//!
//! Geometry value types shared by the polyhash generator:
//!
//! - **Vertex**: a latitude/longitude pair
//! - **Polygon**: an ordered, implicitly closed ring of vertices
//! - **BoundingBox**: the axis-aligned lat/lng box around a polygon
//! - **GenerationStats**: counters describing one generation run
//!
//! Coordinates are always given latitude first. Conversions to and from the
//! `geo` crate swap into its `x = longitude, y = latitude` convention.
//!
//! ## Examples
//!
//! ```rust
//! use polyhash_types::polygon::Polygon;
//!
//! let square = Polygon::from(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
//! let bbox = square.bounding_box().unwrap();
//! assert_eq!(bbox.max_lat, 1.0);
//! ```

pub mod bbox;
pub mod polygon;
pub mod stats;
pub mod vertex;
