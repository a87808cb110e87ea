//! The three pure stages of generation.
//!
//! - [`grid`]: bounding-box grid enumeration
//! - [`classify`]: ray-casting point-in-polygon test
//! - [`encode`]: lat/lng to geohash bit interleaving
//!
//! [`validation`] holds the opt-in polygon checks applied at construction.

pub mod classify;
pub mod encode;
pub mod grid;
pub mod validation;

pub use classify::point_in_polygon;
pub use encode::{GEOHASH_ALPHABET, encode};
pub use grid::{GridPoints, GridStepping};
