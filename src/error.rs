//! Error types for polygon-to-geohash generation.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PolyhashError>;

#[derive(Debug, Error)]
pub enum PolyhashError {
    /// Rejected by opt-in polygon validation.
    #[error("Invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("Geohash precision must be between 1 and 20, got {0}")]
    InvalidPrecision(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("TOML error: {0}")]
    Toml(String),

    #[cfg(feature = "geojson")]
    #[error("GeoJSON error: {0}")]
    GeoJson(String),
}
