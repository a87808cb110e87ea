//! Opt-in validation for polygon vertices.

use crate::error::{PolyhashError, Result};
use polyhash_types::polygon::Polygon;
use polyhash_types::vertex::Vertex;

/// Validates a vertex has finite, in-range latitude and longitude.
///
/// Latitude: [-90.0, 90.0], Longitude: [-180.0, 180.0]
///
/// # Examples
///
/// ```
/// use polyhash::compute::validation::validate_vertex;
/// use polyhash_types::vertex::Vertex;
///
/// assert!(validate_vertex(&Vertex::new(40.7128, -74.0060)).is_ok());
/// assert!(validate_vertex(&Vertex::new(95.0, -74.0)).is_err());
/// assert!(validate_vertex(&Vertex::new(40.0, f64::NAN)).is_err());
/// ```
pub fn validate_vertex(vertex: &Vertex) -> Result<()> {
    let (lat, lng) = (vertex.lat, vertex.lng);

    if !lat.is_finite() {
        return Err(PolyhashError::InvalidPolygon(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !lng.is_finite() {
        return Err(PolyhashError::InvalidPolygon(format!(
            "Longitude must be finite, got: {}",
            lng
        )));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(PolyhashError::InvalidPolygon(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    if !(-180.0..=180.0).contains(&lng) {
        return Err(PolyhashError::InvalidPolygon(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lng
        )));
    }

    Ok(())
}

/// Validates that a polygon encloses an area and every vertex is usable.
///
/// # Examples
///
/// ```
/// use polyhash::compute::validation::validate_polygon;
/// use polyhash_types::polygon::Polygon;
///
/// let square = Polygon::from(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
/// assert!(validate_polygon(&square).is_ok());
///
/// let segment = Polygon::from(vec![(0.0, 0.0), (1.0, 1.0)]);
/// assert!(validate_polygon(&segment).is_err());
/// ```
pub fn validate_polygon(polygon: &Polygon) -> Result<()> {
    if polygon.is_degenerate() {
        return Err(PolyhashError::InvalidPolygon(format!(
            "Polygon needs at least 3 vertices, got: {}",
            polygon.len()
        )));
    }

    for (idx, vertex) in polygon.vertices().iter().enumerate() {
        validate_vertex(vertex).map_err(|e| {
            PolyhashError::InvalidPolygon(format!("Vertex at index {}: {}", idx, e))
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_vertices() {
        assert!(validate_vertex(&Vertex::new(51.5074, -0.1278)).is_ok());
        assert!(validate_vertex(&Vertex::new(35.6895, 139.6917)).is_ok());

        // Edge cases
        assert!(validate_vertex(&Vertex::new(90.0, 0.0)).is_ok());
        assert!(validate_vertex(&Vertex::new(-90.0, 0.0)).is_ok());
        assert!(validate_vertex(&Vertex::new(0.0, 180.0)).is_ok());
        assert!(validate_vertex(&Vertex::new(0.0, -180.0)).is_ok());
    }

    #[test]
    fn test_out_of_range() {
        assert!(validate_vertex(&Vertex::new(90.1, 0.0)).is_err());
        assert!(validate_vertex(&Vertex::new(-95.0, 0.0)).is_err());
        assert!(validate_vertex(&Vertex::new(0.0, 180.1)).is_err());
        assert!(validate_vertex(&Vertex::new(0.0, -200.0)).is_err());
    }

    #[test]
    fn test_non_finite() {
        assert!(validate_vertex(&Vertex::new(f64::NAN, 0.0)).is_err());
        assert!(validate_vertex(&Vertex::new(0.0, f64::NAN)).is_err());
        assert!(validate_vertex(&Vertex::new(f64::INFINITY, 0.0)).is_err());
        assert!(validate_vertex(&Vertex::new(0.0, f64::NEG_INFINITY)).is_err());
    }

    #[test]
    fn test_polygon_reports_vertex_index() {
        let poly = Polygon::from(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 999.0)]);
        let err = validate_polygon(&poly).unwrap_err();
        assert!(err.to_string().contains("index 2"), "{err}");
    }

    #[test]
    fn test_polygon_too_few_vertices() {
        assert!(validate_polygon(&Polygon::default()).is_err());
        assert!(validate_polygon(&Polygon::from(vec![(0.0, 0.0)])).is_err());
    }
}
