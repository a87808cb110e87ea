//! GeoJSON polygon input.
//!
//! Accepts a bare `Polygon` geometry or a `Feature` carrying one. Only the
//! exterior ring is used; interior rings (holes) are ignored. GeoJSON
//! positions are `[longitude, latitude]` and are swapped into vertex order.

use crate::error::{PolyhashError, Result};
use ::geojson::{GeoJson, Geometry, Value};
use polyhash_types::polygon::Polygon;
use polyhash_types::vertex::Vertex;

/// Parse a GeoJSON document into a polygon ring.
///
/// # Examples
///
/// ```rust
/// use polyhash::geojson::polygon_from_geojson;
///
/// let doc = r#"{
///     "type": "Polygon",
///     "coordinates": [[[10.0, 50.0], [10.1, 50.0], [10.1, 50.1], [10.0, 50.0]]]
/// }"#;
///
/// let polygon = polygon_from_geojson(doc)?;
/// assert_eq!(polygon.len(), 3);
/// assert_eq!(polygon.vertices()[1].lng, 10.1);
/// # Ok::<(), polyhash::PolyhashError>(())
/// ```
pub fn polygon_from_geojson(input: &str) -> Result<Polygon> {
    let document: GeoJson = input
        .parse()
        .map_err(|e: ::geojson::Error| PolyhashError::GeoJson(e.to_string()))?;

    match document {
        GeoJson::Geometry(geometry) => polygon_from_geometry(&geometry),
        GeoJson::Feature(feature) => match feature.geometry {
            Some(geometry) => polygon_from_geometry(&geometry),
            None => Err(PolyhashError::GeoJson(
                "Feature has no geometry".to_string(),
            )),
        },
        GeoJson::FeatureCollection(_) => Err(PolyhashError::GeoJson(
            "Expected a Polygon geometry or Feature, got a FeatureCollection".to_string(),
        )),
    }
}

fn polygon_from_geometry(geometry: &Geometry) -> Result<Polygon> {
    let Value::Polygon(rings) = &geometry.value else {
        return Err(PolyhashError::GeoJson(format!(
            "Expected a Polygon geometry, got {}",
            geometry_kind(&geometry.value)
        )));
    };

    let exterior = rings
        .first()
        .ok_or_else(|| PolyhashError::GeoJson("Polygon has no exterior ring".to_string()))?;

    let mut vertices = Vec::with_capacity(exterior.len());
    for (idx, position) in exterior.iter().enumerate() {
        match (position.first(), position.get(1)) {
            (Some(&lng), Some(&lat)) => vertices.push(Vertex::new(lat, lng)),
            _ => {
                return Err(PolyhashError::GeoJson(format!(
                    "Position at index {} needs at least two coordinates",
                    idx
                )));
            }
        }
    }

    // GeoJSON rings repeat the first position at the end
    if vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }

    Ok(Polygon::new(vertices))
}

fn geometry_kind(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_with_polygon() {
        let doc = r#"{
            "type": "Feature",
            "properties": {"name": "block"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[-74.01, 40.70], [-74.00, 40.70], [-74.00, 40.71], [-74.01, 40.71], [-74.01, 40.70]]]
            }
        }"#;

        let polygon = polygon_from_geojson(doc).unwrap();
        assert_eq!(polygon.len(), 4);
        assert_eq!(polygon.vertices()[0], Vertex::new(40.70, -74.01));
    }

    #[test]
    fn test_holes_ignored() {
        let doc = r#"{
            "type": "Polygon",
            "coordinates": [
                [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]],
                [[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 1.0]]
            ]
        }"#;

        let polygon = polygon_from_geojson(doc).unwrap();
        assert_eq!(polygon.len(), 4);
    }

    #[test]
    fn test_rejects_other_geometries() {
        let point = r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#;
        assert!(matches!(
            polygon_from_geojson(point),
            Err(PolyhashError::GeoJson(_))
        ));

        let collection = r#"{"type": "FeatureCollection", "features": []}"#;
        assert!(polygon_from_geojson(collection).is_err());

        assert!(polygon_from_geojson("{ not geojson").is_err());
    }
}
