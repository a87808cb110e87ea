use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

/// A polygon vertex in degrees, latitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub lat: f64,
    pub lng: f64,
}

impl Vertex {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both coordinates are neither NaN nor infinite.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<(f64, f64)> for Vertex {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Vertex {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coord> for Vertex {
    fn from(coord: Coord) -> Self {
        Self {
            lat: coord.y,
            lng: coord.x,
        }
    }
}

impl From<Point> for Vertex {
    fn from(point: Point) -> Self {
        Self {
            lat: point.y(),
            lng: point.x(),
        }
    }
}

impl From<Vertex> for Coord {
    fn from(vertex: Vertex) -> Self {
        geo::coord! { x: vertex.lng, y: vertex.lat }
    }
}

impl From<Vertex> for Point {
    fn from(vertex: Vertex) -> Self {
        Point::new(vertex.lng, vertex.lat)
    }
}
