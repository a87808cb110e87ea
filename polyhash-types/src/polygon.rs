use crate::bbox::BoundingBox;
use crate::vertex::Vertex;
use serde::{Deserialize, Serialize};

/// An ordered ring of vertices describing a simple polygon.
///
/// The ring is implicitly closed: the last vertex connects back to the first,
/// so callers need not repeat the first vertex. Holes and multi-polygons are
/// not represented.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<Vertex>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Fewer than three vertices enclose no area.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// True when every vertex has finite coordinates.
    pub fn is_finite(&self) -> bool {
        self.vertices.iter().all(Vertex::is_finite)
    }

    /// The minimal lat/lng box around all vertices, or `None` for an empty polygon.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyhash_types::polygon::Polygon;
    ///
    /// let triangle = Polygon::from(vec![[0.0, 0.0], [0.0, 4.0], [4.0, 0.0]]);
    /// let bbox = triangle.bounding_box().unwrap();
    /// assert_eq!((bbox.min_lat, bbox.max_lat), (0.0, 4.0));
    /// assert_eq!((bbox.min_lng, bbox.max_lng), (0.0, 4.0));
    ///
    /// assert!(Polygon::default().bounding_box().is_none());
    /// ```
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = self.vertices.first()?;
        let init = BoundingBox::new(first.lat, first.lat, first.lng, first.lng);

        Some(self.vertices[1..].iter().fold(init, |bbox, v| {
            BoundingBox::new(
                bbox.min_lat.min(v.lat),
                bbox.max_lat.max(v.lat),
                bbox.min_lng.min(v.lng),
                bbox.max_lng.max(v.lng),
            )
        }))
    }
}

impl<V: Into<Vertex>> FromIterator<V> for Polygon {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<Vertex>> for Polygon {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }
}

impl From<Vec<(f64, f64)>> for Polygon {
    fn from(pairs: Vec<(f64, f64)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<Vec<[f64; 2]>> for Polygon {
    fn from(pairs: Vec<[f64; 2]>) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<&[[f64; 2]]> for Polygon {
    fn from(pairs: &[[f64; 2]]) -> Self {
        pairs.iter().copied().collect()
    }
}

/// Takes the exterior ring only. `geo` stores rings explicitly closed, so the
/// trailing copy of the first coordinate is dropped.
impl From<&geo::Polygon> for Polygon {
    fn from(polygon: &geo::Polygon) -> Self {
        let mut vertices: Vec<Vertex> = polygon
            .exterior()
            .coords()
            .map(|c| Vertex::from(*c))
            .collect();

        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }

        Self { vertices }
    }
}

impl From<geo::Polygon> for Polygon {
    fn from(polygon: geo::Polygon) -> Self {
        Self::from(&polygon)
    }
}
