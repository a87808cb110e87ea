//! Point-in-polygon classification by ray casting.

use polyhash_types::vertex::Vertex;

/// Even-odd (crossing number) containment test.
///
/// The ring is treated as closed: the first edge runs from the last vertex to
/// the first. For each edge straddling the test point's longitude, the
/// latitude at which the edge crosses that line is compared with the point's
/// latitude, and every crossing beyond the point toggles the result.
///
/// Points lying exactly on an edge get whichever answer the arithmetic gives.
/// Rings with fewer than three vertices classify every point as outside.
///
/// # Examples
///
/// ```rust
/// use polyhash::compute::classify::point_in_polygon;
/// use polyhash_types::vertex::Vertex;
///
/// let triangle = [
///     Vertex::new(0.0, 0.0),
///     Vertex::new(0.0, 4.0),
///     Vertex::new(4.0, 0.0),
/// ];
///
/// assert!(point_in_polygon(1.0, 1.0, &triangle));
/// assert!(!point_in_polygon(10.0, 10.0, &triangle));
/// ```
pub fn point_in_polygon(lat: f64, lng: f64, vertices: &[Vertex]) -> bool {
    let Some(last) = vertices.len().checked_sub(1) else {
        return false;
    };

    let mut inside = false;
    let mut j = last;
    for (i, vi) in vertices.iter().enumerate() {
        let vj = &vertices[j];
        let (xi, yi) = (vi.lat, vi.lng);
        let (xj, yj) = (vj.lat, vj.lng);

        // yi != yj whenever the edge straddles lng, so the division is safe
        if (yi > lng) != (yj > lng) && lat < (xj - xi) * (lng - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(points: &[(f64, f64)]) -> Vec<Vertex> {
        points.iter().copied().map(Vertex::from).collect()
    }

    #[test]
    fn test_triangle() {
        let triangle = ring(&[(0.0, 0.0), (0.0, 4.0), (4.0, 0.0)]);
        assert!(point_in_polygon(1.0, 1.0, &triangle));
        assert!(point_in_polygon(0.5, 3.0, &triangle));
        assert!(!point_in_polygon(10.0, 10.0, &triangle));
        assert!(!point_in_polygon(3.0, 3.0, &triangle));
        assert!(!point_in_polygon(-1.0, 1.0, &triangle));
    }

    #[test]
    fn test_convex_interior_and_outside_bbox() {
        let square = ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);

        for &(lat, lng) in &[(0.5, 0.5), (0.01, 0.99), (0.99, 0.01), (0.25, 0.75)] {
            assert!(point_in_polygon(lat, lng, &square), "({lat}, {lng})");
        }
        for &(lat, lng) in &[(1.5, 0.5), (-0.5, 0.5), (0.5, 1.5), (0.5, -0.5), (2.0, 2.0)] {
            assert!(!point_in_polygon(lat, lng, &square), "({lat}, {lng})");
        }
    }

    #[test]
    fn test_concave() {
        // U shape opening to the north
        let u = ring(&[
            (0.0, 0.0),
            (0.0, 3.0),
            (3.0, 3.0),
            (3.0, 2.0),
            (1.0, 2.0),
            (1.0, 1.0),
            (3.0, 1.0),
            (3.0, 0.0),
        ]);

        assert!(point_in_polygon(0.5, 1.5, &u));
        assert!(point_in_polygon(2.0, 0.5, &u));
        assert!(point_in_polygon(2.0, 2.5, &u));
        assert!(!point_in_polygon(2.0, 1.5, &u));
    }

    #[test]
    fn test_explicitly_closed_ring_matches_open_ring() {
        let open = ring(&[(0.0, 0.0), (0.0, 4.0), (4.0, 0.0)]);
        let closed = ring(&[(0.0, 0.0), (0.0, 4.0), (4.0, 0.0), (0.0, 0.0)]);

        for &(lat, lng) in &[(1.0, 1.0), (3.0, 3.0), (0.2, 3.5), (-1.0, 2.0)] {
            assert_eq!(
                point_in_polygon(lat, lng, &open),
                point_in_polygon(lat, lng, &closed)
            );
        }
    }

    #[test]
    fn test_degenerate_rings_are_empty() {
        assert!(!point_in_polygon(0.0, 0.0, &[]));
        assert!(!point_in_polygon(0.0, 0.0, &ring(&[(0.0, 0.0)])));
        assert!(!point_in_polygon(0.5, 0.5, &ring(&[(0.0, 0.0), (1.0, 1.0)])));
    }

    #[test]
    fn test_deterministic() {
        let triangle = ring(&[(0.0, 0.0), (0.0, 4.0), (4.0, 0.0)]);
        let first = point_in_polygon(1.3, 0.7, &triangle);
        for _ in 0..10 {
            assert_eq!(point_in_polygon(1.3, 0.7, &triangle), first);
        }
    }
}
