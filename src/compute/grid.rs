//! Bounding-box grid enumeration.
//!
//! Walks the polygon's bounding box at a fixed step, latitude-major: every
//! longitude of the first row is produced before the latitude advances.
//! Points are produced on demand and never stored.

use polyhash_types::bbox::BoundingBox;
use polyhash_types::polygon::Polygon;
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

/// Slack added before flooring the row/column count so that a bound sitting
/// exactly on a step multiple is not lost to rounding.
const COUNT_EPSILON: f64 = 1e-9;

/// How grid coordinates advance from one point to the next.
///
/// - **Indexed**: the row and column counts are computed up front as
///   `floor((max - min) / step + 1e-9) + 1`, saturating at `u64::MAX`, and
///   each coordinate is `min + i * step`.
///   The last row/column is kept or dropped identically on every platform.
/// - **Accumulate**: `step` is added to a running coordinate while it stays
///   `<= max`. Accumulated rounding error decides whether the final boundary
///   row/column is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GridStepping {
    #[default]
    Indexed,
    Accumulate,
}

#[derive(Debug, Clone)]
enum Cursor {
    Indexed {
        row: u64,
        col: u64,
        rows: u64,
        cols: u64,
    },
    Accumulate {
        lat: f64,
        lng: f64,
    },
    Done,
}

/// Lazy, finite sequence of `(lat, lng)` grid points covering a bounding box.
///
/// # Examples
///
/// ```rust
/// use polyhash::compute::grid::{GridPoints, GridStepping};
/// use polyhash_types::bbox::BoundingBox;
///
/// let bbox = BoundingBox::new(0.0, 0.0002, 10.0, 10.0001);
/// let points: Vec<_> = GridPoints::new(bbox, 1e-4, 1e-4, GridStepping::Indexed).collect();
///
/// // three rows of two columns, latitude-major
/// assert_eq!(points.len(), 6);
/// assert_eq!(points[0], (0.0, 10.0));
/// assert_eq!(points[1].0, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct GridPoints {
    bbox: BoundingBox,
    lat_step: f64,
    lng_step: f64,
    cursor: Cursor,
}

fn step_count(min: f64, max: f64, step: f64) -> u64 {
    // the cast saturates for huge spans over tiny steps
    (((max - min) / step + COUNT_EPSILON).floor() as u64).saturating_add(1)
}

impl GridPoints {
    /// Enumerate `bbox` at the given steps. Non-finite bounds or steps, an
    /// inverted box, or a non-positive step produce an empty sequence.
    pub fn new(bbox: BoundingBox, lat_step: f64, lng_step: f64, stepping: GridStepping) -> Self {
        let usable = bbox.is_finite()
            && bbox.min_lat <= bbox.max_lat
            && bbox.min_lng <= bbox.max_lng
            && lat_step.is_finite()
            && lng_step.is_finite()
            && lat_step > 0.0
            && lng_step > 0.0;

        let cursor = if !usable {
            Cursor::Done
        } else {
            match stepping {
                GridStepping::Indexed => Cursor::Indexed {
                    row: 0,
                    col: 0,
                    rows: step_count(bbox.min_lat, bbox.max_lat, lat_step),
                    cols: step_count(bbox.min_lng, bbox.max_lng, lng_step),
                },
                GridStepping::Accumulate => Cursor::Accumulate {
                    lat: bbox.min_lat,
                    lng: bbox.min_lng,
                },
            }
        };

        Self {
            bbox,
            lat_step,
            lng_step,
            cursor,
        }
    }

    /// Enumerate the bounding box of `polygon`. An empty polygon yields nothing.
    pub fn for_polygon(
        polygon: &Polygon,
        lat_step: f64,
        lng_step: f64,
        stepping: GridStepping,
    ) -> Self {
        match polygon.bounding_box() {
            Some(bbox) => Self::new(bbox, lat_step, lng_step, stepping),
            None => Self::empty(),
        }
    }

    /// A sequence that is already exhausted.
    pub fn empty() -> Self {
        Self {
            bbox: BoundingBox::new(0.0, 0.0, 0.0, 0.0),
            lat_step: 0.0,
            lng_step: 0.0,
            cursor: Cursor::Done,
        }
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bbox
    }
}

impl Iterator for GridPoints {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.cursor {
            Cursor::Done => None,
            Cursor::Indexed {
                row,
                col,
                rows,
                cols,
            } => {
                if *row >= *rows {
                    self.cursor = Cursor::Done;
                    return None;
                }

                let point = (
                    self.bbox.min_lat + *row as f64 * self.lat_step,
                    self.bbox.min_lng + *col as f64 * self.lng_step,
                );

                *col += 1;
                if *col == *cols {
                    *col = 0;
                    *row += 1;
                }

                Some(point)
            }
            Cursor::Accumulate { lat, lng } => loop {
                if *lat > self.bbox.max_lat {
                    self.cursor = Cursor::Done;
                    return None;
                }

                if *lng <= self.bbox.max_lng {
                    let point = (*lat, *lng);
                    let next = *lng + self.lng_step;
                    // Absorbed step: the column would never advance.
                    *lng = if next > *lng { next } else { f64::INFINITY };
                    return Some(point);
                }

                let next = *lat + self.lat_step;
                *lat = if next > *lat { next } else { f64::INFINITY };
                *lng = self.bbox.min_lng;
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.cursor {
            Cursor::Done => (0, Some(0)),
            Cursor::Indexed {
                row,
                col,
                rows,
                cols,
            } => {
                let remaining = (rows - row)
                    .checked_mul(*cols)
                    .and_then(|n| n.checked_sub(*col))
                    .and_then(|n| usize::try_from(n).ok());
                match remaining {
                    Some(n) => (n, Some(n)),
                    None => (usize::MAX, None),
                }
            }
            Cursor::Accumulate { .. } => (0, None),
        }
    }
}

impl FusedIterator for GridPoints {}
