//! Traced contours with cached corner simplification.

use std::cell::OnceCell;

use super::polygon::Polygon;
use crate::grid::GridPoint;

/// An ordered, closed sequence of grid points.
///
/// The sequence may touch itself (a one-cell-wide neck is walked twice).
/// The simplified curve and the polygon built from it are computed on first
/// use and dropped whenever a point is appended.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contour {
    points: Vec<GridPoint>,
    #[cfg_attr(feature = "serde", serde(skip))]
    simplified: OnceCell<Vec<GridPoint>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    polygon: OnceCell<Polygon>,
}

impl Contour {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<GridPoint>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    pub fn add_point(&mut self, p: GridPoint) {
        self.points.push(p);
        self.simplified = OnceCell::new();
        self.polygon = OnceCell::new();
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether `p` is one of the traced points (linear scan).
    pub fn contains_point(&self, p: GridPoint) -> bool {
        self.points.contains(&p)
    }

    /// Only the points where the curve changes direction.
    pub fn simplified_curve(&self) -> &[GridPoint] {
        self.simplified.get_or_init(|| simplify(&self.points))
    }

    /// Polygon over the simplified curve.
    pub fn polygon(&self) -> &Polygon {
        self.polygon.get_or_init(|| Polygon::new(self.simplified_curve()))
    }

    /// Point-in-polygon test; see [`Polygon::contains`] for the boundary rule.
    pub fn is_inside(&self, x: f64, y: f64) -> bool {
        self.polygon().contains(x, y)
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Contour {
        self.points
            .iter()
            .map(|p| GridPoint::new(p.x + dx, p.y + dy))
            .collect()
    }

    pub fn scale(&self, factor: i32) -> Contour {
        self.points
            .iter()
            .map(|p| GridPoint::new(p.x * factor, p.y * factor))
            .collect()
    }
}

impl PartialEq for Contour {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl Eq for Contour {}

impl FromIterator<GridPoint> for Contour {
    fn from_iter<I: IntoIterator<Item = GridPoint>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

/// Keep a point when the step into it differs from the step out of it.
/// The comparison wraps around, so the result does not depend on where the
/// closed curve starts.
fn simplify(pts: &[GridPoint]) -> Vec<GridPoint> {
    let (first, last) = match (pts.first(), pts.last()) {
        (Some(&f), Some(&l)) if pts.len() >= 2 => (f, l),
        _ => return pts.to_vec(),
    };

    let mut result = Vec::new();
    let mut prev = last;
    let mut prev_dir = first - last;

    for &p in pts {
        let dir = p - prev;
        if dir != prev_dir {
            result.push(prev);
            prev_dir = dir;
        }
        prev = p;
    }

    // closing step back to the first point
    if first - prev != prev_dir {
        result.push(prev);
    }

    result
}
