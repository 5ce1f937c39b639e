//! Integer polygon with half-open even-odd containment.

use crate::grid::{GridPoint, GridRect};

/// Closed polygon over integer vertices.
///
/// Containment is half-open, as in the usual scanline convention: a point exactly on the
/// boundary is inside only when the space immediately to its increasing-x
/// side is inside, or when it lies on a horizontal edge whose increasing-y
/// side is inside. Two polygons sharing an edge therefore never both claim
/// the cells along it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    xs: Vec<i32>,
    ys: Vec<i32>,
    bounds: Option<GridRect>,
}

impl Polygon {
    pub fn new<'a, I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = &'a GridPoint>,
    {
        let (xs, ys): (Vec<i32>, Vec<i32>) = vertices.into_iter().map(|p| (p.x, p.y)).unzip();
        let bounds = bounding_box(&xs, &ys);
        Self { xs, ys, bounds }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.xs.iter().zip(&self.ys).map(|(&x, &y)| GridPoint::new(x, y))
    }

    /// Bounds spanning `min..max` of the vertices, so the maximum column and
    /// row themselves fall outside.
    pub fn bounds(&self) -> Option<GridRect> {
        self.bounds
    }

    /// Even-odd crossing test.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let n = self.xs.len();
        if n <= 2 {
            return false;
        }
        match self.bounds {
            Some(b) if inside_bounds(&b, x, y) => {}
            _ => return false,
        }

        let mut hits = 0u32;
        let mut last_x = self.xs[n - 1];
        let mut last_y = self.ys[n - 1];

        for i in 0..n {
            let cur_x = self.xs[i];
            let cur_y = self.ys[i];
            let (prev_x, prev_y) = (last_x, last_y);
            last_x = cur_x;
            last_y = cur_y;

            if cur_y == prev_y {
                continue;
            }

            let left_x = if cur_x < prev_x {
                if x >= prev_x as f64 {
                    continue;
                }
                cur_x
            } else {
                if x >= cur_x as f64 {
                    continue;
                }
                prev_x
            };

            let (test1, test2) = if cur_y < prev_y {
                if y < cur_y as f64 || y >= prev_y as f64 {
                    continue;
                }
                if x < left_x as f64 {
                    hits += 1;
                    continue;
                }
                (x - cur_x as f64, y - cur_y as f64)
            } else {
                if y < prev_y as f64 || y >= cur_y as f64 {
                    continue;
                }
                if x < left_x as f64 {
                    hits += 1;
                    continue;
                }
                (x - prev_x as f64, y - prev_y as f64)
            };

            if test1 < test2 / (prev_y - cur_y) as f64 * (prev_x - cur_x) as f64 {
                hits += 1;
            }
        }

        hits & 1 != 0
    }
}

fn bounding_box(xs: &[i32], ys: &[i32]) -> Option<GridRect> {
    let min_x = *xs.iter().min()?;
    let max_x = *xs.iter().max()?;
    let min_y = *ys.iter().min()?;
    let max_y = *ys.iter().max()?;
    Some(GridRect::new(min_x, min_y, max_x - min_x, max_y - min_y))
}

#[inline]
fn inside_bounds(b: &GridRect, x: f64, y: f64) -> bool {
    x >= b.x as f64
        && y >= b.y as f64
        && x < (b.x + b.width) as f64
        && y < (b.y + b.height) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: i32, y0: i32, x1: i32, y1: i32) -> Polygon {
        let pts = [
            GridPoint::new(x0, y0),
            GridPoint::new(x1, y0),
            GridPoint::new(x1, y1),
            GridPoint::new(x0, y1),
        ];
        Polygon::new(&pts)
    }

    #[test]
    fn test_half_open_square() {
        let poly = square(2, 3, 5, 6);
        assert!(poly.contains(2.0, 3.0));
        assert!(poly.contains(4.0, 5.0));
        assert!(poly.contains(4.9, 5.9));
        assert!(!poly.contains(5.0, 4.0));
        assert!(!poly.contains(3.0, 6.0));
        assert!(!poly.contains(1.9, 4.0));
    }

    #[test]
    fn test_shared_edge_claimed_once() {
        let left = square(0, 0, 4, 4);
        let right = square(4, 0, 8, 4);
        for y in 0..4 {
            for x in 0..8 {
                let (fx, fy) = (x as f64, y as f64);
                assert!(left.contains(fx, fy) ^ right.contains(fx, fy), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_triangle() {
        let pts = [GridPoint::new(0, 0), GridPoint::new(10, 0), GridPoint::new(0, 10)];
        let poly = Polygon::new(&pts);
        assert!(poly.contains(1.0, 1.0));
        assert!(poly.contains(4.0, 5.5));
        assert!(!poly.contains(6.0, 6.0));
    }

    #[test]
    fn test_degenerate() {
        let pts = [GridPoint::new(0, 0), GridPoint::new(4, 4)];
        assert!(!Polygon::new(&pts).contains(1.0, 1.0));
        assert!(Polygon::new(&Vec::<GridPoint>::new()).bounds().is_none());
    }
}
