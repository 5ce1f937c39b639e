//! Filled and outlined circles around a centre cell.

use super::PixelVisitor;

/// Visit every cell whose centre lies within `radius + 0.5` of the centre.
///
/// Each cell is emitted once per quadrant it is mirrored into, so cells on
/// the axes are visited more than once.
pub fn iterate_filled_circle<V>(cx: i32, cy: i32, radius: i32, visitor: &mut V)
where
    V: PixelVisitor + ?Sized,
{
    let limit = (radius as f64 + 0.5) * (radius as f64 + 0.5);
    for y in 0..=radius {
        for x in 0..=radius {
            let dist = (x as f64) * (x as f64) + (y as f64) * (y as f64);
            if dist > limit {
                break;
            }
            visitor.visit(cx + x, cy + y);
            visitor.visit(cx - x, cy + y);
            visitor.visit(cx + x, cy - y);
            visitor.visit(cx - x, cy - y);
        }
    }
}

/// Visit the one-cell outline of a circle (Horn's algorithm).
///
/// Walks one octant and mirrors each cell into all eight.
pub fn iterate_circle<V>(cx: i32, cy: i32, radius: i32, visitor: &mut V)
where
    V: PixelVisitor + ?Sized,
{
    let mut d = -radius;
    let mut x = radius;
    let mut y = 0;
    while y <= x {
        visitor.visit(cx + x, cy + y);
        visitor.visit(cx - x, cy + y);
        visitor.visit(cx - x, cy - y);
        visitor.visit(cx + x, cy - y);
        visitor.visit(cx + y, cy + x);
        visitor.visit(cx - y, cy + x);
        visitor.visit(cx - y, cy - x);
        visitor.visit(cx + y, cy - x);

        d += 2 * y + 1;
        y += 1;
        if d > 0 {
            d += -2 * x + 2;
            x -= 1;
        }
    }
}

/// Dispatch to [`iterate_filled_circle`] or [`iterate_circle`].
pub fn visit_circle<V>(cx: i32, cy: i32, radius: i32, visitor: &mut V, filled: bool)
where
    V: PixelVisitor + ?Sized,
{
    if filled {
        iterate_filled_circle(cx, cy, radius, visitor);
    } else {
        iterate_circle(cx, cy, radius, visitor);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::grid::GridPoint;
    use crate::raster::PointCollector;

    fn emissions(radius: i32, filled: bool) -> (usize, HashSet<GridPoint>) {
        let mut count = 0;
        let mut cells = PointCollector::new();
        let mut visitor = |x: i32, y: i32| {
            count += 1;
            cells.visit(x, y);
        };
        visit_circle(0, 0, radius, &mut visitor, filled);
        (count, cells.into_points())
    }

    #[test]
    fn test_emission_counts() {
        // (radius, filled emissions, filled cells, outline emissions, outline cells)
        let table = [
            (0, 4, 1, 8, 1),
            (1, 16, 9, 16, 8),
            (2, 32, 21, 16, 12),
            (3, 52, 37, 24, 16),
            (4, 88, 69, 32, 24),
            (5, 120, 97, 32, 28),
            (6, 164, 137, 40, 36),
        ];
        for (r, fe, fc, oe, oc) in table {
            let (filled_count, filled) = emissions(r, true);
            let (outline_count, outline) = emissions(r, false);
            assert_eq!((filled_count, filled.len()), (fe, fc), "filled r={r}");
            assert_eq!((outline_count, outline.len()), (oe, oc), "outline r={r}");
            assert!(outline.is_subset(&filled), "r={r}");
        }
    }

    #[test]
    fn test_filled_radius_two() {
        let (_, cells) = emissions(2, true);
        let expected: HashSet<GridPoint> = (-2..=2)
            .flat_map(|y| (-2..=2).map(move |x| GridPoint::new(x, y)))
            .filter(|p| p.x.abs() != 2 || p.y.abs() != 2)
            .collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_outline_radius_three() {
        let (_, cells) = emissions(3, false);
        let mut expected = HashSet::new();
        for t in -1..=1 {
            expected.insert(GridPoint::new(3, t));
            expected.insert(GridPoint::new(-3, t));
            expected.insert(GridPoint::new(t, 3));
            expected.insert(GridPoint::new(t, -3));
        }
        for (x, y) in [(2, 2), (-2, 2), (2, -2), (-2, -2)] {
            expected.insert(GridPoint::new(x, y));
        }
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_dispatch_matches_direct_calls() {
        for filled in [true, false] {
            let mut direct = Vec::new();
            let mut push = |x: i32, y: i32| direct.push((x, y));
            if filled {
                iterate_filled_circle(3, 2, 5, &mut push);
            } else {
                iterate_circle(3, 2, 5, &mut push);
            }
            let mut dispatched = Vec::new();
            visit_circle(3, 2, 5, &mut |x: i32, y: i32| dispatched.push((x, y)), filled);
            assert_eq!(direct, dispatched);
        }
    }

    #[test]
    fn test_negative_radius_draws_nothing() {
        let mut count = 0;
        visit_circle(0, 0, -1, &mut |_: i32, _: i32| count += 1, true);
        visit_circle(0, 0, -3, &mut |_: i32, _: i32| count += 1, false);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_centre_offset() {
        let mut cells = PointCollector::new();
        iterate_filled_circle(10, -4, 1, &mut cells);
        assert!(cells.points().contains(&GridPoint::new(9, -5)));
        assert!(cells.points().contains(&GridPoint::new(11, -3)));
        assert_eq!(cells.points().len(), 9);
    }
}
