//! Cell visitors consumed by the rasterizers.

use std::collections::HashSet;

use crate::grid::GridPoint;

/// Receives every rasterized cell, in travel order.
///
/// Rasterizers may emit the same cell more than once (overlap pixels, the
/// mirrored quadrants of a zero-radius circle), so visits must be idempotent.
pub trait PixelVisitor {
    fn visit(&mut self, x: i32, y: i32);
}

impl<F> PixelVisitor for F
where
    F: FnMut(i32, i32),
{
    #[inline]
    fn visit(&mut self, x: i32, y: i32) {
        self(x, y)
    }
}

/// Collects the distinct visited cells.
#[derive(Clone, Debug, Default)]
pub struct PointCollector {
    points: HashSet<GridPoint>,
}

impl PointCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &HashSet<GridPoint> {
        &self.points
    }

    pub fn into_points(self) -> HashSet<GridPoint> {
        self.points
    }

    /// Visited cells in row-major order.
    pub fn sorted(&self) -> Vec<GridPoint> {
        let mut pts: Vec<_> = self.points.iter().copied().collect();
        pts.sort_by_key(|p| (p.y, p.x));
        pts
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl PixelVisitor for PointCollector {
    #[inline]
    fn visit(&mut self, x: i32, y: i32) {
        self.points.insert(GridPoint::new(x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_visitor() {
        let mut seen = Vec::new();
        let mut visitor = |x: i32, y: i32| seen.push((x, y));
        visitor.visit(1, 2);
        visitor.visit(1, 2);
        assert_eq!(seen, vec![(1, 2), (1, 2)]);
    }

    #[test]
    fn test_collector_deduplicates() {
        let mut collector = PointCollector::new();
        collector.visit(3, 1);
        collector.visit(0, 2);
        collector.visit(3, 1);
        assert_eq!(collector.points().len(), 2);
        assert_eq!(collector.sorted(), vec![GridPoint::new(3, 1), GridPoint::new(0, 2)]);
        collector.clear();
        assert!(collector.points().is_empty());
    }
}
