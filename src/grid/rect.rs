//! Rectangular grid areas.

use super::GridPoint;

/// Axis-aligned cell rectangle `[x, x + width) × [y, y + height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl GridRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanning both corners, inclusive.
    pub fn from_corners(a: GridPoint, b: GridPoint) -> Self {
        let min_x = a.x.min(b.x);
        let min_y = a.y.min(b.y);
        Self::new(
            min_x,
            min_y,
            a.x.max(b.x) - min_x + 1,
            a.y.max(b.y) - min_y + 1,
        )
    }

    #[inline]
    pub const fn min_x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn min_y(&self) -> i32 {
        self.y
    }

    /// Last column inside the rectangle.
    #[inline]
    pub const fn max_x(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Last row inside the rectangle.
    #[inline]
    pub const fn max_y(&self) -> i32 {
        self.y + self.height - 1
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }

    #[inline]
    pub const fn contains_point(&self, p: GridPoint) -> bool {
        self.contains(p.x, p.y)
    }

    /// Cell on the outermost ring of the rectangle.
    pub const fn is_on_border(&self, p: GridPoint) -> bool {
        self.contains_point(p)
            && (p.x == self.min_x() || p.x == self.max_x() || p.y == self.min_y() || p.y == self.max_y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_max() {
        let rc = GridRect::new(-2, 3, 4, 2);
        assert_eq!(rc.max_x(), 1);
        assert_eq!(rc.max_y(), 4);
        assert!(rc.contains(1, 4));
        assert!(!rc.contains(2, 4));
        assert!(!rc.contains(-3, 3));
    }

    #[test]
    fn test_border() {
        let rc = GridRect::new(0, 0, 4, 4);
        assert!(rc.is_on_border(GridPoint::new(0, 2)));
        assert!(rc.is_on_border(GridPoint::new(3, 3)));
        assert!(!rc.is_on_border(GridPoint::new(1, 2)));
        assert!(!rc.is_on_border(GridPoint::new(4, 0)));
    }

    #[test]
    fn test_from_corners() {
        let rc = GridRect::from_corners(GridPoint::new(5, 1), GridPoint::new(2, 4));
        assert_eq!(rc, GridRect::new(2, 1, 4, 4));
        assert!(GridRect::new(0, 0, 0, 3).is_empty());
    }
}
