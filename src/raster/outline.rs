//! Endless walk along the border cells of a rectangle.

use crate::error::{GeomError, Result};
use crate::grid::{GridPoint, GridRect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Heading {
    PosX,
    PosY,
    NegX,
    NegY,
}

/// Border walk of a rectangle, clockwise or counter-clockwise.
///
/// Clockwise is screen orientation: along the top edge toward +x, then down
/// the right edge toward +y.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutlineIterator {
    rect: GridRect,
    clockwise: bool,
    start: GridPoint,
    heading: Heading,
}

impl OutlineIterator {
    /// Walk starting at `start`, which must be a border cell of `rect`.
    ///
    /// # Errors
    /// - [`GeomError::DegenerateRect`] if `rect` is narrower or shorter than 2
    /// - [`GeomError::StartNotOnBorder`] if `start` is not a border cell
    pub fn new(rect: GridRect, clockwise: bool, start: GridPoint) -> Result<Self> {
        if rect.width < 2 || rect.height < 2 {
            return Err(GeomError::DegenerateRect {
                width: rect.width,
                height: rect.height,
            });
        }
        let not_on_border = GeomError::StartNotOnBorder {
            x: start.x,
            y: start.y,
        };
        if !rect.contains_point(start) {
            return Err(not_on_border);
        }

        // each side owns the corner it leaves from, so a corner start
        // heads along the side that continues the rotation
        let (x, y) = (start.x, start.y);
        let (min_x, min_y, max_x, max_y) = (rect.min_x(), rect.min_y(), rect.max_x(), rect.max_y());
        let heading = if clockwise {
            if y == min_y && x < max_x {
                Heading::PosX
            } else if x == max_x && y < max_y {
                Heading::PosY
            } else if y == max_y && x > min_x {
                Heading::NegX
            } else if x == min_x && y > min_y {
                Heading::NegY
            } else {
                return Err(not_on_border);
            }
        } else if x == min_x && y < max_y {
            Heading::PosY
        } else if y == max_y && x < max_x {
            Heading::PosX
        } else if x == max_x && y > min_y {
            Heading::NegY
        } else if y == min_y && x > min_x {
            Heading::NegX
        } else {
            return Err(not_on_border);
        };

        Ok(Self {
            rect,
            clockwise,
            start,
            heading,
        })
    }

    /// Walk starting at the minimum corner of `rect`.
    pub fn from_min_corner(rect: GridRect, clockwise: bool) -> Result<Self> {
        Self::new(rect, clockwise, GridPoint::new(rect.min_x(), rect.min_y()))
    }

    pub fn rect(&self) -> GridRect {
        self.rect
    }

    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    /// Number of distinct border cells, i.e. the period of [`iter`](Self::iter).
    pub fn length(&self) -> usize {
        (2 * self.rect.width + 2 * self.rect.height - 4) as usize
    }

    /// Endless iterator over the border cells, starting at the start cell.
    pub fn iter(&self) -> OutlineWalk {
        OutlineWalk {
            rect: self.rect,
            clockwise: self.clockwise,
            heading: self.heading,
            pos: self.start,
        }
    }
}

impl IntoIterator for &OutlineIterator {
    type Item = GridPoint;
    type IntoIter = OutlineWalk;

    fn into_iter(self) -> OutlineWalk {
        self.iter()
    }
}

/// Cursor of an [`OutlineIterator`]; never returns `None`.
#[derive(Clone, Debug)]
pub struct OutlineWalk {
    rect: GridRect,
    clockwise: bool,
    heading: Heading,
    pos: GridPoint,
}

impl Iterator for OutlineWalk {
    type Item = GridPoint;

    fn next(&mut self) -> Option<GridPoint> {
        let current = self.pos;
        let cw = self.clockwise;
        match self.heading {
            Heading::PosX => {
                self.pos.x += 1;
                if self.pos.x == self.rect.max_x() {
                    self.heading = if cw { Heading::PosY } else { Heading::NegY };
                }
            }
            Heading::PosY => {
                self.pos.y += 1;
                if self.pos.y == self.rect.max_y() {
                    self.heading = if cw { Heading::NegX } else { Heading::PosX };
                }
            }
            Heading::NegX => {
                self.pos.x -= 1;
                if self.pos.x == self.rect.min_x() {
                    self.heading = if cw { Heading::NegY } else { Heading::PosY };
                }
            }
            Heading::NegY => {
                self.pos.y -= 1;
                if self.pos.y == self.rect.min_y() {
                    self.heading = if cw { Heading::PosX } else { Heading::NegX };
                }
            }
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn walk(rect: GridRect, clockwise: bool, start: (i32, i32), n: usize) -> Vec<(i32, i32)> {
        OutlineIterator::new(rect, clockwise, start.into())
            .unwrap()
            .iter()
            .take(n)
            .map(|p| (p.x, p.y))
            .collect()
    }

    #[test]
    fn test_clockwise_small_rect() {
        let rect = GridRect::new(0, 0, 3, 2);
        let it = OutlineIterator::from_min_corner(rect, true).unwrap();
        assert_eq!(it.length(), 6);
        let cells: Vec<_> = it.iter().take(12).map(|p| (p.x, p.y)).collect();
        let lap = vec![(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)];
        assert_eq!(&cells[..6], lap.as_slice());
        assert_eq!(&cells[6..], lap.as_slice());
    }

    #[test]
    fn test_counter_clockwise_reverses_lap() {
        let rect = GridRect::new(-2, 5, 4, 3);
        let cw = walk(rect, true, (-2, 5), 10);
        let ccw = walk(rect, false, (-2, 5), 10);
        let mut reversed = cw[1..].to_vec();
        reversed.reverse();
        assert_eq!(ccw[0], (-2, 5));
        assert_eq!(&ccw[1..], reversed.as_slice());
    }

    #[test]
    fn test_one_lap_covers_border_once() {
        let rect = GridRect::new(3, -1, 5, 4);
        for clockwise in [true, false] {
            for start in [(3, -1), (7, -1), (7, 2), (3, 2), (5, -1), (7, 0), (4, 2), (3, 1)] {
                let it = OutlineIterator::new(rect, clockwise, start.into()).unwrap();
                let lap: HashSet<GridPoint> = it.iter().take(it.length()).collect();
                assert_eq!(lap.len(), it.length(), "start {start:?}");
                assert!(lap.iter().all(|p| rect.is_on_border(*p)));
                assert_eq!(it.iter().nth(it.length()), Some(GridPoint::from(start)));
            }
        }
    }

    #[test]
    fn test_corner_start_continues_rotation() {
        let rect = GridRect::new(0, 0, 4, 4);
        assert_eq!(walk(rect, true, (3, 0), 2), vec![(3, 0), (3, 1)]);
        assert_eq!(walk(rect, false, (3, 0), 2), vec![(3, 0), (2, 0)]);
        assert_eq!(walk(rect, true, (0, 3), 2), vec![(0, 3), (0, 2)]);
        assert_eq!(walk(rect, false, (0, 0), 2), vec![(0, 0), (0, 1)]);
    }

    #[test]
    fn test_invalid_start() {
        let rect = GridRect::new(0, 0, 4, 4);
        assert_eq!(
            OutlineIterator::new(rect, true, GridPoint::new(1, 1)),
            Err(GeomError::StartNotOnBorder { x: 1, y: 1 })
        );
        assert!(OutlineIterator::new(rect, false, GridPoint::new(9, 0)).is_err());
    }

    #[test]
    fn test_degenerate_rect() {
        assert_eq!(
            OutlineIterator::from_min_corner(GridRect::new(0, 0, 1, 5), true),
            Err(GeomError::DegenerateRect { width: 1, height: 5 })
        );
    }
}
