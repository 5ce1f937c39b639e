//! Offset-addressed label buffer.

use ndarray::Array2;

use super::GridRect;

/// Label values are `0` (unlabeled), `-1` (visited background) or a
/// positive region id.
pub const UNLABELED: i32 = 0;
pub const VISITED_BACKGROUND: i32 = -1;

/// Bounded `i32` buffer covering a [`GridRect`].
///
/// Reads outside the covered area return `default`, writes outside are
/// dropped, so callers may address any integer coordinate.
#[derive(Clone, Debug)]
pub struct LabelGrid {
    cells: Array2<i32>,
    offset_x: i32,
    offset_y: i32,
    default: i32,
}

impl LabelGrid {
    /// A zero-filled grid over `area`, returning `default` out of range.
    pub fn new(area: GridRect, default: i32) -> Self {
        let width = area.width.max(0) as usize;
        let height = area.height.max(0) as usize;
        Self {
            cells: Array2::zeros((height, width)),
            offset_x: area.x,
            offset_y: area.y,
            default,
        }
    }

    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<[usize; 2]> {
        let lx = x as i64 - self.offset_x as i64;
        let ly = y as i64 - self.offset_y as i64;
        if lx < 0 || ly < 0 || lx >= self.width() as i64 || ly >= self.height() as i64 {
            return None;
        }
        Some([ly as usize, lx as usize])
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> i32 {
        match self.index(x, y) {
            Some(idx) => self.cells[idx],
            None => self.default,
        }
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: i32) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = value;
        }
    }

    /// Raw row-major view, row 0 being the top of the covered area.
    pub fn as_array(&self) -> &Array2<i32> {
        &self.cells
    }
}
