//! Text-backed height maps and value conversion.

use std::collections::HashMap;

use ndarray::Array2;

use super::HeightMap;
use crate::error::{GeomError, Result};

/// Height of cells outside the text block.
const BLANK: i32 = ' ' as i32;

/// Height map whose heights are the character codes of text rows.
///
/// Row `z` of the text is grid row `z`, column `x` is grid column `x`.
/// Every cell outside the block reads as a space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiHeightMap {
    cells: Array2<i32>,
}

impl AsciiHeightMap {
    /// # Errors
    /// [`GeomError::RaggedRows`] if the rows differ in length (in chars).
    pub fn new<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<i32>> = rows
            .into_iter()
            .map(|row| row.as_ref().chars().map(|c| c as i32).collect())
            .collect();

        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GeomError::RaggedRows {
                row,
                expected: width,
                actual: bad.len(),
            });
        }

        let height = rows.len();
        let flat: Vec<i32> = rows.into_iter().flatten().collect();
        let actual = flat.len();
        let cells = Array2::from_shape_vec((height, width), flat).map_err(|_| GeomError::SizeMismatch {
            expected: width * height,
            actual,
        })?;
        Ok(Self { cells })
    }

    /// Columns per row.
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows.
    pub fn depth(&self) -> usize {
        self.cells.nrows()
    }
}

impl HeightMap for AsciiHeightMap {
    fn height(&self, x: i32, z: i32) -> i32 {
        if x < 0 || z < 0 {
            return BLANK;
        }
        self.cells
            .get((z as usize, x as usize))
            .copied()
            .unwrap_or(BLANK)
    }
}

/// Replaces selected heights of a wrapped map; other heights pass through.
#[derive(Clone, Debug)]
pub struct ConvertingHeightMap<H> {
    inner: H,
    conversions: HashMap<i32, i32>,
}

impl<H: HeightMap> ConvertingHeightMap<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            conversions: HashMap::new(),
        }
    }

    /// Report `to` wherever the wrapped map reports `from`.
    pub fn add_conversion(&mut self, from: i32, to: i32) {
        self.conversions.insert(from, to);
    }

    pub fn with_conversion(mut self, from: i32, to: i32) -> Self {
        self.add_conversion(from, to);
        self
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H: HeightMap> HeightMap for ConvertingHeightMap<H> {
    fn height(&self, x: i32, z: i32) -> i32 {
        let value = self.inner.height(x, z);
        self.conversions.get(&value).copied().unwrap_or(value)
    }
}
