//! WebAssembly exports for gridtrace.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! ## Point Encoding
//!
//! Point lists are returned as flat `Int32Array`s of `x, y` pairs.
//! Contour sets prefix each contour with its point count:
//! `[outer_count, inner_count, n0, x, y, ..., n1, x, y, ...]`,
//! outer contours first.

use ndarray::ArrayView2;
use wasm_bindgen::prelude::*;

use crate::contour::{trace_grid, Contour};
use crate::error::GeomError;
use crate::grid::GridPoint;
use crate::raster::{self, Overlap, PointCollector, ThicknessMode};

fn js_error(err: GeomError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn flatten(points: &[GridPoint]) -> Vec<i32> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

fn push_contours(out: &mut Vec<i32>, contours: &[Contour]) {
    for contour in contours {
        out.push(contour.len() as i32);
        out.extend(contour.points().iter().flat_map(|p| [p.x, p.y]));
    }
}

// ============================================================================
// Contour Tracing
// ============================================================================

/// Trace outer and inner contours of a height field.
///
/// # Arguments
/// * `heights` - Row-major heights (length = width * height)
/// * `width` - Grid width in cells
/// * `height` - Grid height in cells
/// * `threshold` - Cells with height `<= threshold` are foreground
///
/// # Returns
/// Contour set in the encoding described in the module docs
#[wasm_bindgen]
pub fn trace_contours_wasm(
    heights: &[i32],
    width: usize,
    height: usize,
    threshold: i32,
) -> Result<Vec<i32>, JsValue> {
    let grid = ArrayView2::from_shape((height, width), heights).map_err(|_| {
        js_error(GeomError::SizeMismatch {
            expected: width * height,
            actual: heights.len(),
        })
    })?;

    let traced = trace_grid(grid, threshold);
    let mut out = vec![traced.outer.len() as i32, traced.inner.len() as i32];
    push_contours(&mut out, &traced.outer);
    push_contours(&mut out, &traced.inner);
    Ok(out)
}

// ============================================================================
// Rasterization
// ============================================================================

/// Cells of a Bresenham line in travel order.
///
/// `overlap`: 0 none, 1 major, 2 minor, 3 both.
#[wasm_bindgen]
pub fn line_points_wasm(x0: i32, y0: i32, x1: i32, y1: i32, overlap: u8) -> Vec<i32> {
    let mut out = Vec::new();
    raster::iterate_line(
        x0,
        y0,
        x1,
        y1,
        &mut |x: i32, y: i32| out.extend([x, y]),
        Overlap::from_bits(overlap),
    );
    out
}

/// Distinct cells of a thick line, row-major.
///
/// `mode`: "middle", "clockwise" or "counterclockwise".
#[wasm_bindgen]
pub fn thick_line_points_wasm(
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    thickness: i32,
    mode: &str,
) -> Result<Vec<i32>, JsValue> {
    let mode: ThicknessMode = mode.parse().map_err(js_error)?;
    let mut collector = PointCollector::new();
    raster::iterate_thick_line(x0, y0, x1, y1, &mut collector, thickness, mode);
    Ok(flatten(&collector.sorted()))
}

/// Distinct cells of a filled or outlined circle, row-major.
#[wasm_bindgen]
pub fn circle_points_wasm(cx: i32, cy: i32, radius: i32, filled: bool) -> Vec<i32> {
    let mut collector = PointCollector::new();
    raster::visit_circle(cx, cy, radius, &mut collector, filled);
    flatten(&collector.sorted())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_encoding() {
        assert_eq!(line_points_wasm(0, 0, 2, 1, 0), vec![0, 0, 1, 1, 2, 1]);
    }

    #[test]
    fn test_contour_encoding() {
        let heights = [
            1, 1, 1, //
            1, 0, 1, //
            1, 1, 1,
        ];
        let out = trace_contours_wasm(&heights, 3, 3, 0).unwrap();
        assert_eq!(out, vec![1, 0, 1, 1, 1]);
    }

    #[test]
    fn test_circle_encoding() {
        assert_eq!(circle_points_wasm(5, 5, 0, true), vec![5, 5]);
    }
}
