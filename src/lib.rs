//! gridtrace
//!
//! Contour tracing and rasterization on integer grids, with Python bindings
//! via PyO3 and WASM bindings for JavaScript.
//!
//! ## Contours
//! A binary classifier `(x, y) -> bool` over a scan area is turned into the
//! outer boundary of every 8-connected foreground component and the inner
//! boundary of every enclosed hole. Contours simplify to their corner points
//! and answer point-in-polygon queries.
//!
//! ## Rasterization
//! Lines (plain, with overlap pixels, thick), circles (filled and outlined)
//! and rectangle outlines are emitted cell by cell through a
//! [`PixelVisitor`], so they can draw into any grid-like surface.
//!
//! ## Coordinates
//! - `x` grows to the east, `y` grows to the south (screen orientation)
//! - clockwise and counter-clockwise are meant in that orientation
//! - height maps name their second axis `z`; it plays the role of `y`

pub mod contour;
pub mod error;
pub mod grid;
pub mod heightmap;
pub mod raster;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use contour::{trace_grid, trace_regions, Contour, ContourTracer, Polygon, TracedContours};
pub use error::{GeomError, Result};
pub use grid::{Direction, GridPoint, GridRect, LabelGrid};
pub use heightmap::{below_threshold, HeightMap};
pub use raster::{OutlineIterator, Overlap, PixelVisitor, PointCollector, ThicknessMode};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use ndarray::Array2;
    use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::contour::{trace_grid, Contour};
    use crate::error::GeomError;
    use crate::grid::GridPoint;
    use crate::raster::{self, Overlap, PointCollector, ThicknessMode};

    impl From<GeomError> for PyErr {
        fn from(err: GeomError) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    /// `(N, 2)` array of `(x, y)` rows.
    fn to_array(points: &[GridPoint]) -> Array2<i32> {
        Array2::from_shape_fn((points.len(), 2), |(i, j)| {
            if j == 0 {
                points[i].x
            } else {
                points[i].y
            }
        })
    }

    fn contours_to_py<'py>(py: Python<'py>, contours: &[Contour]) -> Vec<Bound<'py, PyArray2<i32>>> {
        contours
            .iter()
            .map(|c| to_array(c.points()).into_pyarray(py))
            .collect()
    }

    // ========================================================================
    // Contour Tracing
    // ========================================================================

    /// Trace outer and inner contours of a height field.
    ///
    /// # Arguments
    /// * `heights` - int32 array (height, width); cells `<= threshold` are foreground
    /// * `threshold` - Inclusive foreground threshold
    ///
    /// # Returns
    /// Tuple `(outer, inner)` of lists of (N, 2) int32 arrays of `(x, y)` points
    #[pyfunction]
    #[pyo3(signature = (heights, threshold))]
    pub fn trace_contours<'py>(
        py: Python<'py>,
        heights: PyReadonlyArray2<'py, i32>,
        threshold: i32,
    ) -> (Vec<Bound<'py, PyArray2<i32>>>, Vec<Bound<'py, PyArray2<i32>>>) {
        let traced = trace_grid(heights.as_array(), threshold);
        (contours_to_py(py, &traced.outer), contours_to_py(py, &traced.inner))
    }

    /// Corner points of the contour through `points` (an (N, 2) array).
    #[pyfunction]
    pub fn simplify_contour<'py>(
        py: Python<'py>,
        points: PyReadonlyArray2<'py, i32>,
    ) -> PyResult<Bound<'py, PyArray2<i32>>> {
        let view = points.as_array();
        if view.ncols() != 2 {
            return Err(GeomError::SizeMismatch {
                expected: 2,
                actual: view.ncols(),
            }
            .into());
        }
        let contour: Contour = view
            .rows()
            .into_iter()
            .map(|row| GridPoint::new(row[0], row[1]))
            .collect();
        Ok(to_array(contour.simplified_curve()).into_pyarray(py))
    }

    // ========================================================================
    // Rasterization
    // ========================================================================

    /// Cells of a Bresenham line in travel order.
    ///
    /// `overlap`: 0 none, 1 major, 2 minor, 3 both.
    #[pyfunction]
    #[pyo3(signature = (x0, y0, x1, y1, overlap = 0))]
    pub fn line_points<'py>(
        py: Python<'py>,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        overlap: u8,
    ) -> Bound<'py, PyArray2<i32>> {
        let mut points = Vec::new();
        raster::iterate_line(
            x0,
            y0,
            x1,
            y1,
            &mut |x: i32, y: i32| points.push(GridPoint::new(x, y)),
            Overlap::from_bits(overlap),
        );
        to_array(&points).into_pyarray(py)
    }

    /// Distinct cells of a thick line, row-major.
    ///
    /// `mode`: "middle", "clockwise" or "counterclockwise".
    #[pyfunction]
    #[pyo3(signature = (x0, y0, x1, y1, thickness, mode = "middle"))]
    pub fn thick_line_points<'py>(
        py: Python<'py>,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thickness: i32,
        mode: &str,
    ) -> PyResult<Bound<'py, PyArray2<i32>>> {
        let mode: ThicknessMode = mode.parse()?;
        let mut collector = PointCollector::new();
        raster::iterate_thick_line(x0, y0, x1, y1, &mut collector, thickness, mode);
        Ok(to_array(&collector.sorted()).into_pyarray(py))
    }

    /// Distinct cells of a filled or outlined circle, row-major.
    #[pyfunction]
    #[pyo3(signature = (cx, cy, radius, filled = true))]
    pub fn circle_points<'py>(
        py: Python<'py>,
        cx: i32,
        cy: i32,
        radius: i32,
        filled: bool,
    ) -> Bound<'py, PyArray2<i32>> {
        let mut collector = PointCollector::new();
        raster::visit_circle(cx, cy, radius, &mut collector, filled);
        to_array(&collector.sorted()).into_pyarray(py)
    }

    /// gridtrace extension module
    #[pymodule]
    pub fn gridtrace(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Contours
        m.add_function(wrap_pyfunction!(trace_contours, m)?)?;
        m.add_function(wrap_pyfunction!(simplify_contour, m)?)?;

        // Rasterization
        m.add_function(wrap_pyfunction!(line_points, m)?)?;
        m.add_function(wrap_pyfunction!(thick_line_points, m)?)?;
        m.add_function(wrap_pyfunction!(circle_points, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::gridtrace;
