//! Contour extraction from binary grid classifications.
//!
//! - **Tracing**: outer and inner (hole) boundaries via Moore-neighbour tracing
//! - **Contour**: traced point sequence with cached corner simplification
//! - **Polygon**: half-open point-in-polygon containment

#[allow(clippy::module_inception)]
pub mod contour;
pub mod polygon;
pub mod tracer;

pub use contour::Contour;
pub use polygon::Polygon;
pub use tracer::{trace_grid, trace_regions, Classification, ContourTracer, TracedContours};
