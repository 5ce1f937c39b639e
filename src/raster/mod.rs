//! Rasterization of lines, circles and rectangle outlines onto a grid.
//!
//! Rasterizers never touch a surface themselves; every produced cell goes
//! through a [`PixelVisitor`]:
//!
//! - **Lines**: Bresenham with optional overlap pixels
//! - **Thick lines**: gap-free sweeps, stroke side chosen by [`ThicknessMode`]
//! - **Circles**: filled discs and one-cell outlines
//! - **Outlines**: endless walks along a rectangle border

pub mod circle;
pub mod line;
pub mod outline;
pub mod visitor;

pub use circle::{iterate_circle, iterate_filled_circle, visit_circle};
pub use line::{iterate_line, iterate_thick_line, iterate_thick_line_simple, Overlap, ThicknessMode};
pub use outline::{OutlineIterator, OutlineWalk};
pub use visitor::{PixelVisitor, PointCollector};
