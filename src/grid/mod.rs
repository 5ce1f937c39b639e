//! Integer grid primitives shared by the tracer and the rasterizers.
//!
//! - **GridPoint**: a cell address `(x, y)`
//! - **Direction**: the 8 Moore neighbours, clockwise from east
//! - **GridRect**: a rectangular scan area
//! - **LabelGrid**: offset-addressed label buffer used while tracing

pub mod label;
pub mod point;
pub mod rect;

pub use label::LabelGrid;
pub use point::{Direction, GridPoint};
pub use rect::GridRect;
