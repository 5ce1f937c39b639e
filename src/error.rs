//! Error type for fallible constructors.
//!
//! Tracing and rasterization never fail; only objects built from caller
//! supplied geometry validate their input.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeomError {
    #[error("start ({x}, {y}) must be on the border of the rectangle")]
    StartNotOnBorder { x: i32, y: i32 },

    #[error("rectangle {width}x{height} is too small for an outline walk")]
    DegenerateRect { width: i32, height: i32 },

    #[error("row {row} has length {actual}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("scale must be at least 1, got {0}")]
    InvalidScale(i32),

    #[error("unknown thickness mode {0:?}")]
    UnknownThicknessMode(String),

    #[error("buffer size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, GeomError>;
