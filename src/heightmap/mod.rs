//! Height fields and their adapters.
//!
//! A height map assigns an integer height to every `(x, z)` cell. Tracing
//! consumes one through [`below_threshold`], which turns it into a binary
//! classifier.
//!
//! ## Adapters
//!
//! - [`AsciiHeightMap`]: character codes of text rows, handy for fixtures
//! - [`ConvertingHeightMap`]: remaps selected heights
//! - [`CachingHeightMap`]: samples an area once into a buffer
//! - [`LerpHeightMap`]: samples every n-th cell and interpolates between them

pub mod ascii;
pub mod caching;

pub use ascii::{AsciiHeightMap, ConvertingHeightMap};
pub use caching::{CachingHeightMap, LerpHeightMap};

use crate::error::Result;
use crate::grid::GridRect;

/// Integer height for every cell of an unbounded grid.
pub trait HeightMap {
    fn height(&self, x: i32, z: i32) -> i32;
}

impl<T: HeightMap + ?Sized> HeightMap for &T {
    #[inline]
    fn height(&self, x: i32, z: i32) -> i32 {
        (**self).height(x, z)
    }
}

impl<T: HeightMap + ?Sized> HeightMap for Box<T> {
    #[inline]
    fn height(&self, x: i32, z: i32) -> i32 {
        (**self).height(x, z)
    }
}

/// Height map backed by a closure, see [`from_fn`].
#[derive(Clone, Copy, Debug)]
pub struct FromFn<F>(F);

impl<F> HeightMap for FromFn<F>
where
    F: Fn(i32, i32) -> i32,
{
    #[inline]
    fn height(&self, x: i32, z: i32) -> i32 {
        (self.0)(x, z)
    }
}

/// Wrap a closure `(x, z) -> height` as a [`HeightMap`].
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(i32, i32) -> i32,
{
    FromFn(f)
}

/// Classifier for the tracer: a cell is foreground iff its height is at
/// most `threshold`.
pub fn below_threshold<H>(hm: H, threshold: i32) -> impl Fn(i32, i32) -> bool
where
    H: HeightMap,
{
    move |x, z| hm.height(x, z) <= threshold
}

/// Cache `hm` over `area`: a plain cache for `scale == 1`, an interpolating
/// one otherwise.
///
/// # Errors
/// [`GeomError::InvalidScale`](crate::GeomError::InvalidScale) if `scale < 1`.
pub fn caching<'a, H>(hm: H, area: GridRect, scale: i32) -> Result<Box<dyn HeightMap + Send + Sync + 'a>>
where
    H: HeightMap + Send + Sync + 'a,
{
    if scale == 1 {
        Ok(Box::new(CachingHeightMap::new(area, hm)))
    } else {
        Ok(Box::new(LerpHeightMap::new(area, hm, scale)?))
    }
}
