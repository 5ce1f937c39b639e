//! Height maps that sample a wrapped map once over a fixed area.

use log::debug;
use ndarray::Array2;

use super::HeightMap;
use crate::error::{GeomError, Result};
use crate::grid::GridRect;

/// Caches every cell of `area`; reads elsewhere go to the wrapped map.
#[derive(Clone, Debug)]
pub struct CachingHeightMap<H> {
    area: GridRect,
    inner: H,
    cache: Array2<i32>,
}

impl<H: HeightMap> CachingHeightMap<H> {
    pub fn new(area: GridRect, inner: H) -> Self {
        let rows = area.height.max(0) as usize;
        let cols = area.width.max(0) as usize;
        let cache = Array2::from_shape_fn((rows, cols), |(z, x)| {
            inner.height(area.min_x() + x as i32, area.min_y() + z as i32)
        });
        Self { area, inner, cache }
    }

    pub fn area(&self) -> GridRect {
        self.area
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H: HeightMap> HeightMap for CachingHeightMap<H> {
    fn height(&self, x: i32, z: i32) -> i32 {
        if self.area.contains(x, z) {
            let lx = (x - self.area.min_x()) as usize;
            let lz = (z - self.area.min_y()) as usize;
            return self.cache[[lz, lx]];
        }
        debug!("height ({x}, {z}) outside cached area {:?}, reading source map", self.area);
        self.inner.height(x, z)
    }
}

/// Samples every `scale`-th cell of `area` and interpolates bilinearly
/// between the samples.
///
/// The sample grid reaches one sample past the far edges of the area so
/// that every cell inside has four surrounding samples. Interpolated values
/// round with `floor(v + 0.49)`.
#[derive(Clone, Debug)]
pub struct LerpHeightMap<H> {
    area: GridRect,
    inner: H,
    scale: i32,
    samples: Array2<i32>,
}

impl<H: HeightMap> LerpHeightMap<H> {
    /// # Errors
    /// [`GeomError::InvalidScale`] if `scale < 1`.
    pub fn new(area: GridRect, inner: H, scale: i32) -> Result<Self> {
        if scale < 1 {
            return Err(GeomError::InvalidScale(scale));
        }

        let width = area.width.max(0);
        let height = area.height.max(0);
        let mut cols = width / scale + 1;
        let mut rows = height / scale + 1;
        // round up when scale does not divide the area
        if width % scale > 0 {
            cols += 1;
        }
        if height % scale > 0 {
            rows += 1;
        }

        let samples = Array2::from_shape_fn((rows as usize, cols as usize), |(z, x)| {
            inner.height(
                area.min_x() + x as i32 * scale,
                area.min_y() + z as i32 * scale,
            )
        });

        Ok(Self {
            area,
            inner,
            scale,
            samples,
        })
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    pub fn area(&self) -> GridRect {
        self.area
    }

    #[inline]
    fn sample(&self, sx: usize, sz: usize) -> f64 {
        self.samples[[sz, sx]] as f64
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

impl<H: HeightMap> HeightMap for LerpHeightMap<H> {
    fn height(&self, x: i32, z: i32) -> i32 {
        if !self.area.contains(x, z) {
            debug!("height ({x}, {z}) outside cached area {:?}, reading source map", self.area);
            return self.inner.height(x, z);
        }

        let lx = (x - self.area.min_x()) as f64 / self.scale as f64;
        let lz = (z - self.area.min_y()) as f64 / self.scale as f64;
        let min_x = lx.floor();
        let min_z = lz.floor();
        let (sx, sz) = (min_x as usize, min_z as usize);

        let q00 = self.sample(sx, sz);
        let q10 = self.sample(sx + 1, sz);
        let q01 = self.sample(sx, sz + 1);
        let q11 = self.sample(sx + 1, sz + 1);

        let tx = lx - min_x;
        let tz = lz - min_z;
        let top = lerp(q00, q10, tx);
        let bottom = lerp(q01, q11, tx);
        let value = lerp(top, bottom, tz);

        (value + 0.49).floor() as i32
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::heightmap::from_fn;

    #[test]
    fn test_cache_reads_source_once() {
        let calls = Cell::new(0);
        let source = from_fn(|x, z| {
            calls.set(calls.get() + 1);
            x * 100 + z
        });
        let area = GridRect::new(-2, 3, 4, 5);
        let cached = CachingHeightMap::new(area, &source);
        assert_eq!(calls.get(), 20);

        for z in 3..8 {
            for x in -2..2 {
                assert_eq!(cached.height(x, z), x * 100 + z);
            }
        }
        assert_eq!(calls.get(), 20);

        // outside the area the source is consulted
        assert_eq!(cached.height(10, 0), 1000);
        assert_eq!(calls.get(), 21);
    }

    #[test]
    fn test_lerp_rounding() {
        // step from 0 to 1 at x = 2: the midpoint 0.5 rounds down
        let step = from_fn(|x, _| i32::from(x >= 2));
        let hm = LerpHeightMap::new(GridRect::new(0, 0, 4, 4), step, 2).unwrap();
        assert_eq!(hm.height(0, 0), 0);
        assert_eq!(hm.height(1, 0), 0);
        assert_eq!(hm.height(2, 0), 1);
        assert_eq!(hm.height(3, 1), 1);

        // 0.51 and above rounds up
        let ramp = from_fn(|x, _| if x >= 4 { 3 } else { 0 });
        let hm = LerpHeightMap::new(GridRect::new(0, 0, 8, 1), ramp, 4).unwrap();
        assert_eq!(hm.height(1, 0), 1);
        assert_eq!(hm.height(2, 0), 1);
        assert_eq!(hm.height(3, 0), 2);
    }

    #[test]
    fn test_lerp_samples_at_grid() {
        let field = from_fn(|x, z| (x * x + z * 3) % 17);
        let area = GridRect::new(5, -5, 9, 7);
        let hm = LerpHeightMap::new(area, field, 3).unwrap();
        for z in (-5..2).step_by(3) {
            for x in (5..14).step_by(3) {
                assert_eq!(hm.height(x, z), field.height(x, z), "({x}, {z})");
            }
        }
        assert_eq!(hm.height(100, 100), field.height(100, 100));
    }

    #[test]
    fn test_lerp_scale_one_is_identity() {
        let field = from_fn(|x, z| x ^ z);
        let hm = LerpHeightMap::new(GridRect::new(0, 0, 6, 6), field, 1).unwrap();
        for z in 0..6 {
            for x in 0..6 {
                assert_eq!(hm.height(x, z), x ^ z);
            }
        }
    }

    #[test]
    fn test_invalid_scale() {
        let flat = from_fn(|_, _| 0);
        assert_eq!(
            LerpHeightMap::new(GridRect::new(0, 0, 2, 2), flat, 0).err(),
            Some(GeomError::InvalidScale(0))
        );
        assert!(LerpHeightMap::new(GridRect::new(0, 0, 2, 2), flat, -3).is_err());
    }
}
