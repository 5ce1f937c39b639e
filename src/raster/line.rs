//! Bresenham lines with optional overlap pixels and thickness.
//!
//! Thick lines are drawn as a sweep of parallel thin lines. Where the sweep
//! steps diagonally, the next line is drawn with an overlap pixel at each of
//! its own minor steps so that neighbouring lines leave no diagonal gaps.
//!
//! ```text
//!  Sample line:
//!    00+
//!     -0000+
//!         -0000+
//!             -00
//!  0 pixels of the plain line
//!  + pixels added by Overlap::MAJOR
//!  - pixels added by Overlap::MINOR
//! ```

use std::ops::BitOr;
use std::str::FromStr;

use super::PixelVisitor;
use crate::error::GeomError;

/// Which extra pixel to emit when a line takes a minor-axis step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overlap(u8);

impl Overlap {
    pub const NONE: Overlap = Overlap(0);
    /// Step along the major axis first, then the minor axis.
    pub const MAJOR: Overlap = Overlap(1);
    /// Step along the minor axis first, then the major axis.
    pub const MINOR: Overlap = Overlap(2);
    pub const BOTH: Overlap = Overlap(3);

    /// Flags from their bit encoding (1 = major, 2 = minor); other bits are ignored.
    #[inline]
    pub const fn from_bits(bits: u8) -> Overlap {
        Overlap(bits & Self::BOTH.0)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn contains(self, other: Overlap) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Overlap {
    type Output = Overlap;

    fn bitor(self, rhs: Overlap) -> Overlap {
        Overlap(self.0 | rhs.0)
    }
}

/// Side of the ideal line that a thick line grows toward.
///
/// Clockwise is the right-hand side of a traveller going from start to end
/// in screen orientation (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThicknessMode {
    /// Line runs through the centre of the stroke.
    #[default]
    Middle,
    /// Line runs along the counter-clockwise border, stroke grows clockwise.
    Clockwise,
    /// Line runs along the clockwise border, stroke grows counter-clockwise.
    CounterClockwise,
}

impl ThicknessMode {
    /// Perpendicular steps from the given line to the first swept line.
    #[inline]
    pub const fn start_offset(self, thickness: i32) -> i32 {
        match self {
            ThicknessMode::Middle => thickness / 2,
            ThicknessMode::Clockwise => 0,
            ThicknessMode::CounterClockwise => thickness - 1,
        }
    }
}

/// Rasterize the line from `(x0, y0)` to `(x1, y1)`, both ends included.
///
/// Axis-aligned lines are emitted in increasing coordinate order, all
/// others in travel order. Swapping the end points visits the same cells.
pub fn iterate_line<V>(x0: i32, y0: i32, x1: i32, y1: i32, visitor: &mut V, overlap: Overlap)
where
    V: PixelVisitor + ?Sized,
{
    if x0 == x1 || y0 == y1 {
        // horizontal or vertical: every cell of the span
        for y in y0.min(y1)..=y0.max(y1) {
            for x in x0.min(x1)..=x0.max(x1) {
                visitor.visit(x, y);
            }
        }
        return;
    }

    let (mut x, mut y) = (x0, y0);
    let step_x = if x1 < x0 { -1 } else { 1 };
    let step_y = if y1 < y0 { -1 } else { 1 };
    let delta_x = (x1 - x0).abs();
    let delta_y = (y1 - y0).abs();
    let delta_x2 = delta_x << 1;
    let delta_y2 = delta_y << 1;

    let major = overlap.contains(Overlap::MAJOR);
    let minor = overlap.contains(Overlap::MINOR);

    visitor.visit(x, y);

    if delta_x > delta_y {
        // error starts at a half step in y
        let mut error = delta_y2 - delta_x;
        while x != x1 {
            x += step_x;
            // exact ties round toward the end only when travelling in +x
            if error > 0 || (error == 0 && step_x > 0) {
                if major {
                    visitor.visit(x, y);
                }
                y += step_y;
                if minor {
                    visitor.visit(x - step_x, y);
                }
                error -= delta_x2;
            }
            error += delta_y2;
            visitor.visit(x, y);
        }
    } else {
        let mut error = delta_x2 - delta_y;
        while y != y1 {
            y += step_y;
            if error > 0 || (error == 0 && step_y > 0) {
                if major {
                    visitor.visit(x, y);
                }
                x += step_x;
                if minor {
                    visitor.visit(x, y - step_y);
                }
                error -= delta_y2;
            }
            error += delta_x2;
            visitor.visit(x, y);
        }
    }
}

/// Thick line without gaps, growing toward the side selected by `mode`.
///
/// `thickness <= 1` draws the plain line. Cells where two swept lines meet
/// may be visited twice.
pub fn iterate_thick_line<V>(
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    visitor: &mut V,
    thickness: i32,
    mode: ThicknessMode,
) where
    V: PixelVisitor + ?Sized,
{
    if thickness <= 1 {
        iterate_line(x0, y0, x1, y1, visitor, Overlap::NONE);
        return;
    }

    let (mut xs, mut ys, mut xe, mut ye) = (x0, y0, x1, y1);

    // Perpendicular of the line: swap the deltas. Mirroring both into the
    // first quadrant flips the clockwise side once per mirrored axis.
    let mut delta_y = x1 - x0;
    let mut delta_x = y1 - y0;
    let mut swap = true;
    let mut step_x = 1;
    let mut step_y = 1;
    if delta_x < 0 {
        delta_x = -delta_x;
        step_x = -1;
        swap = !swap;
    }
    if delta_y < 0 {
        delta_y = -delta_y;
        step_y = -1;
        swap = !swap;
    }
    let delta_x2 = delta_x << 1;
    let delta_y2 = delta_y << 1;

    let mut adjust = mode.start_offset(thickness);

    if delta_x >= delta_y {
        if swap {
            adjust = (thickness - 1) - adjust;
            step_y = -step_y;
        } else {
            step_x = -step_x;
        }

        // move the first line to its start position
        let mut error = delta_y2 - delta_x;
        for _ in 0..adjust {
            xs -= step_x;
            xe -= step_x;
            if error >= 0 {
                ys -= step_y;
                ye -= step_y;
                error -= delta_x2;
            }
            error += delta_y2;
        }

        iterate_line(xs, ys, xe, ye, visitor, Overlap::NONE);

        let mut error = delta_y2 - delta_x;
        for _ in 1..thickness {
            xs += step_x;
            xe += step_x;
            let mut overlap = Overlap::NONE;
            if error >= 0 {
                ys += step_y;
                ye += step_y;
                error -= delta_x2;
                // the sweep moved diagonally: fill the corner cells
                overlap = Overlap::MAJOR;
            }
            error += delta_y2;
            iterate_line(xs, ys, xe, ye, visitor, overlap);
        }
    } else {
        if swap {
            step_x = -step_x;
        } else {
            adjust = (thickness - 1) - adjust;
            step_y = -step_y;
        }

        let mut error = delta_x2 - delta_y;
        for _ in 0..adjust {
            ys -= step_y;
            ye -= step_y;
            if error >= 0 {
                xs -= step_x;
                xe -= step_x;
                error -= delta_y2;
            }
            error += delta_x2;
        }

        iterate_line(xs, ys, xe, ye, visitor, Overlap::NONE);

        let mut error = delta_x2 - delta_y;
        for _ in 1..thickness {
            ys += step_y;
            ye += step_y;
            let mut overlap = Overlap::NONE;
            if error >= 0 {
                xs += step_x;
                xe += step_x;
                error -= delta_y2;
                overlap = Overlap::MAJOR;
            }
            error += delta_x2;
            iterate_line(xs, ys, xe, ye, visitor, overlap);
        }
    }
}

/// Cheaper thick line: every diagonal sweep step uses both overlap pixels.
///
/// The stroke side is not mirrored per octant, so `Clockwise` and
/// `CounterClockwise` both grow toward the same fixed perpendicular; only
/// `Middle` centres the stroke. More cells are visited twice than with
/// [`iterate_thick_line`].
pub fn iterate_thick_line_simple<V>(
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    visitor: &mut V,
    thickness: i32,
    mode: ThicknessMode,
) where
    V: PixelVisitor + ?Sized,
{
    let (mut xs, mut ys, mut xe, mut ye) = (x0, y0, x1, y1);

    let mut delta_y = x0 - x1;
    let mut delta_x = y1 - y0;
    let mut step_x = 1;
    let mut step_y = 1;
    if delta_x < 0 {
        delta_x = -delta_x;
        step_x = -1;
    }
    if delta_y < 0 {
        delta_y = -delta_y;
        step_y = -1;
    }
    let delta_x2 = delta_x << 1;
    let delta_y2 = delta_y << 1;
    let centre = mode == ThicknessMode::Middle;

    if delta_x > delta_y {
        if centre {
            let mut error = delta_y2 - delta_x;
            for _ in 0..thickness / 2 {
                xs -= step_x;
                xe -= step_x;
                if error >= 0 {
                    ys -= step_y;
                    ye -= step_y;
                    error -= delta_x2;
                }
                error += delta_y2;
            }
        }

        iterate_line(xs, ys, xe, ye, visitor, Overlap::NONE);

        let mut error = delta_y2 - delta_x;
        for _ in 1..thickness {
            xs += step_x;
            xe += step_x;
            let mut overlap = Overlap::NONE;
            if error >= 0 {
                ys += step_y;
                ye += step_y;
                error -= delta_x2;
                overlap = Overlap::BOTH;
            }
            error += delta_y2;
            iterate_line(xs, ys, xe, ye, visitor, overlap);
        }
    } else {
        if centre {
            let mut error = delta_x2 - delta_y;
            for _ in 0..thickness / 2 {
                ys -= step_y;
                ye -= step_y;
                if error >= 0 {
                    xs -= step_x;
                    xe -= step_x;
                    error -= delta_y2;
                }
                error += delta_x2;
            }
        }

        iterate_line(xs, ys, xe, ye, visitor, Overlap::NONE);

        let mut error = delta_x2 - delta_y;
        for _ in 1..thickness {
            ys += step_y;
            ye += step_y;
            let mut overlap = Overlap::NONE;
            if error >= 0 {
                xs += step_x;
                xe += step_x;
                error -= delta_y2;
                overlap = Overlap::BOTH;
            }
            error += delta_x2;
            iterate_line(xs, ys, xe, ye, visitor, overlap);
        }
    }
}

impl FromStr for ThicknessMode {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self, GeomError> {
        match s.to_ascii_lowercase().as_str() {
            "middle" => Ok(ThicknessMode::Middle),
            "clockwise" | "cw" => Ok(ThicknessMode::Clockwise),
            "counterclockwise" | "counter_clockwise" | "ccw" => Ok(ThicknessMode::CounterClockwise),
            _ => Err(GeomError::UnknownThicknessMode(s.to_string())),
        }
    }
}
