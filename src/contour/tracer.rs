//! Outer and inner contour tracing over a binary classification.
//!
//! Follows the combined labeling and tracing scheme from Burger & Burge,
//! "Digital Image Processing - An Algorithmic Introduction using Java":
//! a single raster scan discovers each foreground component and each
//! enclosed hole the first time it is met, and traces its boundary with
//! 8-connected Moore-neighbour tracing.

use std::cell::OnceCell;

use log::{debug, trace};
use ndarray::ArrayView2;
use rayon::prelude::*;

use super::Contour;
use crate::grid::label::{UNLABELED, VISITED_BACKGROUND};
use crate::grid::{Direction, GridPoint, GridRect, LabelGrid};

/// Binary classification of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Foreground,
    Background,
}

impl From<bool> for Classification {
    fn from(foreground: bool) -> Self {
        if foreground {
            Classification::Foreground
        } else {
            Classification::Background
        }
    }
}

/// Outer and inner contours of one scan area.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TracedContours {
    /// One boundary per 8-connected foreground component.
    pub outer: Vec<Contour>,
    /// One boundary per background hole enclosed by a component.
    pub inner: Vec<Contour>,
}

/// Traces the contours of every foreground region inside a scan area.
///
/// `classify(x, y)` returns `true` for foreground cells. Every cell outside
/// the scan area is treated as background, which closes components touching
/// the edge of the area.
///
/// The classifier must be pure: answering differently for the same cell
/// during a run leaves the trace undefined and may not terminate.
pub struct ContourTracer<C> {
    area: GridRect,
    classify: C,
    traced: OnceCell<TracedContours>,
}

impl<C> ContourTracer<C>
where
    C: Fn(i32, i32) -> bool,
{
    pub fn new(area: GridRect, classify: C) -> Self {
        Self {
            area,
            classify,
            traced: OnceCell::new(),
        }
    }

    pub fn area(&self) -> GridRect {
        self.area
    }

    /// Outer contours, traced on first access.
    pub fn outer_contours(&self) -> &[Contour] {
        &self.traced().outer
    }

    /// Inner contours (holes), traced on first access.
    pub fn inner_contours(&self) -> &[Contour] {
        &self.traced().inner
    }

    /// Hand the traced contours over to the caller.
    pub fn into_contours(self) -> TracedContours {
        let Self {
            area,
            classify,
            traced,
        } = self;
        match traced.into_inner() {
            Some(done) => done,
            None => Scan::new(area, &classify).run(),
        }
    }

    fn traced(&self) -> &TracedContours {
        self.traced
            .get_or_init(|| Scan::new(self.area, &self.classify).run())
    }
}

/// Trace several independent areas in parallel.
///
/// Each area gets its own label buffer; results come back in input order.
pub fn trace_regions<C>(areas: &[GridRect], classify: &C) -> Vec<TracedContours>
where
    C: Fn(i32, i32) -> bool + Sync,
{
    areas
        .par_iter()
        .map(|&area| ContourTracer::new(area, classify).into_contours())
        .collect()
}

/// Trace a dense height grid, indexed `[[row, column]]` = `[[y, x]]`.
///
/// A cell is foreground iff its height is at most `threshold`. The scan
/// area is the whole grid, anchored at the origin.
pub fn trace_grid(heights: ArrayView2<'_, i32>, threshold: i32) -> TracedContours {
    let (rows, cols) = heights.dim();
    let area = GridRect::new(0, 0, cols as i32, rows as i32);
    ContourTracer::new(area, |x, y| heights[[y as usize, x as usize]] <= threshold).into_contours()
}

/// Working state of a single trace run.
struct Scan<'a, C> {
    area: GridRect,
    classify: &'a C,
    labels: LabelGrid,
}

impl<'a, C> Scan<'a, C>
where
    C: Fn(i32, i32) -> bool,
{
    fn new(area: GridRect, classify: &'a C) -> Self {
        Self {
            area,
            classify,
            labels: LabelGrid::new(area, UNLABELED),
        }
    }

    #[inline]
    fn classification(&self, x: i32, y: i32) -> Classification {
        if !self.area.contains(x, y) {
            return Classification::Background;
        }
        (self.classify)(x, y).into()
    }

    fn run(mut self) -> TracedContours {
        let mut result = TracedContours::default();
        let mut max_label = 0;

        // scan top to bottom, left to right
        for y in self.area.min_y()..self.area.min_y() + self.area.height {
            let mut label = UNLABELED;
            for x in self.area.min_x()..self.area.min_x() + self.area.width {
                match self.classification(x, y) {
                    Classification::Foreground => {
                        if label != UNLABELED {
                            self.labels.set(x, y, label);
                            continue;
                        }
                        label = self.labels.get(x, y);
                        if label == UNLABELED {
                            max_label += 1;
                            label = max_label;
                            let outer = self.trace_contour(GridPoint::new(x, y), label, Direction::East);
                            trace!("outer contour {label} at ({x}, {y}): {} points", outer.len());
                            result.outer.push(outer);
                            self.labels.set(x, y, label);
                        }
                    }
                    Classification::Background => {
                        if label == UNLABELED {
                            continue;
                        }
                        if self.labels.get(x, y) == UNLABELED {
                            // just left a run into an unvisited hole
                            let inner = self.trace_contour(GridPoint::new(x - 1, y), label, Direction::SouthEast);
                            trace!("inner contour of {label} at ({}, {y}): {} points", x - 1, inner.len());
                            result.inner.push(inner);
                        }
                        label = UNLABELED;
                    }
                }
            }
        }

        debug!(
            "traced {:?}: {} outer, {} inner contours",
            self.area,
            result.outer.len(),
            result.inner.len()
        );
        result
    }

    /// Moore-neighbour trace of one boundary, seed first.
    fn trace_contour(&mut self, start: GridPoint, label: i32, start_dir: Direction) -> Contour {
        let (target, mut dir) = self.find_next_point(start, start_dir);
        if target == start {
            // isolated pixel
            return Contour::from_points(vec![start]);
        }

        let mut points = vec![start, target];
        let mut current = target;

        loop {
            self.labels.set(current.x, current.y, label);
            let (next, found) = self.find_next_point(current, dir.rotate_cw(6));
            dir = found;
            let previous = current;
            current = next;
            // back at the seed and about to repeat the first step
            if previous == start && current == target {
                break;
            }
            points.push(current);
        }

        // the walk re-enters the seed right before closing
        points.pop();
        Contour::from_points(points)
    }

    /// First non-background neighbour of `pt`, searching clockwise from
    /// `start_dir`; background cells passed on the way are marked visited.
    /// Returns `pt` itself if none of the 7 searched neighbours qualifies.
    fn find_next_point(&mut self, pt: GridPoint, start_dir: Direction) -> (GridPoint, Direction) {
        let mut dir = start_dir;
        for _ in 0..7 {
            let next = pt.step(dir);
            if self.classification(next.x, next.y) == Classification::Background {
                self.labels.set(next.x, next.y, VISITED_BACKGROUND);
                dir = dir.rotate_cw(1);
            } else {
                return (next, dir);
            }
        }
        (pt, dir)
    }
}
