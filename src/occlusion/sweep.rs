use rayon::prelude::*;

use crate::{
    depth::index::DepthIndex,
    foundation::core::{FrameIndex, Point, Vec2},
    motion::curve::{CurveShape, OffsetCache},
    occlusion::tester::OcclusionTester,
    trajectory::point::TrackedPoint,
};

/// Visibility of every tracked point at one frame.
///
/// Indexed by [`TrackedPoint::id`]; `None` marks an occluded point.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameState {
    /// Frame this state belongs to.
    pub frame: FrameIndex,
    /// Displaced position per tracked point, or `None` when hidden.
    pub positions: Vec<Option<Point>>,
}

impl FrameState {
    /// Number of points hidden at this frame.
    pub fn occluded_count(&self) -> usize {
        self.positions.iter().filter(|p| p.is_none()).count()
    }

    /// Number of points visible at this frame.
    pub fn visible_count(&self) -> usize {
        self.positions.len() - self.occluded_count()
    }
}

/// Resolves displaced positions and occlusion for a single frame.
///
/// Layers are visited from the largest depth value downward. A point is only tested
/// against layers strictly deeper-valued than itself, and the first cell that covers
/// it settles the frame for that point.
#[derive(Clone, Copy, Debug)]
pub struct FrameProcessor<'a> {
    index: &'a DepthIndex,
    shape: CurveShape,
    zero_depth: f64,
}

impl<'a> FrameProcessor<'a> {
    /// Processor over `index` using curve `shape` around `zero_depth`.
    pub fn new(index: &'a DepthIndex, shape: CurveShape, zero_depth: f64) -> Self {
        Self {
            index,
            shape,
            zero_depth,
        }
    }

    /// Compute the [`FrameState`] of `frame` out of `frames` total.
    ///
    /// All offsets needed by the frame are memoized in `cache` before the occlusion
    /// pass, which then only reads them. With a `pool`, points are tested in parallel;
    /// the result is identical to the sequential path.
    #[tracing::instrument(skip_all, fields(frame = frame.0))]
    pub fn process(
        &self,
        points: &[TrackedPoint],
        frame: FrameIndex,
        frames: u64,
        cache: &mut OffsetCache,
        pool: Option<&rayon::ThreadPool>,
    ) -> FrameState {
        let t = frame.progress(frames);

        let displaced: Vec<Point> = points
            .iter()
            .map(|p| {
                p.position() + cache.get_or_insert(self.shape, p.depth - self.zero_depth, t)
            })
            .collect();
        let layer_offsets: Vec<Vec2> = self
            .index
            .depths()
            .iter()
            .map(|&d| cache.get_or_insert(self.shape, f64::from(d) - self.zero_depth, t))
            .collect();

        let resolve = |(p, pos): (&TrackedPoint, &Point)| -> Option<Point> {
            if self.is_occluded(p.depth, *pos, &layer_offsets) {
                None
            } else {
                Some(*pos)
            }
        };
        let positions: Vec<Option<Point>> = match pool {
            Some(pool) => pool.install(|| {
                points
                    .par_iter()
                    .zip(displaced.par_iter())
                    .map(resolve)
                    .collect()
            }),
            None => points.iter().zip(displaced.iter()).map(resolve).collect(),
        };

        let state = FrameState { frame, positions };
        tracing::debug!(
            t,
            occluded = state.occluded_count(),
            visible = state.visible_count(),
            "frame resolved"
        );
        state
    }

    /// Whether a point of `depth` displaced to `position` is covered by a nearer layer.
    ///
    /// `layer_offsets[n]` is the displacement of `depths()[n]` at the current frame.
    fn is_occluded(&self, depth: f64, position: Point, layer_offsets: &[Vec2]) -> bool {
        let depths = self.index.depths();
        for n in (1..depths.len()).rev() {
            let current = depths[n];
            // Descending order: once a layer is not in front, none of the rest are.
            if depth >= f64::from(current) {
                return false;
            }
            let offset_current = layer_offsets[n];
            let sweep = layer_offsets[n - 1] - offset_current;
            let hit = self.index.cells_at(current).iter().any(|cell| {
                OcclusionTester::contains(position, cell.origin() + offset_current, sweep)
            });
            if hit {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/occlusion/sweep.rs"]
mod tests;
