use std::f64::consts::FRAC_1_SQRT_2;

use crate::foundation::core::{Point, Vec2};

/// Membership test for the region a unit cell covers while being swept.
#[derive(Clone, Copy, Debug)]
pub struct OcclusionTester;

impl OcclusionTester {
    /// `true` when `point` lies in the unit cell anchored at `block_origin` swept by `sweep`.
    ///
    /// The bounding box of the start and end cells is a hard reject. Axis-aligned sweeps
    /// cover their whole bounding box. Diagonal sweeps use a band test: the point is
    /// projected along the sweep slope onto a reference diagonal through the cell center
    /// (slope `-1/sqrt(2)` for positive sweep slopes, `+1/sqrt(2)` otherwise) and is
    /// inside when the projection stays within half a cell horizontally.
    pub fn contains(point: Point, block_origin: Point, sweep: Vec2) -> bool {
        let (bx, by) = (block_origin.x, block_origin.y);
        let (ox, oy) = (sweep.x, sweep.y);

        if point.x < bx.min(bx + ox) || point.x > (bx + 1.0).max(bx + ox + 1.0) {
            return false;
        }
        if point.y < by.min(by + oy) || point.y > (by + 1.0).max(by + oy + 1.0) {
            return false;
        }

        if ox == 0.0 || oy == 0.0 {
            return true;
        }

        let k = oy / ox;
        let k1 = if k > 0.0 { -FRAC_1_SQRT_2 } else { FRAC_1_SQRT_2 };

        let x0 = point.x - bx - 0.5;
        let y0 = point.y - by - 0.5;
        let x1 = (y0 - k1 * x0) / (k - k1);

        (x1 - x0).abs() <= 0.5
    }
}

#[cfg(test)]
#[path = "../../tests/unit/occlusion/tester.rs"]
mod tests;
