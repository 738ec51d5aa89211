use crate::foundation::error::{ParallaxError, ParallaxResult};

pub use kurbo::{Point, Vec2};

/// Zero-based animation frame index.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Normalized animation time `step / (frames - 1)` for this frame.
    ///
    /// `frames` is expected to be at least 2; smaller counts are treated as 2.
    pub fn progress(self, frames: u64) -> f64 {
        let denom = frames.max(2) - 1;
        (self.0 as f64) / (denom as f64)
    }
}

/// Half-open frame range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame in the range.
    pub start: FrameIndex,
    /// One past the last frame in the range.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> ParallaxResult<Self> {
        if start.0 > end.0 {
            return Err(ParallaxError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames covered.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// `true` when the range covers no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// `true` when `f` lies inside the range.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

/// Integer coordinate of one depth grid cell.
///
/// The cell covers the unit square `[x, x + 1] x [y, y + 1]` in grid space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct GridCell {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl GridCell {
    /// Top-left corner of the cell in grid space.
    pub fn origin(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
