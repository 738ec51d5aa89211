use crate::{
    depth::field::DepthField,
    foundation::{
        core::Point,
        error::{ParallaxError, ParallaxResult},
    },
};

/// A point anchored on the depth field whose motion is traced.
///
/// `depth` is sampled once at construction and never recomputed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrackedPoint {
    /// Stable index; equals the point's position in the input list.
    pub id: usize,
    /// Grid-space x coordinate of the origin.
    pub x: f64,
    /// Grid-space y coordinate of the origin.
    pub y: f64,
    /// Interpolated depth at the origin.
    pub depth: f64,
}

impl TrackedPoint {
    /// Anchor `origin` on `field`, sampling its depth.
    pub fn anchor(id: usize, origin: Point, field: &DepthField) -> ParallaxResult<Self> {
        if !origin.is_finite() {
            return Err(ParallaxError::validation(format!(
                "tracked point {id} has a non-finite origin"
            )));
        }
        Ok(Self {
            id,
            x: origin.x,
            y: origin.y,
            depth: field.sample(origin),
        })
    }

    /// Anchor every origin, assigning ids in input order.
    pub fn anchor_all(origins: &[Point], field: &DepthField) -> ParallaxResult<Vec<Self>> {
        origins
            .iter()
            .enumerate()
            .map(|(id, &o)| Self::anchor(id, o, field))
            .collect()
    }

    /// Origin as a point.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trajectory/point.rs"]
mod tests;
