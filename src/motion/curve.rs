use std::collections::HashMap;

use crate::foundation::{
    core::Vec2,
    error::{ParallaxError, ParallaxResult},
    math::cubic_bezier,
};

/// Shape parameters of the parallax offset curve.
///
/// `a` controls how sharply the sweep bends, `b` divides depth into displacement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveShape {
    a: f64,
    b: f64,
}

impl CurveShape {
    /// Validate and build a shape. `b` must be finite and non-zero.
    pub fn new(a: f64, b: f64) -> ParallaxResult<Self> {
        if !a.is_finite() {
            return Err(ParallaxError::invalid_config("curve a must be finite"));
        }
        if !b.is_finite() || b == 0.0 {
            return Err(ParallaxError::invalid_config(
                "curve b must be finite and non-zero",
            ));
        }
        Ok(Self { a, b })
    }

    /// Sharpness parameter.
    pub fn a(self) -> f64 {
        self.a
    }

    /// Depth-to-offset divisor.
    pub fn b(self) -> f64 {
        self.b
    }

    /// Displacement of a point `depth_delta` away from the zero depth at time `t`.
    ///
    /// `x` sweeps monotonically from `-c` to `c`; `y` starts and ends at the same
    /// value and arcs through the shared handle in between.
    pub fn offset(self, depth_delta: f64, t: f64) -> Vec2 {
        let c = depth_delta / self.b;
        let offset_factor = (1.0 + 3.0 * self.a) / 4.0;
        let k = offset_factor * c;

        let x0 = -c;
        let x1 = c;
        let hx0 = -c * self.a;
        let hx1 = c * self.a;
        let y0 = -c + k;
        let hy = -c * self.a + k;

        Vec2::new(
            cubic_bezier(x0, hx0, hx1, x1, t),
            cubic_bezier(y0, hy, hy, y0, t),
        )
    }
}

/// Stateless entry point for one-off curve evaluation.
#[derive(Clone, Copy, Debug)]
pub struct OffsetCurve;

impl OffsetCurve {
    /// Evaluate the offset for `(depth_delta, t)` under shape `(a, b)`.
    ///
    /// Fails with [`ParallaxError::InvalidConfig`] when `b == 0`.
    pub fn evaluate(depth_delta: f64, t: f64, a: f64, b: f64) -> ParallaxResult<Vec2> {
        Ok(CurveShape::new(a, b)?.offset(depth_delta, t))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct OffsetKey([u64; 4]);

impl OffsetKey {
    fn new(shape: CurveShape, depth_delta: f64, t: f64) -> Self {
        Self([
            depth_delta.to_bits(),
            t.to_bits(),
            shape.a.to_bits(),
            shape.b.to_bits(),
        ])
    }
}

/// Memo of evaluated offsets keyed by exact `(depth_delta, t, a, b)`.
///
/// Depth values and frame times come from small discrete sets, so most lookups hit.
/// Results are identical with or without the cache.
#[derive(Clone, Debug, Default)]
pub struct OffsetCache {
    entries: HashMap<OffsetKey, Vec2>,
}

impl OffsetCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached offset, evaluating and storing it on first use.
    pub fn get_or_insert(&mut self, shape: CurveShape, depth_delta: f64, t: f64) -> Vec2 {
        *self
            .entries
            .entry(OffsetKey::new(shape, depth_delta, t))
            .or_insert_with(|| shape.offset(depth_delta, t))
    }

    /// Number of memoized entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/curve.rs"]
mod tests;
