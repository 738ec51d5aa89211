use crate::foundation::{
    core::{GridCell, Point},
    error::{ParallaxError, ParallaxResult},
};

/// Immutable row-major grid of 8-bit depth values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepthField {
    width: u32,
    height: u32,
    values: Vec<u8>,
}

impl DepthField {
    /// Build a field from row-major `values` of length `width * height`.
    pub fn new(width: u32, height: u32, values: Vec<u8>) -> ParallaxResult<Self> {
        if width == 0 || height == 0 {
            return Err(ParallaxError::validation(
                "depth field width/height must be > 0",
            ));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| ParallaxError::validation("depth field dimensions overflow"))?;
        if values.len() != expected {
            return Err(ParallaxError::validation(format!(
                "depth field has {} values, expected {width}x{height} = {expected}",
                values.len()
            )));
        }
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Build a field from rows of equal length.
    pub fn from_rows(rows: &[Vec<u8>]) -> ParallaxResult<Self> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(ParallaxError::validation(format!(
                "depth row {y} has {} values, expected {width}",
                row.len()
            )));
        }
        let width = u32::try_from(width)
            .map_err(|_| ParallaxError::validation("depth field is too wide"))?;
        let height = u32::try_from(rows.len())
            .map_err(|_| ParallaxError::validation("depth field is too tall"))?;
        Self::new(width, height, rows.concat())
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Depth of cell `(x, y)`, clamped into the grid.
    pub fn get(&self, x: i64, y: i64) -> u8 {
        let x = x.clamp(0, i64::from(self.width) - 1) as usize;
        let y = y.clamp(0, i64::from(self.height) - 1) as usize;
        self.values[y * self.width as usize + x]
    }

    /// Every cell with its depth, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (GridCell, u8)> + '_ {
        let w = self.width;
        self.values.iter().enumerate().map(move |(i, &d)| {
            let i = i as u32;
            (GridCell { x: i % w, y: i / w }, d)
        })
    }

    /// Interpolated depth at a fractional grid coordinate.
    ///
    /// Each axis blends the containing cell with the neighbor on the far side of the
    /// cell center (the next cell when the point lies past the center, the previous
    /// cell otherwise). Weights grow with the distance from the center, so a point at
    /// the exact center returns the cell value. Neighbor indices are clamped to the
    /// grid, which is what makes edge and out-of-range queries well defined.
    pub fn sample(&self, point: Point) -> f64 {
        let bx = point.x.floor();
        let by = point.y.floor();
        let fx = point.x - bx;
        let fy = point.y - by;
        let partial_x = (fx - 0.5).abs();
        let partial_y = (fy - 0.5).abs();

        // One cell of slack on each side keeps the far-side neighbor clamped like the base.
        let bx = (bx as i64).clamp(-1, i64::from(self.width));
        let by = (by as i64).clamp(-1, i64::from(self.height));
        let nx = if fx > 0.5 { bx + 1 } else { bx - 1 };
        let ny = if fy > 0.5 { by + 1 } else { by - 1 };

        let base = f64::from(self.get(bx, by));
        let side_x = f64::from(self.get(nx, by));
        let side_y = f64::from(self.get(bx, ny));
        let diagonal = f64::from(self.get(nx, ny));

        base * (1.0 - partial_x) * (1.0 - partial_y)
            + side_x * partial_x * (1.0 - partial_y)
            + side_y * (1.0 - partial_x) * partial_y
            + diagonal * partial_x * partial_y
    }
}

#[cfg(test)]
#[path = "../../tests/unit/depth/field.rs"]
mod tests;
