use std::{fs::File, io::BufReader, path::Path};

use crate::{
    depth::field::DepthField,
    foundation::{
        core::Point,
        error::{ParallaxError, ParallaxResult},
    },
    motion::curve::CurveShape,
};

/// Curve and run parameters of a trace.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Curve sharpness (dimensionless).
    pub a: f64,
    /// Depth-to-offset divisor; must be non-zero.
    pub b: f64,
    /// Depth value that maps to zero displacement.
    pub zero_depth: f64,
    /// Number of animation frames; values below 2 are corrected to 2.
    pub frames: u32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            a: 0.01,
            b: 80.0 / 3.0,
            zero_depth: 50.0,
            frames: 20,
        }
    }
}

impl ParallaxConfig {
    /// Check parameter preconditions.
    pub fn validate(&self) -> ParallaxResult<()> {
        self.curve_shape()?;
        if !self.zero_depth.is_finite() {
            return Err(ParallaxError::invalid_config("zero_depth must be finite"));
        }
        Ok(())
    }

    /// The validated curve shape `(a, b)`.
    pub fn curve_shape(&self) -> ParallaxResult<CurveShape> {
        CurveShape::new(self.a, self.b)
    }

    /// Frame count with the lower bound of 2 applied.
    pub fn normalized_frames(&self) -> u64 {
        if self.frames < 2 {
            tracing::warn!(frames = self.frames, "frame count below 2, using 2");
            return 2;
        }
        u64::from(self.frames)
    }
}

/// JSON-facing trace input: a depth grid, tracked origins and parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Depth rows, top to bottom; all rows must have equal length.
    pub depth: Vec<Vec<u8>>,
    /// Tracked point origins in grid coordinates.
    pub points: Vec<Point>,
    /// Trace parameters.
    #[serde(default)]
    pub config: ParallaxConfig,
}

impl Scene {
    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ParallaxResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ParallaxError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ParallaxResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ParallaxError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate grid shape, origins and parameters.
    pub fn validate(&self) -> ParallaxResult<()> {
        self.config.validate()?;
        self.depth_field()?;
        if let Some(i) = self.points.iter().position(|p| !p.is_finite()) {
            return Err(ParallaxError::validation(format!(
                "point {i} has a non-finite coordinate"
            )));
        }
        Ok(())
    }

    /// Materialize the depth grid.
    pub fn depth_field(&self) -> ParallaxResult<DepthField> {
        DepthField::from_rows(&self.depth)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
