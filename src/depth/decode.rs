use anyhow::Context;

use crate::{ParallaxResult, depth::field::DepthField};

/// Decode encoded image bytes (PNG, JPEG, ...) into a depth field.
///
/// Pixels are converted to 8-bit luma; brighter pixels become larger depth values.
pub fn decode_depth_image(bytes: &[u8]) -> ParallaxResult<DepthField> {
    let dyn_img = image::load_from_memory(bytes).context("decode depth image from memory")?;
    let luma = dyn_img.to_luma8();
    let (width, height) = luma.dimensions();
    DepthField::new(width, height, luma.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/depth/decode.rs"]
mod tests;
