use crate::foundation::core::Point;

/// Centers of every `stride`-th cell in both axes, row by row.
///
/// A `stride` of 0 is treated as 1.
pub fn cell_center_points(width: u32, height: u32, stride: u32) -> Vec<Point> {
    let stride = normalized_stride(stride);
    (0..height)
        .step_by(stride)
        .flat_map(|y| {
            (0..width)
                .step_by(stride)
                .map(move |x| Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5))
        })
        .collect()
}

fn normalized_stride(stride: u32) -> usize {
    if stride == 0 { 1 } else { stride as usize }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/points.rs"]
mod tests;
