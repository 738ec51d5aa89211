
use kurbo::{Affine, BezPath};

use crate::trajectory::builder::Trajectory;

/// Options for [`trajectories_to_svg`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SvgExportOpts {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Output units per grid cell.
    pub scale: f64,
    /// Stroke width in output units.
    pub stroke_width: f64,
}

impl Default for SvgExportOpts {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            scale: 1.0,
            stroke_width: 1.0,
        }
    }
}

/// Polyline path of one visible segment, in grid space.
///
/// A single-sample segment becomes a zero-length line so it still strokes.
pub fn segment_path(segment: &[kurbo::Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = segment.split_first() else {
        return path;
    };
    path.move_to(*first);
    if rest.is_empty() {
        path.line_to(*first);
    }
    for p in rest {
        path.line_to(*p);
    }
    path
}

/// Render every segment of `trajectories` as an SVG document, one `<path>` per segment.
pub fn trajectories_to_svg(trajectories: &[Trajectory], opts: &SvgExportOpts) -> String {
    let to_out = Affine::scale(opts.scale);
    let w = f64::from(opts.width) * opts.scale;
    let h = f64::from(opts.height) * opts.scale;

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
    ));
    for traj in trajectories {
        for segment in &traj.segments {
            let path = to_out * segment_path(segment);
            out.push_str(&format!(
                "<path d=\"{}\" stroke=\"black\" fill=\"none\" stroke-width=\"{}\"/>\n",
                path.to_svg(),
                opts.stroke_width
            ));
        }
    }
    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/export/svg.rs"]
mod tests;
