//! Parallax is a depth-driven motion tracer.
//!
//! Given a grid of 8-bit depth values and a set of points anchored on it, it animates every
//! point along a depth-dependent offset curve and works out, frame by frame, which points are
//! hidden behind nearer depth layers. The result is, per point, the list of continuously
//! visible motion segments.
//!
//! # Pipeline overview
//!
//! 1. **Prepare**: `DepthField + origins + ParallaxConfig -> PreparedScene`
//!    (depth reverse index, tracked points with sampled depth, validated curve shape)
//! 2. **Process**: `PreparedScene + FrameIndex -> FrameState`
//!    (displaced positions, layer sweep, occlusion per point)
//! 3. **Accumulate**: `FrameState`s in frame order `-> Vec<Trajectory>`
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the offset cache and the optional parallel occlusion pass never
//!   change results.
//! - **No IO in the core**: depth decoding and SVG export sit beside the tracer, not in it.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod depth;
mod export;
mod foundation;
mod motion;
mod occlusion;
mod scene;
mod trace;
mod trajectory;

pub use depth::decode::decode_depth_image;
pub use depth::field::DepthField;
pub use depth::index::DepthIndex;
pub use export::svg::{SvgExportOpts, segment_path, trajectories_to_svg};
pub use foundation::core::{FrameIndex, FrameRange, GridCell, Point, Vec2};
pub use foundation::error::{ParallaxError, ParallaxResult};
pub use motion::curve::{CurveShape, OffsetCache, OffsetCurve};
pub use occlusion::sweep::{FrameProcessor, FrameState};
pub use occlusion::tester::OcclusionTester;
pub use scene::model::{ParallaxConfig, Scene};
pub use scene::points::cell_center_points;
pub use trace::pipeline::{
    PreparedScene, TraceStats, TraceThreading, trace_frame, trace_scene, trace_trajectories,
    trace_trajectories_with_stats,
};
pub use trajectory::builder::{Trajectory, TrajectoryBuilder, sort_by_depth};
pub use trajectory::fingerprint::{TraceFingerprint, fingerprint_trajectories};
pub use trajectory::point::TrackedPoint;
