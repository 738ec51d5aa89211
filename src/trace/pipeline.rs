use crate::{
    depth::{field::DepthField, index::DepthIndex},
    foundation::{
        core::{FrameIndex, Point},
        error::{ParallaxError, ParallaxResult},
    },
    motion::curve::{CurveShape, OffsetCache},
    occlusion::sweep::{FrameProcessor, FrameState},
    scene::model::{ParallaxConfig, Scene},
    trajectory::{
        builder::{Trajectory, TrajectoryBuilder},
        point::TrackedPoint,
    },
};

/// Everything a trace needs, built once from the depth field and origins.
#[derive(Clone, Debug)]
pub struct PreparedScene {
    field: DepthField,
    index: DepthIndex,
    points: Vec<TrackedPoint>,
    shape: CurveShape,
    zero_depth: f64,
    frames: u64,
}

impl PreparedScene {
    /// Validate `config`, index `field` and anchor `origins` on it.
    pub fn new(
        field: DepthField,
        origins: &[Point],
        config: &ParallaxConfig,
    ) -> ParallaxResult<Self> {
        config.validate()?;
        let shape = config.curve_shape()?;
        let points = TrackedPoint::anchor_all(origins, &field)?;
        let index = DepthIndex::build(&field);
        Ok(Self {
            field,
            index,
            points,
            shape,
            zero_depth: config.zero_depth,
            frames: config.normalized_frames(),
        })
    }

    /// Prepare a parsed [`Scene`].
    pub fn from_scene(scene: &Scene) -> ParallaxResult<Self> {
        scene.validate()?;
        Self::new(scene.depth_field()?, &scene.points, &scene.config)
    }

    /// The depth field.
    pub fn field(&self) -> &DepthField {
        &self.field
    }

    /// The depth reverse index.
    pub fn index(&self) -> &DepthIndex {
        &self.index
    }

    /// Tracked points in input order.
    pub fn points(&self) -> &[TrackedPoint] {
        &self.points
    }

    /// Frame count (at least 2).
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Curve shape.
    pub fn shape(&self) -> CurveShape {
        self.shape
    }

    /// Per-frame processor bound to this scene.
    pub fn processor(&self) -> FrameProcessor<'_> {
        FrameProcessor::new(&self.index, self.shape, self.zero_depth)
    }
}

#[derive(Clone, Debug, Default)]
/// Threading controls for the occlusion pass.
pub struct TraceThreading {
    /// Test points in parallel within each frame when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Aggregated trace counters.
pub struct TraceStats {
    /// Frames processed.
    pub frames: u64,
    /// Tracked points.
    pub points: u64,
    /// Distinct depth layers in the field.
    pub layers: u64,
    /// Point-frames in which the point was visible.
    pub visible_samples: u64,
    /// Point-frames in which the point was hidden.
    pub occluded_samples: u64,
    /// Closed segments across all trajectories.
    pub segments: u64,
}

/// Resolve a single frame of `prepared`.
pub fn trace_frame(
    prepared: &PreparedScene,
    frame: FrameIndex,
    cache: &mut OffsetCache,
) -> ParallaxResult<FrameState> {
    if frame.0 >= prepared.frames {
        return Err(ParallaxError::validation(format!(
            "frame {} is out of bounds for {} frames",
            frame.0, prepared.frames
        )));
    }
    Ok(prepared
        .processor()
        .process(&prepared.points, frame, prepared.frames, cache, None))
}

/// Trace every frame sequentially and return one trajectory per point, in input order.
pub fn trace_trajectories(prepared: &PreparedScene) -> ParallaxResult<Vec<Trajectory>> {
    trace_trajectories_with_stats(prepared, &TraceThreading::default()).map(|(t, _)| t)
}

/// Trace every frame and return trajectories together with counters.
///
/// Frames are always consumed in order; `threading` only affects the per-frame
/// occlusion pass and never changes the result.
#[tracing::instrument(skip_all, fields(frames = prepared.frames, points = prepared.points.len()))]
pub fn trace_trajectories_with_stats(
    prepared: &PreparedScene,
    threading: &TraceThreading,
) -> ParallaxResult<(Vec<Trajectory>, TraceStats)> {
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let processor = prepared.processor();
    let mut cache = OffsetCache::new();
    let mut builder = TrajectoryBuilder::new(&prepared.points);
    let mut stats = TraceStats {
        points: prepared.points.len() as u64,
        layers: prepared.index.layer_count() as u64,
        ..TraceStats::default()
    };

    for f in 0..prepared.frames {
        let state = processor.process(
            &prepared.points,
            FrameIndex(f),
            prepared.frames,
            &mut cache,
            pool.as_ref(),
        );
        stats.frames += 1;
        stats.visible_samples += state.visible_count() as u64;
        stats.occluded_samples += state.occluded_count() as u64;
        builder.push_frame(&state)?;
    }

    let trajectories = builder.finish();
    stats.segments = trajectories.iter().map(|t| t.segments.len() as u64).sum();
    tracing::debug!(
        segments = stats.segments,
        occluded = stats.occluded_samples,
        cached_offsets = cache.len(),
        "trace finished"
    );
    Ok((trajectories, stats))
}

/// Prepare and trace a parsed [`Scene`] sequentially.
pub fn trace_scene(scene: &Scene) -> ParallaxResult<Vec<Trajectory>> {
    trace_trajectories(&PreparedScene::from_scene(scene)?)
}

fn build_thread_pool(threads: Option<usize>) -> ParallaxResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ParallaxError::trace(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/trace/pipeline.rs"]
mod tests;
