use crate::{
    foundation::{
        core::{FrameIndex, FrameRange, Point},
        error::{ParallaxError, ParallaxResult},
    },
    occlusion::sweep::FrameState,
    trajectory::point::TrackedPoint,
};

/// Traced motion of one point: its origin and every continuously visible span.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Trajectory {
    /// The tracked point this trajectory belongs to.
    pub origin: TrackedPoint,
    /// Visible spans in frame order; each holds one position per frame and is non-empty.
    pub segments: Vec<Vec<Point>>,
    /// Frame range covered by each entry of `segments`.
    pub spans: Vec<FrameRange>,
}

impl Trajectory {
    /// Total number of frames in which the point was visible.
    pub fn visible_frames(&self) -> u64 {
        self.segments.iter().map(|s| s.len() as u64).sum()
    }

    /// Visible spans as `(t_start, t_end)` pairs of normalized animation time.
    pub fn visible_intervals(&self, frames: u64) -> Vec<(f64, f64)> {
        self.spans
            .iter()
            .map(|r| {
                let last = FrameIndex(r.end.0.saturating_sub(1));
                (r.start.progress(frames), last.progress(frames))
            })
            .collect()
    }
}

#[derive(Clone, Debug)]
enum SpanState {
    Occluded,
    Open {
        start: FrameIndex,
        positions: Vec<Point>,
    },
}

/// Accumulates per-frame visibility into [`Trajectory`] segments.
///
/// Each point is a two-state machine: a visible frame opens (or extends) a segment,
/// an occluded frame closes the open one. [`TrajectoryBuilder::finish`] closes
/// whatever is still open.
#[derive(Clone, Debug)]
pub struct TrajectoryBuilder {
    trajectories: Vec<Trajectory>,
    states: Vec<SpanState>,
    next_frame: FrameIndex,
}

impl TrajectoryBuilder {
    /// Builder for `points`, expecting frames starting at 0.
    pub fn new(points: &[TrackedPoint]) -> Self {
        Self {
            trajectories: points
                .iter()
                .map(|&origin| Trajectory {
                    origin,
                    segments: Vec::new(),
                    spans: Vec::new(),
                })
                .collect(),
            states: vec![SpanState::Occluded; points.len()],
            next_frame: FrameIndex(0),
        }
    }

    /// Consume the next frame's visibility.
    ///
    /// Frames must arrive in increasing order without gaps, and carry one entry per point.
    pub fn push_frame(&mut self, state: &FrameState) -> ParallaxResult<()> {
        if state.frame != self.next_frame {
            return Err(ParallaxError::validation(format!(
                "expected frame {}, got frame {}",
                self.next_frame.0, state.frame.0
            )));
        }
        if state.positions.len() != self.states.len() {
            return Err(ParallaxError::validation(format!(
                "frame {} has {} positions for {} tracked points",
                state.frame.0,
                state.positions.len(),
                self.states.len()
            )));
        }

        for (id, position) in state.positions.iter().enumerate() {
            let slot = &mut self.states[id];
            match position {
                Some(p) => match *slot {
                    SpanState::Open {
                        ref mut positions, ..
                    } => positions.push(*p),
                    SpanState::Occluded => {
                        *slot = SpanState::Open {
                            start: state.frame,
                            positions: vec![*p],
                        };
                    }
                },
                None => {
                    let prev = std::mem::replace(slot, SpanState::Occluded);
                    close_span(&mut self.trajectories[id], prev, state.frame);
                }
            }
        }
        self.next_frame = FrameIndex(self.next_frame.0 + 1);
        Ok(())
    }

    /// `true` when point `id` currently has an open segment.
    pub fn is_extending(&self, id: usize) -> bool {
        matches!(self.states.get(id), Some(SpanState::Open { .. }))
    }

    /// Number of frames consumed so far.
    pub fn frames_seen(&self) -> u64 {
        self.next_frame.0
    }

    /// Close every open segment and return trajectories in point order.
    pub fn finish(mut self) -> Vec<Trajectory> {
        let end = self.next_frame;
        for (traj, state) in self.trajectories.iter_mut().zip(self.states) {
            close_span(traj, state, end);
        }
        self.trajectories
    }
}

/// Stable ascending-depth order for presentation; ties keep their input order.
pub fn sort_by_depth(trajectories: &mut [Trajectory]) {
    trajectories.sort_by(|a, b| a.origin.depth.total_cmp(&b.origin.depth));
}

fn close_span(traj: &mut Trajectory, state: SpanState, end: FrameIndex) {
    if let SpanState::Open { start, positions } = state {
        traj.spans.push(FrameRange { start, end });
        traj.segments.push(positions);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trajectory/builder.rs"]
mod tests;
