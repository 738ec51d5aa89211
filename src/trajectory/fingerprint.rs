use crate::{foundation::math::Fnv1a64, trajectory::builder::Trajectory};

/// 128-bit digest of a trace result, stable across runs and thread counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct TraceFingerprint {
    /// High half.
    pub hi: u64,
    /// Low half.
    pub lo: u64,
}

/// Hash origins, spans and every coordinate bit pattern of `trajectories`.
pub fn fingerprint_trajectories(trajectories: &[Trajectory]) -> TraceFingerprint {
    let mut a = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    let mut b = Fnv1a64::new(0x9ae16a3b2f90404f);

    write_u64_pair(&mut a, &mut b, trajectories.len() as u64);
    for traj in trajectories {
        write_u64_pair(&mut a, &mut b, traj.origin.id as u64);
        write_f64_pair(&mut a, &mut b, traj.origin.x);
        write_f64_pair(&mut a, &mut b, traj.origin.y);
        write_f64_pair(&mut a, &mut b, traj.origin.depth);

        write_u64_pair(&mut a, &mut b, traj.segments.len() as u64);
        for (segment, span) in traj.segments.iter().zip(&traj.spans) {
            write_u64_pair(&mut a, &mut b, span.start.0);
            write_u64_pair(&mut a, &mut b, span.end.0);
            write_u64_pair(&mut a, &mut b, segment.len() as u64);
            for p in segment {
                write_f64_pair(&mut a, &mut b, p.x);
                write_f64_pair(&mut a, &mut b, p.y);
            }
        }
        write_u8_pair(&mut a, &mut b, 0xff);
    }

    TraceFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn write_u8_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_u8(v);
    b.write_u8(v);
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

fn write_f64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: f64) {
    a.write_f64(v);
    b.write_f64(v);
}

#[cfg(test)]
#[path = "../../tests/unit/trajectory/fingerprint.rs"]
mod tests;
