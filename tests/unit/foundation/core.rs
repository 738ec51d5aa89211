use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(2)).is_err());
    assert!(
        FrameRange::new(FrameIndex(3), FrameIndex(3))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn progress_spans_unit_interval() {
    assert_eq!(FrameIndex(0).progress(20), 0.0);
    assert_eq!(FrameIndex(19).progress(20), 1.0);
    assert_eq!(FrameIndex(1).progress(3), 0.5);
    // Degenerate counts behave like two frames.
    assert_eq!(FrameIndex(1).progress(1), 1.0);
}

#[test]
fn grid_cell_origin_is_top_left() {
    let c = GridCell { x: 3, y: 7 };
    assert_eq!(c.origin(), Point::new(3.0, 7.0));
}
