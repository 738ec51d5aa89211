use super::*;

fn config(frames: u32) -> ParallaxConfig {
    ParallaxConfig {
        a: 0.0,
        b: 80.0,
        zero_depth: 10.0,
        frames,
    }
}

fn two_layer_field() -> DepthField {
    DepthField::from_rows(&[vec![10, 10], vec![10, 90]]).unwrap()
}

#[test]
fn prepare_rejects_zero_b() {
    let cfg = ParallaxConfig {
        b: 0.0,
        ..config(4)
    };
    let err = PreparedScene::new(two_layer_field(), &[], &cfg).unwrap_err();
    assert!(matches!(err, ParallaxError::InvalidConfig(_)));
}

#[test]
fn prepare_corrects_frame_count() {
    let prepared = PreparedScene::new(two_layer_field(), &[], &config(0)).unwrap();
    assert_eq!(prepared.frames(), 2);
    assert_eq!(prepared.index().depths(), &[10, 90]);
}

#[test]
fn prepare_accepts_far_out_of_range_origins() {
    let field = DepthField::from_rows(&[vec![0, 100]]).unwrap();
    let origins = [Point::new(-1e300, 0.5), Point::new(1e300, 0.5)];
    let prepared = PreparedScene::new(field, &origins, &ParallaxConfig::default()).unwrap();
    assert_eq!(prepared.points()[0].depth, 0.0);
    assert_eq!(prepared.points()[1].depth, 100.0);
}

#[test]
fn trace_frame_checks_bounds() {
    let prepared =
        PreparedScene::new(two_layer_field(), &[Point::new(0.5, 0.5)], &config(3)).unwrap();
    let mut cache = OffsetCache::new();
    assert!(trace_frame(&prepared, FrameIndex(2), &mut cache).is_ok());
    assert!(trace_frame(&prepared, FrameIndex(3), &mut cache).is_err());
}

#[test]
fn stats_account_for_every_sample() {
    let origins = [Point::new(0.5, 0.5), Point::new(1.5, 1.5)];
    let prepared = PreparedScene::new(two_layer_field(), &origins, &config(5)).unwrap();
    let (trajs, stats) =
        trace_trajectories_with_stats(&prepared, &TraceThreading::default()).unwrap();

    assert_eq!(stats.frames, 5);
    assert_eq!(stats.points, 2);
    assert_eq!(stats.layers, 2);
    assert_eq!(stats.visible_samples + stats.occluded_samples, 10);
    assert!(stats.occluded_samples > 0);
    let visible: u64 = trajs.iter().map(Trajectory::visible_frames).sum();
    assert_eq!(visible, stats.visible_samples);
    assert_eq!(
        stats.segments,
        trajs.iter().map(|t| t.segments.len() as u64).sum::<u64>()
    );
}

#[test]
fn parallel_threading_matches_sequential() {
    let origins = [Point::new(0.5, 0.5), Point::new(0.9, 0.2), Point::new(1.5, 1.5)];
    let prepared = PreparedScene::new(two_layer_field(), &origins, &config(9)).unwrap();
    let seq = trace_trajectories(&prepared).unwrap();
    let (par, _) = trace_trajectories_with_stats(
        &prepared,
        &TraceThreading {
            parallel: true,
            threads: Some(2),
        },
    )
    .unwrap();
    assert_eq!(seq, par);
}

#[test]
fn trace_scene_validates_input() {
    let scene = Scene {
        depth: vec![],
        points: vec![],
        config: ParallaxConfig::default(),
    };
    assert!(trace_scene(&scene).is_err());
}
