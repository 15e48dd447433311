use folio_core::config::SceneConfig;
use folio_core::quality::FrameRateGuard;
use folio_core::scene::{SceneUpdater, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn scene() -> SceneUpdater {
    let mut rng = StdRng::seed_from_u64(4);
    SceneUpdater::new(&SceneConfig::default(), Viewport::new(800.0, 600.0), &mut rng)
}

/// Feed `frames` evenly spaced frames across one second starting at `start`.
fn run_second(guard: &mut FrameRateGuard, scene: &mut SceneUpdater, start: f64, frames: u32) -> bool {
    let mut reduced = false;
    for i in 0..=frames {
        reduced |= guard.observe(start + i as f64 * (1000.0 / frames as f64), scene);
    }
    reduced
}

#[test]
fn test_no_measurement_during_start_delay() {
    let mut guard = FrameRateGuard::new(0.0);
    for ms in (0..5000).step_by(100) {
        assert_eq!(guard.record(ms as f64), None);
    }
    assert_eq!(guard.last_fps(), None);
}

#[test]
fn test_reports_fps_per_window() {
    let mut guard = FrameRateGuard::new(0.0);
    let mut reported = None;
    for i in 0..=60 {
        if let Some(fps) = guard.record(5000.0 + i as f64 * (1000.0 / 60.0)) {
            reported = Some(fps);
        }
    }
    let fps = reported.expect("window closed");
    assert!((60..=62).contains(&fps), "fps {}", fps);
}

#[test]
fn test_slow_frames_shrink_cloud() {
    let mut guard = FrameRateGuard::new(0.0);
    let mut scene = scene();
    assert!(run_second(&mut guard, &mut scene, 5000.0, 20));
    assert_eq!(scene.points().len(), 1050);
    assert_eq!(scene.points().positions().len(), 3150);
    assert_eq!(scene.points().colors().len(), 3150);
}

#[test]
fn test_fast_frames_keep_cloud() {
    let mut guard = FrameRateGuard::new(0.0);
    let mut scene = scene();
    assert!(!run_second(&mut guard, &mut scene, 5000.0, 60));
    assert_eq!(scene.points().len(), 1500);
}

#[test]
fn test_reduction_floor() {
    let guard = FrameRateGuard::new(0.0);
    assert_eq!(guard.target_points(10, 1500), Some(1050));
    assert_eq!(guard.target_points(10, 101), Some(70));
    assert_eq!(guard.target_points(10, 100), None);
    assert_eq!(guard.target_points(30, 1500), None);
}

#[test]
fn test_guard_engages_on_epoch_clock() {
    let created = 1_700_000_000_000.0;
    let mut guard = FrameRateGuard::new(created);
    let mut scene = scene();
    assert!(run_second(&mut guard, &mut scene, created + 5000.0, 20));
    assert_eq!(guard.last_fps(), Some(21));
}

#[test]
fn test_guard_ignores_timestamps_from_another_clock() {
    // Frame-relative timestamps are far behind an epoch start time.
    let mut guard = FrameRateGuard::new(1_700_000_000_000.0);
    let mut scene = scene();
    assert!(!run_second(&mut guard, &mut scene, 6000.0, 20));
    assert_eq!(guard.last_fps(), None);
    assert_eq!(scene.points().len(), 1500);
}
