use folio_core::config::SceneConfig;
use folio_core::frame::FrameLoop;
use folio_core::scene::{
    FloatingShape, PointCloud, PointerState, SceneFrame, SceneLoop, SceneRenderer, SceneUpdater,
    ShapeKind, Viewport, WireMaterial,
};
use folio_core::Rgb;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Default)]
struct CountingRenderer {
    frames: usize,
    last_shapes: usize,
    last_points: usize,
    last_camera: Vec3,
}

impl SceneRenderer for CountingRenderer {
    fn render(&mut self, frame: &SceneFrame<'_>) {
        self.frames += 1;
        self.last_shapes = frame.shapes.len();
        self.last_points = frame.points.len();
        self.last_camera = frame.viewpoint.position;
    }
}

fn shape(float_speed: f64) -> FloatingShape {
    FloatingShape {
        kind: ShapeKind::Box,
        material: WireMaterial {
            color: Rgb::from_hex(0x4285F4),
            opacity: 0.4,
        },
        position: Vec3::ZERO,
        rotation: Vec3::new(0.5, 1.0, 0.0),
        rotation_speed: Vec3::new(0.001, -0.002, 0.003),
        float_speed,
        float_range: 42.0,
    }
}

fn updater_with(shapes: Vec<FloatingShape>, points: PointCloud) -> SceneUpdater {
    SceneUpdater::from_parts(shapes, points, &SceneConfig::default(), Viewport::new(1280.0, 720.0))
}

// ---------------------------------------------------------------------------
// Floating shapes
// ---------------------------------------------------------------------------

#[test]
fn test_float_step_matches_sine_of_clock() {
    let clock = 1_700_000_000_123.0_f64;
    let mut scene = updater_with(vec![shape(0.01)], PointCloud::new());
    scene.update(clock, PointerState::default());

    let s = &scene.shapes()[0];
    let expected = ((clock * 0.01).sin() * 0.1) as f32;
    assert_eq!(s.position.y, expected, "y must move by exactly sin(t * 0.01) * 0.1");
    assert_eq!(s.position.x, 0.0);
    assert_eq!(s.position.z, 0.0);
}

#[test]
fn test_float_is_unclamped_increment() {
    let mut scene = updater_with(vec![shape(0.01)], PointCloud::new());
    // sin(t * 0.01) stays near 1 for a clock held at the peak.
    let peak = std::f64::consts::FRAC_PI_2 / 0.01;
    for _ in 0..1000 {
        scene.update(peak, PointerState::default());
    }
    let y = scene.shapes()[0].position.y;
    assert!(y > 99.0, "drift should accumulate past float_range, got {}", y);
    assert_eq!(scene.shapes()[0].float_range, 42.0, "float_range is inert");
}

#[test]
fn test_rotation_accumulates_per_axis() {
    let mut scene = updater_with(vec![shape(0.01)], PointCloud::new());
    let start = scene.shapes()[0].rotation;
    for _ in 0..10 {
        scene.update(0.0, PointerState::default());
    }
    let delta = scene.shapes()[0].rotation - start;
    let expected = Vec3::new(0.01, -0.02, 0.03);
    assert!(
        (delta - expected).abs().max_element() < 1e-5,
        "rotation delta {:?}, expected {:?}",
        delta,
        expected
    );
}

// ---------------------------------------------------------------------------
// Point cloud
// ---------------------------------------------------------------------------

#[test]
fn test_point_drift_uses_flat_index() {
    let clock = 12_345.0_f64;
    let points = PointCloud::from_points(&[
        (Vec3::new(1.0, 2.0, 3.0), Rgb::from_hex(0x4285F4)),
        (Vec3::new(-4.0, 5.0, -6.0), Rgb::from_hex(0xEA4335)),
    ]);
    let mut scene = updater_with(Vec::new(), points);
    scene.update(clock, PointerState::default());

    let p0 = scene.points().position(0).unwrap();
    let p1 = scene.points().position(1).unwrap();

    let amount = 0.1;
    let x0 = (1.0_f64 + (clock * 0.001).sin() * amount) as f32;
    let y0 = (2.0_f64 + (clock * 0.0015).cos() * amount) as f32;
    let x1 = (-4.0_f64 + ((clock + 3.0) * 0.001).sin() * amount) as f32;
    let y1 = (5.0_f64 + ((clock + 3.0) * 0.0015).cos() * amount) as f32;

    assert_eq!(p0, Vec3::new(x0, y0, 3.0));
    assert_eq!(p1, Vec3::new(x1, y1, -6.0), "z is never perturbed");
}

#[test]
fn test_point_colors_are_immutable() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut scene = SceneUpdater::new(&SceneConfig::default(), Viewport::new(800.0, 600.0), &mut rng);
    let colors = scene.points().colors().to_vec();
    for frame in 0..20 {
        scene.update(frame as f64 * 16.7, PointerState::new(30.0, -20.0));
    }
    assert_eq!(scene.points().colors(), colors.as_slice());
}

#[test]
fn test_spawn_counts_and_bounds() {
    let mut rng = StdRng::seed_from_u64(42);
    let config = SceneConfig::default();
    let scene = SceneUpdater::new(&config, Viewport::new(800.0, 600.0), &mut rng);

    assert_eq!(scene.shapes().len(), 15);
    assert_eq!(scene.points().len(), 1500);
    assert_eq!(scene.points().positions().len(), 4500);
    assert_eq!(scene.points().colors().len(), 4500);

    for s in scene.shapes() {
        assert!(s.position.x >= -400.0 && s.position.x <= 400.0);
        assert!(s.position.y >= -300.0 && s.position.y <= 300.0);
        assert!(s.position.z >= -250.0 && s.position.z <= 250.0);
        assert!(s.float_speed >= 0.005 && s.float_speed <= 0.025);
        assert!(s.float_range >= 20.0 && s.float_range <= 70.0);
        assert!(s.rotation_speed.abs().max_element() <= 0.005);
        assert_eq!(s.rotation.z, 0.0);
        assert!(config.shape_materials.contains(&s.material));
    }

    for i in 0..scene.points().len() {
        let p = scene.points().position(i).unwrap();
        assert!(p.x >= -1000.0 && p.x <= 1000.0);
        assert!(p.y >= -1000.0 && p.y <= 1000.0);
        assert!(p.z >= -500.0 && p.z <= 500.0);
        let c = scene.points().color(i).unwrap();
        assert!(config.point_palette.contains(&c), "point {} colour {:?}", i, c);
    }
}

#[test]
fn test_same_seed_same_scene() {
    let config = SceneConfig::default();
    let viewport = Viewport::new(800.0, 600.0);
    let a = SceneUpdater::new(&config, viewport, &mut StdRng::seed_from_u64(9));
    let b = SceneUpdater::new(&config, viewport, &mut StdRng::seed_from_u64(9));
    assert_eq!(a.shapes(), b.shapes());
    assert_eq!(a.points(), b.points());
}

#[test]
fn test_truncate_keeps_buffers_aligned() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut scene = SceneUpdater::new(&SceneConfig::default(), Viewport::new(800.0, 600.0), &mut rng);
    scene.truncate_points(1050);
    assert_eq!(scene.points().len(), 1050);
    assert_eq!(scene.points().positions().len(), 3150);
    assert_eq!(scene.points().colors().len(), 3150);
}

// ---------------------------------------------------------------------------
// Viewpoint
// ---------------------------------------------------------------------------

#[test]
fn test_easing_fixed_point() {
    let mut scene = updater_with(Vec::new(), PointCloud::new());
    scene.viewpoint_mut().position = Vec3::new(120.0, -45.0, 300.0);
    let before = scene.viewpoint().position;

    // pointer.x == view.x and pointer.y == -view.y
    scene.update(0.0, PointerState::new(120.0, 45.0));

    assert_eq!(scene.viewpoint().position, before);
}

#[test]
fn test_easing_moves_fraction_toward_pointer() {
    let mut scene = updater_with(Vec::new(), PointCloud::new());
    scene.update(0.0, PointerState::new(400.0, 200.0));

    let p = scene.viewpoint().position;
    assert!((p.x - 400.0 * 0.0005).abs() < 1e-6, "x = {}", p.x);
    assert!((p.y - -200.0 * 0.0005).abs() < 1e-6, "y = {}", p.y);
    assert_eq!(p.z, 300.0, "z is not eased");
}

#[test]
fn test_easing_converges() {
    let mut scene = updater_with(Vec::new(), PointCloud::new());
    let pointer = PointerState::new(100.0, 50.0);
    for _ in 0..20_000 {
        scene.update(0.0, pointer);
    }
    let p = scene.viewpoint().position;
    assert!((p.x - 100.0).abs() < 0.05, "x converged to {}", p.x);
    assert!((p.y + 50.0).abs() < 0.05, "y converged to {}", p.y);
}

#[test]
fn test_view_always_aims_at_origin() {
    let mut scene = updater_with(Vec::new(), PointCloud::new());
    for _ in 0..500 {
        scene.update(0.0, PointerState::new(-600.0, 300.0));
    }
    let origin_in_view = scene.viewpoint().view_matrix().transform_point3(Vec3::ZERO);
    assert!(origin_in_view.x.abs() < 1e-3, "origin off-axis: {:?}", origin_in_view);
    assert!(origin_in_view.y.abs() < 1e-3, "origin off-axis: {:?}", origin_in_view);
    assert!(origin_in_view.z < 0.0, "origin must be in front of the camera");
}

#[test]
fn test_resize_only_changes_aspect() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut scene = SceneUpdater::new(&SceneConfig::default(), Viewport::new(800.0, 600.0), &mut rng);
    let shapes = scene.shapes().to_vec();
    let camera = scene.viewpoint().position;

    scene.resize(Viewport::new(1000.0, 500.0));

    assert_eq!(scene.viewpoint().aspect, 2.0);
    assert_eq!(scene.viewpoint().position, camera);
    assert_eq!(scene.shapes(), shapes.as_slice());
}

// ---------------------------------------------------------------------------
// Rendering and scheduling
// ---------------------------------------------------------------------------

#[test]
fn test_empty_scene_frame_is_noop_render() {
    let mut scene = updater_with(Vec::new(), PointCloud::new());
    let mut renderer = CountingRenderer::default();
    scene.frame(1000.0, PointerState::default(), &mut renderer);

    assert_eq!(renderer.frames, 1);
    assert_eq!(renderer.last_shapes, 0);
    assert_eq!(renderer.last_points, 0);
}

#[test]
fn test_frame_renders_after_update() {
    let mut scene = updater_with(vec![shape(0.01), shape(0.02)], PointCloud::new());
    let mut renderer = CountingRenderer::default();
    scene.frame(500.0, PointerState::new(1000.0, 0.0), &mut renderer);

    assert_eq!(renderer.last_shapes, 2);
    assert!(renderer.last_camera.x > 0.0, "renderer sees the eased camera");
}

/// Publishes the camera position of the last rendered frame.
struct CameraProbe(Rc<Cell<Vec3>>);

impl SceneRenderer for CameraProbe {
    fn render(&mut self, frame: &SceneFrame<'_>) {
        self.0.set(frame.viewpoint.position);
    }
}

#[test]
fn test_scene_loop_reads_pointer_each_frame() {
    let pointer = Rc::new(Cell::new(PointerState::default()));
    let camera = Rc::new(Cell::new(Vec3::ZERO));
    let source = pointer.clone();

    let mut frames = FrameLoop::new();
    let handle = frames.spawn(SceneLoop::new(
        updater_with(Vec::new(), PointCloud::new()),
        CameraProbe(camera.clone()),
        move || source.get(),
    ));

    frames.tick(0.0);
    assert_eq!(camera.get().x, 0.0, "pointer at centre leaves x alone");

    pointer.set(PointerState::new(200.0, 0.0));
    frames.tick(16.0);
    assert!(camera.get().x > 0.0, "loop picked up the new pointer");

    handle.cancel();
    let frozen = camera.get();
    assert_eq!(frames.tick(32.0), 0);
    assert_eq!(camera.get(), frozen, "cancelled loop no longer renders");
}
