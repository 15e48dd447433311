use rand::Rng;

use crate::config::SceneConfig;
use crate::frame::FrameTask;
use crate::scene::points::PointCloud;
use crate::scene::shape::FloatingShape;
use crate::scene::viewpoint::{PointerState, Viewpoint, Viewport};

/// Borrowed view of everything a renderer needs for one frame.
pub struct SceneFrame<'a> {
    pub shapes: &'a [FloatingShape],
    pub points: &'a PointCloud,
    pub viewpoint: &'a Viewpoint,
}

/// Draws a finished scene frame. Implemented by the host.
pub trait SceneRenderer {
    fn render(&mut self, frame: &SceneFrame<'_>);
}

/// Owns the scene objects and advances them once per frame.
pub struct SceneUpdater {
    shapes: Vec<FloatingShape>,
    points: PointCloud,
    viewpoint: Viewpoint,
    float_step: f64,
    point_drift: f64,
    pointer_easing: f32,
}

impl SceneUpdater {
    /// Spawn shapes and points from `config` for a view of size `viewport`.
    pub fn new<R: Rng + ?Sized>(config: &SceneConfig, viewport: Viewport, rng: &mut R) -> Self {
        let shapes: Vec<FloatingShape> = (0..config.shape_count)
            .filter_map(|_| FloatingShape::spawn(rng, config))
            .collect();
        let points = PointCloud::spawn(rng, config);

        log::debug!(
            "scene spawned: {} shapes, {} points",
            shapes.len(),
            points.len()
        );

        Self::from_parts(shapes, points, config, viewport)
    }

    /// Assemble an updater around pre-built objects.
    pub fn from_parts(
        shapes: Vec<FloatingShape>,
        points: PointCloud,
        config: &SceneConfig,
        viewport: Viewport,
    ) -> Self {
        let viewpoint = Viewpoint::new(
            config.camera_distance,
            config.fov_y_degrees,
            viewport.aspect(),
            config.near,
            config.far,
        );
        Self {
            shapes,
            points,
            viewpoint,
            float_step: config.float_step,
            point_drift: config.point_drift,
            pointer_easing: config.pointer_easing,
        }
    }

    /// Advance every object to the next frame at `clock` milliseconds.
    pub fn update(&mut self, clock: f64, pointer: PointerState) {
        for shape in &mut self.shapes {
            shape.advance(clock, self.float_step);
        }
        self.points.drift(clock, self.point_drift);
        self.viewpoint.ease_toward(pointer, self.pointer_easing);
    }

    /// [`update`](Self::update), then hand the result to `renderer`.
    pub fn frame<R: SceneRenderer + ?Sized>(
        &mut self,
        clock: f64,
        pointer: PointerState,
        renderer: &mut R,
    ) {
        self.update(clock, pointer);
        renderer.render(&self.snapshot());
    }

    pub fn snapshot(&self) -> SceneFrame<'_> {
        SceneFrame {
            shapes: &self.shapes,
            points: &self.points,
            viewpoint: &self.viewpoint,
        }
    }

    /// Track a new viewport size. Only the projection changes.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewpoint.set_aspect(viewport.aspect());
        log::debug!("scene resized to {}x{}", viewport.width, viewport.height);
    }

    /// Drop the tail of the point cloud down to `count` points.
    pub fn truncate_points(&mut self, count: usize) {
        let before = self.points.len();
        self.points.truncate(count);
        log::debug!("point cloud reduced from {} to {}", before, self.points.len());
    }

    pub fn shapes(&self) -> &[FloatingShape] {
        &self.shapes
    }

    pub fn shapes_mut(&mut self) -> &mut [FloatingShape] {
        &mut self.shapes
    }

    pub fn points(&self) -> &PointCloud {
        &self.points
    }

    pub fn viewpoint(&self) -> &Viewpoint {
        &self.viewpoint
    }

    pub fn viewpoint_mut(&mut self) -> &mut Viewpoint {
        &mut self.viewpoint
    }
}

/// Binds an updater to its renderer and pointer source so the pair can be
/// driven as a single frame task.
pub struct SceneLoop<R, P> {
    pub updater: SceneUpdater,
    pub renderer: R,
    pointer: P,
}

impl<R, P> SceneLoop<R, P>
where
    R: SceneRenderer,
    P: FnMut() -> PointerState,
{
    pub fn new(updater: SceneUpdater, renderer: R, pointer: P) -> Self {
        Self {
            updater,
            renderer,
            pointer,
        }
    }
}

impl<R, P> FrameTask for SceneLoop<R, P>
where
    R: SceneRenderer,
    P: FnMut() -> PointerState,
{
    fn frame(&mut self, now: f64) {
        let pointer = (self.pointer)();
        self.updater.frame(now, pointer, &mut self.renderer);
    }
}
