use folio_core::quality::FrameRateGuard;
use folio_core::scene::FloatingShape;
use folio_core::{PointerState, SceneFrame, SceneRenderer, SceneUpdater, Viewport};
use wasm_bindgen::prelude::*;

/// GPU-compatible shape instance: 48 bytes, read by the JS mesh updater.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuShape {
    position: [f32; 3], // 12 bytes
    size: f32,          //  4 bytes
    rotation: [f32; 3], // 12 bytes
    opacity: f32,       //  4 bytes
    color: [f32; 3],    // 12 bytes
    kind: u32,          //  4 bytes
}

impl From<&FloatingShape> for GpuShape {
    fn from(shape: &FloatingShape) -> Self {
        GpuShape {
            position: shape.position.to_array(),
            size: shape.kind.size(),
            rotation: shape.rotation.to_array(),
            opacity: shape.material.opacity,
            color: shape.material.color.to_array(),
            kind: shape.kind as u32,
        }
    }
}

/// Copies each finished frame into the instance buffer.
#[derive(Default)]
struct InstanceWriter {
    shapes: Vec<GpuShape>,
    view: [f32; 16],
    projection: [f32; 16],
}

impl SceneRenderer for InstanceWriter {
    fn render(&mut self, frame: &SceneFrame<'_>) {
        self.shapes.clear();
        self.shapes.extend(frame.shapes.iter().map(GpuShape::from));
        self.view = frame.viewpoint.view_matrix().to_cols_array();
        self.projection = frame.viewpoint.projection_matrix().to_cols_array();
    }
}

/// The 3D backdrop: floating shapes, drifting points and a pointer-led camera.
#[wasm_bindgen]
pub struct SceneWorld {
    updater: SceneUpdater,
    guard: FrameRateGuard,
    pointer: PointerState,
    viewport: Viewport,
    output: InstanceWriter,
}

#[wasm_bindgen]
impl SceneWorld {
    /// Build a scene for a `width` x `height` view. `config_json` may
    /// override any field of the scene config.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, config_json: Option<String>) -> Result<SceneWorld, JsValue> {
        let config = crate::load_config(config_json)?;
        let viewport = Viewport::new(width, height);
        let updater = SceneUpdater::new(&config.scene, viewport, &mut crate::seeded_rng());

        log::info!(
            "SceneWorld created: {} shapes, {} points",
            updater.shapes().len(),
            updater.points().len()
        );

        let mut world = SceneWorld {
            updater,
            guard: FrameRateGuard::new(js_sys::Date::now()),
            pointer: PointerState::default(),
            viewport,
            output: InstanceWriter::default(),
        };
        world.output.render(&world.updater.snapshot());
        Ok(world)
    }

    /// Advance one frame. Returns the time spent in milliseconds.
    ///
    /// `now` drives the animation and must be epoch milliseconds
    /// (`Date.now()`), not a `requestAnimationFrame` or `performance.now()`
    /// timestamp. The frame-rate guard always reads `Date.now()` itself, so
    /// it measures on the clock it was created with.
    pub fn step(&mut self, now: f64) -> f32 {
        let start = js_sys::Date::now();
        self.updater.frame(now, self.pointer, &mut self.output);
        self.guard.observe(start, &mut self.updater);
        (js_sys::Date::now() - start) as f32
    }

    /// `mousemove` handler input.
    pub fn set_pointer(&mut self, client_x: f32, client_y: f32) {
        self.pointer = PointerState::from_client(client_x, client_y, self.viewport);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.updater.resize(self.viewport);
        self.output.render(&self.updater.snapshot());
    }

    pub fn point_count(&self) -> usize {
        self.updater.points().len()
    }

    /// Flat `xyz` positions; the view is invalidated when the cloud shrinks.
    pub fn positions_ptr(&self) -> *const f32 {
        self.updater.points().positions().as_ptr()
    }

    pub fn colors_ptr(&self) -> *const f32 {
        self.updater.points().colors().as_ptr()
    }

    pub fn shape_count(&self) -> usize {
        self.output.shapes.len()
    }

    pub fn shape_buffer_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<GpuShape, f32>(&self.output.shapes).as_ptr()
    }

    pub fn shape_buffer_byte_length(&self) -> usize {
        bytemuck::cast_slice::<GpuShape, u8>(&self.output.shapes).len()
    }

    pub fn view_matrix(&self) -> Vec<f32> {
        self.output.view.to_vec()
    }

    pub fn projection_matrix(&self) -> Vec<f32> {
        self.output.projection.to_vec()
    }

    pub fn camera_position(&self) -> Vec<f32> {
        self.updater.viewpoint().position.to_array().to_vec()
    }

    /// Frame rate from the last closed measurement window, if any.
    pub fn last_fps(&self) -> Option<u32> {
        self.guard.last_fps()
    }
}
