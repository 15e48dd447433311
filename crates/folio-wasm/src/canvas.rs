use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use folio_core::scene::Viewport;
use folio_core::{ParticleField, Rgb, Surface};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::schedule::{animate, AnimationHandle};

struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.ctx.begin_path();
        if let Err(err) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::warn!("arc failed: {:?}", err);
            return;
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgb, width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}

/// The 2D particle background drawn on a full-window canvas.
#[wasm_bindgen]
pub struct ParticleCanvas {
    canvas: HtmlCanvasElement,
    field: Rc<RefCell<ParticleField>>,
    animation: AnimationHandle,
}

#[wasm_bindgen]
impl ParticleCanvas {
    /// Size `canvas` to `width` x `height`, spawn the particles and start
    /// animating.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        width: u32,
        height: u32,
        config_json: Option<String>,
    ) -> Result<ParticleCanvas, JsValue> {
        let config = crate::load_config(config_json)?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        canvas.set_width(width);
        canvas.set_height(height);
        let viewport = Viewport::new(width as f32, height as f32);
        let field = Rc::new(RefCell::new(ParticleField::new(
            &config.canvas,
            viewport,
            &mut crate::seeded_rng(),
        )));

        let mut surface = CanvasSurface { ctx };
        let shared = field.clone();
        let animation = animate(move |_now: f64| shared.borrow_mut().frame(&mut surface))?;

        log::info!(
            "ParticleCanvas started: {} particles",
            field.borrow().particles().len()
        );
        Ok(ParticleCanvas {
            canvas,
            field,
            animation,
        })
    }

    /// Window `resize` handler. Particles keep their positions.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.field
            .borrow_mut()
            .resize(Viewport::new(width as f32, height as f32));
    }

    pub fn stop(&self) {
        self.animation.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.animation.running()
    }
}
