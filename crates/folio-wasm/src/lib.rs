//! Browser bindings for `folio-core`.
//!
//! The 3D backdrop is pull-based: JavaScript calls [`SceneWorld::step`] from
//! its own render loop and reads the point and shape buffers straight out of
//! wasm memory. The 2D particle canvas is push-based and drives itself via
//! `requestAnimationFrame` until its handle is stopped or freed.
use folio_core::{BackdropConfig, ConfigError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

mod canvas;
mod scene;
mod schedule;
mod ui;

pub use canvas::ParticleCanvas;
pub use scene::SceneWorld;
pub use schedule::AnimationHandle;
pub use ui::{
    ContactSender, FieldStyle, KonamiListener, MobileMenu, NavScroll, Toast, TypewriterText,
};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A second init (e.g. hot reload) leaves the existing logger in place.
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-wasm initialised");
}

/// Parse an optional JSON config, falling back to defaults.
pub(crate) fn load_config(json: Option<String>) -> Result<BackdropConfig, JsValue> {
    match json {
        Some(json) => BackdropConfig::from_json(&json).map_err(config_error),
        None => Ok(BackdropConfig::default()),
    }
}

fn config_error(err: ConfigError) -> JsValue {
    log::error!("invalid backdrop config: {}", err);
    JsValue::from_str(&err.to_string())
}

/// Seeded from the browser's CSPRNG, or the wall clock if that is unavailable.
pub(crate) fn seeded_rng() -> StdRng {
    let mut seed = [0u8; 8];
    match getrandom::getrandom(&mut seed) {
        Ok(()) => StdRng::seed_from_u64(u64::from_le_bytes(seed)),
        Err(err) => {
            log::warn!("getrandom failed ({}), seeding from clock", err);
            StdRng::seed_from_u64(js_sys::Date::now() as u64)
        }
    }
}
