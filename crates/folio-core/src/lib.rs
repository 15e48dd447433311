//! Animation and interaction core for the portfolio site backdrop.
//!
//! Two independent per-frame loops live here: the 3D [`scene`] updater
//! (floating wireframe shapes, a drifting point cloud and a pointer-eased
//! viewpoint) and the 2D [`canvas`] particle field with proximity links.
//! The [`ui`] module holds the small timer-driven state machines the page
//! wires to DOM events. Nothing in this crate touches the browser; the
//! `folio-wasm` crate provides the bindings.
pub mod canvas;
pub mod color;
pub mod config;
pub mod frame;
pub mod math;
pub mod quality;
pub mod scene;
pub mod ui;

pub use canvas::{CanvasParticle, ParticleField, Surface};
pub use color::Rgb;
pub use config::{BackdropConfig, CanvasConfig, ConfigError, SceneConfig};
pub use frame::{FrameLoop, FrameTask, LoopHandle};
pub use scene::{PointerState, SceneFrame, SceneRenderer, SceneUpdater, Viewport};
