use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{FrameTask, LoopHandle};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Keeps a `requestAnimationFrame` loop alive.
///
/// Stopping takes effect on the next callback, which releases the closure
/// and does not request another frame. Freeing the handle from JavaScript
/// stops the loop as well.
#[wasm_bindgen]
pub struct AnimationHandle {
    handle: LoopHandle,
}

#[wasm_bindgen]
impl AnimationHandle {
    pub fn stop(&self) {
        self.handle.cancel();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        !self.handle.is_cancelled()
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.handle.cancel();
    }
}

/// Run `task` once per animation frame with `Date.now()` as its clock.
pub(crate) fn animate<T: FrameTask + 'static>(mut task: T) -> Result<AnimationHandle, JsValue> {
    let handle = LoopHandle::new();
    let cancelled = handle.clone();

    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();

    *slot.borrow_mut() = Some(Closure::new(move |_timestamp: f64| {
        if cancelled.is_cancelled() {
            // Breaks the closure <-> slot cycle so both are freed.
            next.borrow_mut().take();
            log::debug!("animation loop stopped");
            return;
        }
        task.frame(js_sys::Date::now());
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = request_frame(callback) {
                log::error!("requestAnimationFrame failed: {:?}", err);
            }
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        request_frame(callback)?;
    }
    Ok(AnimationHandle { handle })
}

fn request_frame(callback: &FrameCallback) -> Result<i32, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}
