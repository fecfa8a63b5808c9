use field_core::{FieldError, FieldResult, FrameHandle, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Slot holding the JS callback that `requestAnimationFrame` invokes.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `FrameScheduler` backed by `requestAnimationFrame`.
///
/// The callback itself is installed by the frame wiring after the field is
/// built, since it needs a handle back to the field.
pub struct RafScheduler {
    window: web::Window,
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    pub fn callback_slot(&self) -> FrameCallback {
        self.callback.clone()
    }

    /// Drop the JS callback. Later `request_frame` calls fail.
    pub fn release(&mut self) {
        self.callback.borrow_mut().take();
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> FieldResult<FrameHandle> {
        let slot = self.callback.borrow();
        let callback = slot.as_ref().ok_or(FieldError::SchedulerUnavailable)?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|e| {
                log::warn!("[raf] request_animation_frame failed: {:?}", e);
                FieldError::SchedulerUnavailable
            })
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }
}
