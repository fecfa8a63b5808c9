#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod scheduler;
mod surface;

/// Host-side handle to a mounted particle field.
///
/// Inert when mounting failed; `unmount` is always safe to call.
#[wasm_bindgen]
pub struct FieldHandle {
    mounted: Option<frame::MountedField>,
}

#[wasm_bindgen]
impl FieldHandle {
    /// Stop animating and release the canvas and resize listener.
    pub fn unmount(&mut self) {
        if let Some(mut mounted) = self.mounted.take() {
            mounted.teardown();
            log::info!("particle field unmounted");
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.mounted.as_ref().is_some_and(|m| m.is_running())
    }
}

/// Attach a particle field to `container` and start it.
///
/// Never throws: the field is decorative, so failures are logged and an
/// inert handle is returned.
#[wasm_bindgen]
pub fn mount(container: &web::HtmlElement) -> FieldHandle {
    match frame::mount_into(container) {
        Ok(mounted) => FieldHandle {
            mounted: Some(mounted),
        },
        Err(e) => {
            log::warn!("particle field disabled: {:?}", e);
            FieldHandle { mounted: None }
        }
    }
}

thread_local! {
    static AUTO_MOUNTED: RefCell<Option<FieldHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-field-web starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let container = dom::window_document()
        .and_then(|(_, document)| document.get_element_by_id(constants::AUTO_MOUNT_ID))
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if let Some(container) = container {
        let handle = mount(&container);
        AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(handle));
    } else {
        log::info!(
            "no #{} element; waiting for an explicit mount()",
            constants::AUTO_MOUNT_ID
        );
    }
    Ok(())
}
