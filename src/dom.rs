use crate::constants::*;
use field_core::{FieldConfig, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Create the field's canvas as the last child of `container`.
pub fn create_canvas(
    document: &web::Document,
    container: &web::HtmlElement,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    _ = canvas.set_attribute("style", CANVAS_STYLE);
    _ = canvas.set_attribute("aria-hidden", "true");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}

#[inline]
pub fn remove_canvas(canvas: &web::HtmlCanvasElement) {
    canvas.remove();
}

/// Snapshot the container's on-screen size and the display's pixel ratio.
pub fn measure_viewport(window: &web::Window, container: &web::HtmlElement) -> Viewport {
    Viewport::new(
        container.offset_width() as f64,
        container.offset_height() as f64,
        window.device_pixel_ratio(),
    )
}

/// Default config with any `data-*` overrides found on the container.
/// Bad overrides are logged and ignored.
pub fn read_config(container: &web::HtmlElement) -> FieldConfig {
    let count = container.get_attribute(ATTR_PARTICLE_COUNT);
    let speed = container.get_attribute(ATTR_ROTATION_SPEED);
    if count.is_none() && speed.is_none() {
        return FieldConfig::default();
    }
    match FieldConfig::default().with_overrides(count.as_deref(), speed.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[dom] ignoring container overrides: {e}");
            FieldConfig::default()
        }
    }
}
