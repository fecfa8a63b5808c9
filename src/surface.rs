use field_core::{FieldError, FieldResult, Rgb, Surface, Viewport};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `Surface` over a canvas' 2D rendering context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Fails with `SurfaceUnavailable` when the canvas cannot hand out a 2D
    /// context (detached, already bound to another context type, ...).
    pub fn acquire(canvas: web::HtmlCanvasElement) -> FieldResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or(FieldError::SurfaceUnavailable)?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn configure(&mut self, viewport: &Viewport) {
        let (w_px, h_px) = viewport.backing_size();
        self.canvas.set_width(w_px);
        self.canvas.set_height(h_px);
        // absolute transform so repeated resizes never compound the scale
        let dpr = viewport.pixel_ratio;
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Rgb, alpha: f64) {
        #[allow(deprecated)]
        self.ctx
            .set_stroke_style(&JsValue::from_str(&color.css_rgba(alpha)));
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb, alpha: f64) {
        #[allow(deprecated)]
        self.ctx
            .set_fill_style(&JsValue::from_str(&color.css_rgba(alpha)));
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }
}
