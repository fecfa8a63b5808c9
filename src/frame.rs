use crate::constants::STATS_LOG_EVERY_FRAMES;
use crate::dom;
use crate::scheduler::RafScheduler;
use crate::surface::CanvasSurface;
use field_core::ParticleField;
use instant::{Duration, Instant};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type CanvasField = ParticleField<CanvasSurface, RafScheduler>;
pub type SharedField = Rc<RefCell<CanvasField>>;

/// Wall-clock frame interval averaging, for logs only. Motion never reads it.
#[derive(Default)]
struct FrameStats {
    last: Option<Instant>,
    accum: Duration,
    frames: u32,
}

impl FrameStats {
    fn record(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last.replace(now) {
            self.accum += now - last;
            self.frames += 1;
        }
        if self.frames >= STATS_LOG_EVERY_FRAMES {
            let avg_ms = self.accum.as_secs_f64() * 1000.0 / self.frames as f64;
            log::debug!("[frame] avg interval {:.2}ms over {} frames", avg_ms, self.frames);
            self.accum = Duration::ZERO;
            self.frames = 0;
        }
    }
}

/// Install the per-frame JS callback into the field's scheduler.
///
/// The callback holds the field weakly; the field owns the callback through
/// its scheduler until `RafScheduler::release`. While the container measures
/// zero, each frame re-measures it before ticking.
fn install_frame_callback(
    field: &SharedField,
    window: &web::Window,
    container: &web::HtmlElement,
) {
    let slot = field.borrow().scheduler().callback_slot();
    let field_tick: Weak<RefCell<CanvasField>> = Rc::downgrade(field);
    let window_tick = window.clone();
    let container_tick = container.clone();
    let mut stats = FrameStats::default();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        stats.record();
        if let Some(field) = field_tick.upgrade() {
            field
                .borrow_mut()
                .tick_measured(|| dom::measure_viewport(&window_tick, &container_tick));
        }
    }) as Box<dyn FnMut()>));
}

/// Window `resize` listener that re-measures the container.
struct ResizeListener {
    window: web::Window,
    closure: Closure<dyn FnMut()>,
}

impl ResizeListener {
    fn attach(
        window: &web::Window,
        container: &web::HtmlElement,
        field: &SharedField,
    ) -> anyhow::Result<Self> {
        let window_resize = window.clone();
        let container_resize = container.clone();
        let field_resize = Rc::downgrade(field);
        let closure = Closure::wrap(Box::new(move || {
            let viewport = dom::measure_viewport(&window_resize, &container_resize);
            if let Some(field) = field_resize.upgrade() {
                field.borrow_mut().resize(viewport);
            }
        }) as Box<dyn FnMut()>);
        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
        window
            .add_event_listener_with_callback("resize", callback)
            .map_err(|e| anyhow::anyhow!("add resize listener: {:?}", e))?;
        Ok(Self {
            window: window.clone(),
            closure,
        })
    }

    fn detach(self) {
        let callback: &js_sys::Function = self.closure.as_ref().unchecked_ref();
        _ = self
            .window
            .remove_event_listener_with_callback("resize", callback);
    }
}

/// A running field attached to the page. Torn down on `teardown` or drop.
pub struct MountedField {
    field: SharedField,
    canvas: Option<web::HtmlCanvasElement>,
    resize: Option<ResizeListener>,
}

impl MountedField {
    pub fn is_running(&self) -> bool {
        self.field
            .try_borrow()
            .map(|f| f.is_running())
            .unwrap_or_else(|_| {
                log::warn!("[frame] running state queried while field is busy");
                false
            })
    }

    /// Stop the loop, cancel the pending frame, remove the resize listener and
    /// the canvas. Idempotent.
    pub fn teardown(&mut self) {
        match self.field.try_borrow_mut() {
            Ok(mut field) => {
                field.stop();
                field.scheduler_mut().release();
            }
            Err(_) => log::warn!("[frame] teardown while field is busy"),
        }
        if let Some(resize) = self.resize.take() {
            resize.detach();
        }
        if let Some(canvas) = self.canvas.take() {
            dom::remove_canvas(&canvas);
        }
    }
}

impl Drop for MountedField {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Attach a canvas to `container` and start animating it.
pub fn mount_into(container: &web::HtmlElement) -> anyhow::Result<MountedField> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let config = dom::read_config(container);
    let canvas = dom::create_canvas(&document, container)?;

    let field = CanvasSurface::acquire(canvas.clone())
        .and_then(|surface| ParticleField::new(config, surface, RafScheduler::new(window.clone())));
    let field: SharedField = match field {
        Ok(f) => Rc::new(RefCell::new(f)),
        Err(e) => {
            dom::remove_canvas(&canvas);
            return Err(e.into());
        }
    };
    install_frame_callback(&field, &window, container);

    // From here on, dropping `mounted` on error undoes everything.
    let mut mounted = MountedField {
        field: field.clone(),
        canvas: Some(canvas.clone()),
        resize: None,
    };
    field
        .borrow_mut()
        .resize(dom::measure_viewport(&window, container));
    mounted.resize = Some(ResizeListener::attach(&window, container, &field)?);
    let started = field.borrow_mut().start();
    started?;
    Ok(mounted)
}
