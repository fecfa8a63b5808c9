// Test doubles for the host-side field tests: a surface that records draw
// calls and a scheduler that hands out ids without ever firing them.

#![allow(dead_code)]
use field_core::*;
use glam::DVec2;

#[derive(Default)]
pub struct RecordingSurface {
    pub configured: usize,
    pub backing: (u32, u32),
    pub transform_scale: f64,
    pub clears: Vec<(f64, f64)>,
    pub line_width: f64,
    pub lines: Vec<(DVec2, DVec2, Rgb, f64)>,
    pub circles: Vec<(DVec2, f64, Rgb, f64)>,
}

impl RecordingSurface {
    pub fn reset_draws(&mut self) {
        self.clears.clear();
        self.lines.clear();
        self.circles.clear();
    }
}

impl Surface for RecordingSurface {
    fn configure(&mut self, viewport: &Viewport) {
        self.configured += 1;
        self.backing = viewport.backing_size();
        self.transform_scale = viewport.pixel_ratio;
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.clears.push((width, height));
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Rgb, alpha: f64) {
        self.lines.push((from, to, color, alpha));
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb, alpha: f64) {
        self.circles.push((center, radius, color, alpha));
    }
}

#[derive(Default)]
pub struct ManualScheduler {
    pub next_id: i32,
    pub requested: Vec<FrameHandle>,
    pub cancelled: Vec<FrameHandle>,
    pub unavailable: bool,
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FieldResult<FrameHandle> {
        if self.unavailable {
            return Err(FieldError::SchedulerUnavailable);
        }
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.requested.push(handle);
        Ok(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}

pub type TestField = ParticleField<RecordingSurface, ManualScheduler>;

pub fn make_field(config: FieldConfig) -> TestField {
    ParticleField::new(config, RecordingSurface::default(), ManualScheduler::default())
        .expect("valid config")
}
