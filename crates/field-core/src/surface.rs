use crate::projection::Viewport;
use glam::DVec2;

/// 8-bit RGB color; alpha is supplied per draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self {
            r: c[0],
            g: c[1],
            b: c[2],
        }
    }
}

impl Rgb {
    /// CSS `rgba(...)` string as accepted by canvas fill/stroke styles.
    pub fn css_rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// A 2D drawing target that works in logical pixels.
///
/// Implemented over `CanvasRenderingContext2d` in the browser and by
/// recording doubles in tests.
pub trait Surface {
    /// Resize the backing store to `viewport.backing_size()` and map logical
    /// units onto it. Calling this twice with the same viewport must leave the
    /// same state (set an absolute transform, never compound a scale).
    fn configure(&mut self, viewport: &Viewport);
    fn clear(&mut self, width: f64, height: f64);
    fn set_line_width(&mut self, width: f64);
    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Rgb, alpha: f64);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb, alpha: f64);
}
