//! Viewport bookkeeping and perspective projection to screen space.

use crate::rotation::RotationState;
use crate::sphere::Particle;
use glam::{DVec2, DVec3};

/// Logical size of the drawing area plus the device pixel ratio used to size
/// its backing store.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    /// Build a viewport from measured values. Negative or non-finite sizes
    /// collapse to zero and a missing pixel ratio falls back to 1.
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        let sane = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        Self {
            width: sane(width),
            height: sane(height),
            pixel_ratio,
        }
    }

    /// A zero-area viewport (e.g. during initial layout) cannot be drawn into.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Backing-store size in physical pixels: logical size times pixel ratio.
    #[inline]
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio) as u32,
            (self.height * self.pixel_ratio) as u32,
        )
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Screen-space result of projecting one particle for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    /// Depth after rotation, in unit-sphere space.
    pub z: f64,
    pub scale: f64,
    /// Depth-derived opacity in `[0, 1]`, brighter towards +z.
    pub alpha: f64,
}

impl ProjectedPoint {
    #[inline]
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// False once a point sits at or behind the eye (`perspective + z * radius <= 0`).
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.scale.is_finite() && self.scale > 0.0
    }

    #[inline]
    pub fn distance_to(&self, other: &ProjectedPoint) -> f64 {
        self.position().distance(other.position())
    }
}

/// Per-frame projection parameters, snapshotted from the viewport.
///
/// `scale` diverges once `radius >= perspective`, i.e. a short side of about
/// 2286 logical pixels at the default factors; the back of the sphere then
/// passes through the eye. Such points are dropped by `project_all`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub center: DVec2,
    pub radius: f64,
    pub perspective: f64,
}

impl Projection {
    pub fn for_viewport(viewport: &Viewport, radius_factor: f64, perspective: f64) -> Self {
        Self {
            center: viewport.center(),
            radius: viewport.width.min(viewport.height) * radius_factor,
            perspective,
        }
    }

    /// Project an already-rotated unit-sphere point.
    #[inline]
    pub fn project(&self, p: DVec3) -> ProjectedPoint {
        let scale = self.perspective / (self.perspective + p.z * self.radius);
        ProjectedPoint {
            x: self.center.x + p.x * self.radius * scale,
            y: self.center.y + p.y * self.radius * scale,
            z: p.z,
            scale,
            alpha: ((p.z + 1.0) / 2.0).clamp(0.0, 1.0),
        }
    }

    /// Rotate and project every visible particle into `out`, reusing its
    /// allocation.
    pub fn project_all(
        &self,
        particles: &[Particle],
        rotation: &RotationState,
        out: &mut Vec<ProjectedPoint>,
    ) {
        out.clear();
        out.extend(
            particles
                .iter()
                .map(|p| self.project(rotation.apply(p.position())))
                .filter(ProjectedPoint::is_visible),
        );
    }
}
