use glam::DVec3;

/// Accumulated spin (about Y) and tilt (about X) of the field.
///
/// Angles are derived from the number of frames advanced so that after `k`
/// frames `angle_y == k * speed_y` exactly; summing the delta every frame
/// would drift in the last bits.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    frames: u64,
    angle_x: f64,
    angle_y: f64,
}

impl RotationState {
    #[inline]
    pub fn angle_x(&self) -> f64 {
        self.angle_x
    }

    #[inline]
    pub fn angle_y(&self) -> f64 {
        self.angle_y
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance one frame by fixed per-frame deltas.
    pub fn advance(&mut self, speed_x: f64, speed_y: f64) {
        self.frames += 1;
        let k = self.frames as f64;
        self.angle_y = k * speed_y;
        self.angle_x = k * speed_x;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rotate about Y, then about X. The order is fixed; the two do not commute.
    #[inline]
    pub fn apply(&self, p: DVec3) -> DVec3 {
        rotate_yx(p, self.angle_x, self.angle_y)
    }
}

#[inline]
pub fn rotate_yx(p: DVec3, angle_x: f64, angle_y: f64) -> DVec3 {
    let (sin_y, cos_y) = angle_y.sin_cos();
    let x = p.x * cos_y - p.z * sin_y;
    let z = p.x * sin_y + p.z * cos_y;

    let (sin_x, cos_x) = angle_x.sin_cos();
    let y = p.y * cos_x - z * sin_x;
    let z = p.y * sin_x + z * cos_x;
    DVec3::new(x, y, z)
}
