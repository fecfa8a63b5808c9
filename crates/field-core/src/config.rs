use crate::constants::*;
use crate::error::{FieldError, FieldResult};
use crate::surface::Rgb;

/// Tunables for one particle field instance.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub base_speed_y: f64,
    pub tilt_ratio: f64,
    pub perspective: f64,
    pub radius_factor: f64,
    pub edge_distance_factor: f64,
    pub edge_opacity_scale: f64,
    pub edge_opacity_cutoff: f64,
    pub edge_line_width: f64,
    pub point_radius: f64,
    pub edge_color: Rgb,
    pub point_color: Rgb,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            base_speed_y: BASE_SPEED_Y,
            tilt_ratio: TILT_RATIO,
            perspective: PERSPECTIVE,
            radius_factor: RADIUS_FACTOR,
            edge_distance_factor: EDGE_DISTANCE_FACTOR,
            edge_opacity_scale: EDGE_OPACITY_SCALE,
            edge_opacity_cutoff: EDGE_OPACITY_CUTOFF,
            edge_line_width: EDGE_LINE_WIDTH,
            point_radius: POINT_RADIUS,
            edge_color: Rgb::from(BRAND_CYAN),
            point_color: Rgb::from(POINT_WHITE),
        }
    }
}

impl FieldConfig {
    pub fn with_particle_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn with_base_speed(mut self, base_speed_y: f64) -> Self {
        self.base_speed_y = base_speed_y;
        self
    }

    /// Apply host-supplied string overrides (e.g. `data-*` attributes).
    ///
    /// Missing values keep the current setting; present values must parse and
    /// the resulting config must validate.
    pub fn with_overrides(
        self,
        particle_count: Option<&str>,
        base_speed_y: Option<&str>,
    ) -> FieldResult<Self> {
        let mut cfg = self;
        if let Some(raw) = particle_count {
            let n = raw.trim().parse::<usize>().map_err(|_| {
                FieldError::InvalidConfig(format!("particle count {raw:?} is not a number"))
            })?;
            cfg = cfg.with_particle_count(n);
        }
        if let Some(raw) = base_speed_y {
            let speed = raw.trim().parse::<f64>().map_err(|_| {
                FieldError::InvalidConfig(format!("rotation speed {raw:?} is not a number"))
            })?;
            cfg = cfg.with_base_speed(speed);
        }
        cfg.validate()?;
        Ok(cfg)
    }

    /// Per-frame tilt increment derived from the spin speed.
    #[inline]
    pub fn base_speed_x(&self) -> f64 {
        self.tilt_ratio * self.base_speed_y
    }

    #[allow(clippy::neg_cmp_op_on_partial_ord)] // NaN must fail these checks
    pub fn validate(&self) -> FieldResult<()> {
        if self.particle_count == 0 {
            return Err(FieldError::InvalidConfig(
                "particle_count must be at least 1".into(),
            ));
        }
        if self.particle_count > MAX_PARTICLES {
            return Err(FieldError::TooManyParticles {
                requested: self.particle_count,
                max: MAX_PARTICLES,
            });
        }
        let speeds = [self.base_speed_y, self.tilt_ratio];
        if speeds.iter().any(|s| !s.is_finite() || *s < 0.0) {
            return Err(FieldError::InvalidConfig(format!(
                "speeds must be finite and non-negative (base_speed_y={}, tilt_ratio={})",
                self.base_speed_y, self.tilt_ratio
            )));
        }
        if !(self.perspective > 0.0) || !(self.radius_factor > 0.0) {
            return Err(FieldError::InvalidConfig(format!(
                "perspective and radius_factor must be positive (got {}, {})",
                self.perspective, self.radius_factor
            )));
        }
        if !(self.edge_distance_factor >= 0.0) || !(self.point_radius >= 0.0) {
            return Err(FieldError::InvalidConfig(
                "edge_distance_factor and point_radius must be non-negative".into(),
            ));
        }
        Ok(())
    }
}
