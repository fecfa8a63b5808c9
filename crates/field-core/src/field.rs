//! The particle field renderer: owns the point set, rotation state, viewport
//! and the drawing surface, and runs one frame per scheduler callback.

use crate::config::FieldConfig;
use crate::edges::for_each_edge;
use crate::error::FieldResult;
use crate::projection::{ProjectedPoint, Projection, Viewport};
use crate::rotation::RotationState;
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::sphere::{fibonacci_sphere, Particle};
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Stopped,
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Drawn { points: usize, edges: usize },
    /// Viewport had no area; nothing drawn, rotation untouched, retried next frame.
    Deferred,
    /// The field is not running; nothing drawn or scheduled.
    Stopped,
}

pub struct ParticleField<S, F> {
    config: FieldConfig,
    particles: Vec<Particle>,
    rotation: RotationState,
    viewport: Viewport,
    surface: S,
    scheduler: F,
    pending: Option<FrameHandle>,
    phase: Phase,
    projected: Vec<ProjectedPoint>,
}

impl<S: Surface, F: FrameScheduler> ParticleField<S, F> {
    pub fn new(config: FieldConfig, surface: S, scheduler: F) -> FieldResult<Self> {
        config.validate()?;
        let particles = fibonacci_sphere(config.particle_count);
        let projected = Vec::with_capacity(particles.len());
        Ok(Self {
            config,
            particles,
            rotation: RotationState::default(),
            viewport: Viewport::default(),
            surface,
            scheduler,
            pending: None,
            phase: Phase::Idle,
            projected,
        })
    }

    /// Reset rotation and schedule the first frame. No-op while running.
    pub fn start(&mut self) -> FieldResult<()> {
        if self.phase == Phase::Running {
            return Ok(());
        }
        self.rotation.reset();
        self.pending = Some(self.scheduler.request_frame()?);
        self.phase = Phase::Running;
        log::info!(
            "[field] started particles={} viewport={:.0}x{:.0}@{}",
            self.particles.len(),
            self.viewport.width,
            self.viewport.height,
            self.viewport.pixel_ratio
        );
        Ok(())
    }

    /// Cancel any pending frame and stop. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.phase == Phase::Running {
            log::info!("[field] stopped after {} frames", self.rotation.frames());
        }
        self.phase = Phase::Stopped;
    }

    /// Scheduler callback: render one frame and request the next.
    pub fn tick(&mut self) -> FrameOutcome {
        if self.phase != Phase::Running {
            return FrameOutcome::Stopped;
        }
        // the handle that fired this tick is spent
        self.pending = None;
        let outcome = self.render_frame();
        match self.scheduler.request_frame() {
            Ok(handle) => self.pending = Some(handle),
            Err(e) => {
                log::warn!("[field] cannot schedule next frame: {e}");
                self.phase = Phase::Stopped;
            }
        }
        outcome
    }

    /// Like `tick`, but while the stored viewport has no area, take a fresh
    /// measurement first so a container sized after mount starts drawing on
    /// the next frame instead of waiting for a window resize.
    pub fn tick_measured(&mut self, measure: impl FnOnce() -> Viewport) -> FrameOutcome {
        if self.phase == Phase::Running && !self.viewport.is_drawable() {
            let viewport = measure();
            if viewport != self.viewport {
                self.resize(viewport);
            }
        }
        self.tick()
    }

    /// Apply a freshly measured viewport to the field and its surface.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.surface.configure(&viewport);
        log::debug!(
            "[field] resize {:.0}x{:.0} dpr={} backing={:?}",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio,
            viewport.backing_size()
        );
    }

    /// Draw one frame regardless of phase.
    pub fn render_frame(&mut self) -> FrameOutcome {
        let viewport = self.viewport;
        if !viewport.is_drawable() {
            log::trace!("[field] zero-size viewport, deferring frame");
            return FrameOutcome::Deferred;
        }

        self.surface.clear(viewport.width, viewport.height);
        self.rotation
            .advance(self.config.base_speed_x(), self.config.base_speed_y);

        let projection =
            Projection::for_viewport(&viewport, self.config.radius_factor, self.config.perspective);
        projection.project_all(&self.particles, &self.rotation, &mut self.projected);

        let cfg = &self.config;
        let points = &self.projected;
        let surface = &mut self.surface;
        let max_dist = projection.radius * cfg.edge_distance_factor;

        let mut edges = 0usize;
        surface.set_line_width(cfg.edge_line_width);
        for_each_edge(
            points,
            max_dist,
            cfg.edge_opacity_scale,
            cfg.edge_opacity_cutoff,
            |e| {
                surface.stroke_line(
                    points[e.from].position(),
                    points[e.to].position(),
                    cfg.edge_color,
                    e.opacity,
                );
                edges += 1;
            },
        );

        for p in points {
            surface.fill_circle(
                p.position(),
                cfg.point_radius * p.scale,
                cfg.point_color,
                p.alpha,
            );
        }

        FrameOutcome::Drawn {
            points: points.len(),
            edges,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Points from the most recent drawn frame.
    pub fn projected(&self) -> &[ProjectedPoint] {
        &self.projected
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }
}
