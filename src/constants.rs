/// Embedding and diagnostics constants for the browser front end.
///
/// Field geometry and motion live in `field_core::constants`; these only
/// cover how the field is attached to the page.
// Element that is auto-mounted on start, if present
pub const AUTO_MOUNT_ID: &str = "hero-field";

// Container attributes that override the default config
pub const ATTR_PARTICLE_COUNT: &str = "data-particle-count";
pub const ATTR_ROTATION_SPEED: &str = "data-rotation-speed";

// Decorative overlay: fills the container, never takes pointer input
pub const CANVAS_STYLE: &str = "position:absolute;inset:0;width:100%;height:100%;\
pointer-events:none;mix-blend-mode:screen;opacity:0.5;z-index:0";

// Frame interval diagnostics
pub const STATS_LOG_EVERY_FRAMES: u32 = 600; // ~10 s at 60 Hz
