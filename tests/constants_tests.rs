// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its pure constants module is included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use field_core::constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_constants_are_within_reasonable_bounds() {
    assert!(DEFAULT_PARTICLE_COUNT >= 1 && DEFAULT_PARTICLE_COUNT <= MAX_PARTICLES);
    assert!(BASE_SPEED_Y > 0.0);
    assert!(TILT_RATIO > 0.0 && TILT_RATIO <= 1.0);
    assert!(PERSPECTIVE > 0.0);
    assert!(RADIUS_FACTOR > 0.0 && RADIUS_FACTOR <= 0.5); // sphere stays inside the viewport
    assert!(EDGE_DISTANCE_FACTOR > 0.0);
    assert!(EDGE_OPACITY_CUTOFF < EDGE_OPACITY_SCALE);
    assert!(POINT_RADIUS > 0.0 && EDGE_LINE_WIDTH > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn perspective_never_flips_points() {
    // z * radius stays above -PERSPECTIVE up to a 2160 px short side (4K at
    // dpr 1). Larger viewports lose back-pole points to `project_all`.
    let max_radius = 2160.0 * RADIUS_FACTOR;
    assert!(PERSPECTIVE - max_radius > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn web_constants_are_consistent() {
    assert!(!AUTO_MOUNT_ID.is_empty());
    assert!(ATTR_PARTICLE_COUNT.starts_with("data-"));
    assert!(ATTR_ROTATION_SPEED.starts_with("data-"));
    assert!(CANVAS_STYLE.contains("pointer-events:none"));
    assert!(STATS_LOG_EVERY_FRAMES > 0);
}
