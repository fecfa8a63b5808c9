// Default tuning for the hero particle field.

// Geometry
pub const DEFAULT_PARTICLE_COUNT: usize = 100;
pub const MAX_PARTICLES: usize = 1000; // all-pairs edge pass is O(N^2) per frame

// Motion (radians per frame, not per second)
pub const BASE_SPEED_Y: f64 = 0.001;
pub const TILT_RATIO: f64 = 0.5; // angle_x advances at half the spin rate

// Projection
pub const PERSPECTIVE: f64 = 800.0;
pub const RADIUS_FACTOR: f64 = 0.35; // sphere radius as a fraction of min(width, height)

// Edges
pub const EDGE_DISTANCE_FACTOR: f64 = 0.5; // max edge length as a fraction of radius
pub const EDGE_OPACITY_SCALE: f64 = 0.5;
pub const EDGE_OPACITY_CUTOFF: f64 = 0.05; // edges at or below this are not drawn
pub const EDGE_LINE_WIDTH: f64 = 0.5;

// Points
pub const POINT_RADIUS: f64 = 1.5;

// Palette
pub const BRAND_CYAN: [u8; 3] = [0, 240, 255];
pub const POINT_WHITE: [u8; 3] = [255, 255, 255];
