//! Fibonacci-sphere point distribution.
//!
//! Points are spread with the golden-angle increment so the cloud has no pole
//! clustering and is fully deterministic for a given count.

use glam::DVec3;
use std::f64::consts::PI;

/// A fixed point on the unit sphere. Created once per field, never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    position: DVec3,
}

impl Particle {
    #[inline]
    pub fn position(&self) -> DVec3 {
        self.position
    }
}

/// Point `i` of an `n`-point Fibonacci sphere.
#[inline]
pub fn fibonacci_point(i: usize, n: usize) -> DVec3 {
    let offset = i as f64 + 0.5;
    let phi = (1.0 - 2.0 * offset / n as f64).acos();
    let theta = PI * (1.0 + 5.0_f64.sqrt()) * offset;
    DVec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}

/// Generate `n` particles evenly spread over the unit sphere.
pub fn fibonacci_sphere(n: usize) -> Vec<Particle> {
    (0..n)
        .map(|i| Particle {
            position: fibonacci_point(i, n),
        })
        .collect()
}
