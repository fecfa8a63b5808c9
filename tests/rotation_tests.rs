// Host-side tests for rotation accumulation and axis order.

use field_core::*;
use glam::DVec3;

#[test]
fn hundred_frames_accumulate_exactly() {
    let mut rot = RotationState::default();
    for _ in 0..100 {
        rot.advance(0.5 * BASE_SPEED_Y, BASE_SPEED_Y);
    }
    assert_eq!(rot.frames(), 100);
    assert_eq!(rot.angle_y(), 100.0 * BASE_SPEED_Y);
    assert_eq!(rot.angle_x(), 100.0 * (0.5 * BASE_SPEED_Y));
}

#[test]
fn angles_never_decrease() {
    let mut rot = RotationState::default();
    let (mut prev_x, mut prev_y) = (0.0, 0.0);
    for _ in 0..10_000 {
        rot.advance(0.0005, 0.001);
        assert!(rot.angle_x() >= prev_x && rot.angle_y() >= prev_y);
        prev_x = rot.angle_x();
        prev_y = rot.angle_y();
    }
}

#[test]
fn reset_returns_to_zero() {
    let mut rot = RotationState::default();
    rot.advance(0.1, 0.2);
    rot.reset();
    assert_eq!(rot, RotationState::default());
    assert_eq!(rot.angle_x(), 0.0);
    assert_eq!(rot.angle_y(), 0.0);
}

#[test]
fn zero_rotation_is_identity() {
    let rot = RotationState::default();
    for p in fibonacci_sphere(10) {
        assert_eq!(rot.apply(p.position()), p.position());
    }
}

#[test]
fn rotation_preserves_unit_norm() {
    for p in fibonacci_sphere(50) {
        let r = rotate_yx(p.position(), 1.3, -2.7);
        assert!((r.length() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn y_rotation_is_applied_before_x() {
    let (ax, ay) = (0.3_f64, 0.4_f64);
    let r = rotate_yx(DVec3::Y, ax, ay);
    // Y first leaves +Y alone, then X tilts it into the y/z plane.
    assert!(r.x.abs() < 1e-15);
    assert!((r.y - ax.cos()).abs() < 1e-15);
    assert!((r.z - ax.sin()).abs() < 1e-15);
    // X first would have swung it out along x.
    let x_first_x = -ax.sin() * ay.sin();
    assert!((r.x - x_first_x).abs() > 0.1);
}

#[test]
fn quarter_turn_about_y_moves_x_into_z() {
    let r = rotate_yx(DVec3::X, 0.0, std::f64::consts::FRAC_PI_2);
    assert!(r.x.abs() < 1e-12);
    assert!((r.z - 1.0).abs() < 1e-12);
}
