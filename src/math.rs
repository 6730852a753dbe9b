//! Angle and 2D-velocity helpers.
//!
//! Velocity is stored at engine precision (`f32`) while all solver math runs
//! in `f64`; the helpers here do the promotion in one place. Angles are
//! radians throughout.

use core::f64::consts::PI;

use crate::constants::ANGLE_QUANTUM_RAD;

/// Wrap an angle into (-pi, pi].
#[inline]
pub fn normalize_rad(angle: f64) -> f64 {
    let wrapped = angle % (2.0 * PI);
    if wrapped > PI {
        wrapped - 2.0 * PI
    } else if wrapped <= -PI {
        wrapped + 2.0 * PI
    } else {
        wrapped
    }
}

/// Snap an angle onto the engine's 16-bit yaw grid.
///
/// Truncates toward zero to a grid index, then masks to 16 bits, so negative
/// angles land on the high end of the grid (a full turn minus the magnitude)
/// exactly like the engine's anglemod.
#[inline]
pub fn angle_mod_rad(angle: f64) -> f64 {
    ANGLE_QUANTUM_RAD * f64::from((angle / ANGLE_QUANTUM_RAD) as i32 & 0xffff)
}

/// Horizontal speed, computed in `f64`.
#[inline]
pub fn speed(velocity: [f32; 2]) -> f64 {
    let vx = f64::from(velocity[0]);
    let vy = f64::from(velocity[1]);
    (vx * vx + vy * vy).sqrt()
}

/// Squared horizontal speed at stored precision. The strafe selectors compare
/// candidates with this, so it must stay in `f32`.
#[inline]
pub fn speed_sq(velocity: [f32; 2]) -> f32 {
    velocity[0] * velocity[0] + velocity[1] * velocity[1]
}

/// Projection of the stored velocity onto a direction, in `f64`.
#[inline]
pub fn dot_dir(velocity: [f32; 2], dir: [f64; 2]) -> f64 {
    f64::from(velocity[0]) * dir[0] + f64::from(velocity[1]) * dir[1]
}

/// Exact-zero check; a velocity with any nonzero component has a usable yaw.
#[inline]
pub fn is_zero(velocity: [f32; 2]) -> bool {
    velocity[0] == 0.0 && velocity[1] == 0.0
}
