//! Per-frame acceleration-direction solvers and the discrete strafe selector.
//!
//! The theta solvers are closed-form: each branch corresponds to a distinct
//! physical regime (no budget, cap already blown, partial absorption, full
//! absorption), and the branch boundaries are exact. The selector quantizes
//! the ideal angle onto the engine yaw grid, tries the two nearest
//! representable yaws on copies of the player, and commits whichever gains
//! more speed.

use core::f64::consts::PI;

use crate::constants::{AIR_SPEED_CAP, ANGLE_QUANTUM_RAD};
use crate::math;
use crate::types::{MoveButton, MovementVars, PlayerData, PositionType};

/// Speed the entity can gain from acceleration this frame, before capping.
/// Negative when the frame's acceleration variables decelerate.
#[inline]
fn frame_accel_gain(vars: &MovementVars, onground: bool, wishspeed: f64) -> f64 {
    let accel = if onground {
        vars.accelerate
    } else {
        vars.airaccelerate
    };
    f64::from(accel) * wishspeed * f64::from(vars.ent_friction) * f64::from(vars.frametime)
}

/// Air movement ignores the requested wishspeed above the fixed cap.
#[inline]
fn capped_wishspeed(onground: bool, wishspeed: f64) -> f64 {
    if onground {
        wishspeed
    } else {
        AIR_SPEED_CAP
    }
}

/// Angle between the current velocity and the acceleration direction that
/// maximizes the speed gained this frame. Result is in [0, pi].
pub fn max_accel_theta(
    player: &PlayerData,
    vars: &MovementVars,
    postype: PositionType,
    wishspeed: f64,
) -> f64 {
    assert!(
        postype != PositionType::Water,
        "water movement is not modeled"
    );

    let onground = postype.is_ground();
    let gain = frame_accel_gain(vars, onground, wishspeed);
    if gain <= 0.0 {
        // No acceleration available; the degenerate answer points backwards.
        return PI;
    }

    let margin = capped_wishspeed(onground, wishspeed) - gain;
    if margin <= 0.0 {
        // One frame's gain overshoots the cap; perpendicular gains the most.
        return PI / 2.0;
    }

    let speed = math::speed(player.velocity);
    if margin < speed {
        return (margin / speed).acos();
    }

    0.0
}

/// [`max_accel_theta`] as a signed yaw delta against a target look-yaw.
///
/// The velocity's own yaw is recomputed whenever the velocity is nonzero;
/// `vel_yaw` is only a fallback for a standstill. The straight-line thetas
/// (exactly 0 or pi) keep the full additive offset to the target yaw rather
/// than the signed-copy form; the reference behavior is asymmetric here.
pub fn max_accel_into_yaw_theta(
    player: &PlayerData,
    vars: &MovementVars,
    postype: PositionType,
    wishspeed: f64,
    vel_yaw: f64,
    yaw: f64,
) -> f64 {
    assert!(
        postype != PositionType::Water,
        "water movement is not modeled"
    );

    let vel_yaw = if math::is_zero(player.velocity) {
        vel_yaw
    } else {
        f64::from(player.velocity[1]).atan2(f64::from(player.velocity[0]))
    };

    let theta = max_accel_theta(player, vars, postype, wishspeed);
    if theta == 0.0 || theta == PI {
        return math::normalize_rad(yaw - vel_yaw + theta);
    }
    theta.copysign(math::normalize_rad(yaw - vel_yaw))
}

/// Largest angle away from the velocity direction at which this frame's
/// acceleration still does not lose speed. Result is in [0, pi].
///
/// The comparison order (budget magnitude against speed first, then cap
/// against speed) distinguishes the geometric sub-cases and must not be
/// reordered; boundary values change otherwise.
pub fn max_angle_theta(
    player: &PlayerData,
    vars: &MovementVars,
    postype: PositionType,
    wishspeed: f64,
) -> f64 {
    assert!(
        postype != PositionType::Water,
        "water movement is not modeled"
    );

    let onground = postype.is_ground();
    let speed = math::speed(player.velocity);
    let gain = frame_accel_gain(vars, onground, wishspeed);

    if gain <= 0.0 {
        let cap = capped_wishspeed(onground, wishspeed);
        let decel = -gain;
        if decel >= speed {
            if cap >= speed {
                0.0
            } else {
                // The safe angle is strictly below this value.
                (cap / speed).acos()
            }
        } else if cap >= speed {
            (decel / speed).acos()
        } else {
            // Strictly below this value when the cap is under the budget magnitude.
            (decel.min(cap) / speed).acos()
        }
    } else if gain >= speed {
        PI
    } else {
        (-gain / speed).acos()
    }
}

/// One friction-modified-Euler acceleration step toward the unit direction
/// `dir`, in place.
///
/// The velocity's projection onto `dir` is capped at the effective wishspeed
/// and the added speed is capped at the frame's acceleration budget. Already
/// at or past the cap along `dir` means no change; there is no deceleration
/// branch here.
pub fn accelerate(
    player: &mut PlayerData,
    vars: &MovementVars,
    postype: PositionType,
    wishspeed: f64,
    dir: [f64; 2],
) {
    assert!(
        postype != PositionType::Water,
        "water movement is not modeled"
    );

    let onground = postype.is_ground();
    let mut step = capped_wishspeed(onground, wishspeed) - math::dot_dir(player.velocity, dir);
    if step <= 0.0 {
        return;
    }

    let gain = frame_accel_gain(vars, onground, wishspeed);
    if gain <= step {
        step = gain;
    }

    player.velocity[0] = (f64::from(player.velocity[0]) + dir[0] * step) as f32;
    player.velocity[1] = (f64::from(player.velocity[1]) + dir[1] * step) as f32;
}

/// The two quantized yaw candidates bracketing an ideal strafing angle, each
/// with the velocity it would produce.
#[derive(Debug, Clone, Copy)]
pub struct StrafeCandidates {
    /// Candidate yaws in raw grid form, radians in [0, 2*pi).
    pub yaws: [f64; 2],
    /// Velocity after one acceleration step at the matching candidate yaw.
    pub velocities: [[f32; 2]; 2],
}

/// Evaluate the two representable yaws nearest `vel_yaw - phi + theta`.
///
/// The input system only expresses yaw in [`ANGLE_QUANTUM_RAD`] steps, so the
/// ideal yaw is snapped down onto the grid for the first candidate and the
/// second candidate is one step further along the ideal yaw's sign. In the
/// rare case where the ideal yaw is already exactly on the grid, the second
/// candidate instead steps 1.5 quanta so that rounding can neither fall short
/// of nor overshoot the next grid point, and `safeguard_yaw` backs the first
/// candidate off by half a quantum for callers sitting on a speed-change
/// boundary. Both candidates get an acceleration step on an independent copy
/// of the player; nothing in `player` itself is touched.
pub fn side_strafe_candidates(
    player: &PlayerData,
    vars: &MovementVars,
    postype: PositionType,
    wishspeed: f64,
    buttons: MoveButton,
    vel_yaw: f64,
    theta: f64,
    right: bool,
    safeguard_yaw: bool,
) -> StrafeCandidates {
    assert!(
        postype != PositionType::Water,
        "water movement is not modeled"
    );

    let phi = buttons.phi();
    let theta = if right { -theta } else { theta };

    let vel_yaw = if math::is_zero(player.velocity) {
        vel_yaw
    } else {
        f64::from(player.velocity[1]).atan2(f64::from(player.velocity[0]))
    };

    let yaw = vel_yaw - phi + theta;
    let mut yaws = [math::angle_mod_rad(yaw), 0.0];
    if yaws[0] == yaw {
        yaws[1] = math::angle_mod_rad(yaw + (ANGLE_QUANTUM_RAD * 1.5).copysign(yaw));
        if safeguard_yaw {
            yaws[0] = math::angle_mod_rad(yaw - (ANGLE_QUANTUM_RAD / 2.0).copysign(yaw));
        }
    } else {
        yaws[1] = math::angle_mod_rad(yaw + ANGLE_QUANTUM_RAD.copysign(yaw));
    }

    let mut velocities = [[0.0_f32; 2]; 2];
    for (candidate, out) in yaws.iter().zip(velocities.iter_mut()) {
        let dir = [(candidate + phi).cos(), (candidate + phi).sin()];
        let mut trial = *player;
        accelerate(&mut trial, vars, postype, wishspeed, dir);
        *out = trial.velocity;
    }

    StrafeCandidates { yaws, velocities }
}

/// Strafe one frame to one side at the speed-optimal angle.
///
/// Commits the faster of the two quantized candidates into `player` and
/// returns its yaw, normalized into (-pi, pi]. Ties go to the second
/// (further) candidate.
pub fn side_strafe_max_accel(
    player: &mut PlayerData,
    vars: &MovementVars,
    postype: PositionType,
    wishspeed: f64,
    buttons: MoveButton,
    vel_yaw: f64,
    right: bool,
) -> f64 {
    assert!(
        postype != PositionType::Water,
        "water movement is not modeled"
    );

    let theta = max_accel_theta(player, vars, postype, wishspeed);
    let candidates = side_strafe_candidates(
        player, vars, postype, wishspeed, buttons, vel_yaw, theta, right, false,
    );

    let speed_sq = [
        math::speed_sq(candidates.velocities[0]),
        math::speed_sq(candidates.velocities[1]),
    ];

    if speed_sq[0] > speed_sq[1] {
        player.velocity = candidates.velocities[0];
        math::normalize_rad(candidates.yaws[0])
    } else {
        player.velocity = candidates.velocities[1];
        math::normalize_rad(candidates.yaws[1])
    }
}

/// Strafe one frame to whichever side gains more speed.
///
/// Runs the one-sided selector left and right from the same starting
/// velocity and keeps the faster outcome, returning its yaw in (-pi, pi].
/// Ties go to the right-hand result.
pub fn best_strafe_max_accel(
    player: &mut PlayerData,
    vars: &MovementVars,
    postype: PositionType,
    wishspeed: f64,
    buttons: MoveButton,
    vel_yaw: f64,
) -> f64 {
    assert!(
        postype != PositionType::Water,
        "water movement is not modeled"
    );

    let orig = *player;
    let left_yaw = side_strafe_max_accel(player, vars, postype, wishspeed, buttons, vel_yaw, false);
    let left = *player;
    *player = orig;
    let right_yaw = side_strafe_max_accel(player, vars, postype, wishspeed, buttons, vel_yaw, true);

    if math::speed_sq(left.velocity) > math::speed_sq(player.velocity) {
        *player = left;
        left_yaw
    } else {
        right_yaw
    }
}
