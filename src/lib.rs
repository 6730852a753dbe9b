//! Frame-accurate strafing optimization for goldsrc-style player movement.
//!
//! Given the player's current velocity, the engine's movement constants and
//! the ground/air state, the solvers in this crate compute the
//! acceleration-direction angle that maximizes speed gained over one frame
//! (or the largest angle that still gains speed), snap it onto the engine's
//! quantized yaw grid, and apply the resulting velocity change. The
//! frame-stepping driver that feeds inputs per frame lives outside this
//! crate.

pub mod constants;
pub mod math;
pub mod strafe;
pub mod types;

pub use strafe::{
    accelerate, best_strafe_max_accel, max_accel_into_yaw_theta, max_accel_theta, max_angle_theta,
    side_strafe_candidates, side_strafe_max_accel, StrafeCandidates,
};
pub use types::{MoveButton, MovementVars, PlayerData, PositionType};
