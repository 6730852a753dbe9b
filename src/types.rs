//! Player state and per-frame movement configuration.
//!
//! Everything here is a cheap `Copy` value: the strafe selectors evaluate
//! candidates on independent copies of the player and commit the winner.

use core::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Mutable per-frame player state. Only the horizontal velocity matters for
/// the strafing math; the frame driver owns everything else about the entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    /// Horizontal velocity in units/second, at engine storage precision.
    pub velocity: [f32; 2],
}

/// Movement constants sampled by the frame driver for one frame. Values may
/// differ between frames (tick rate or surface changes); the solvers never
/// mutate them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementVars {
    /// Ground acceleration coefficient (sv_accelerate).
    pub accelerate: f32,
    /// Air acceleration coefficient (sv_airaccelerate).
    pub airaccelerate: f32,
    /// Per-entity friction multiplier.
    pub ent_friction: f32,
    /// Frame duration in seconds.
    pub frametime: f32,
}

/// Where the player is relative to the ground. Water movement is a separate
/// engine code path; passing `Water` into any solver is a caller bug and
/// trips a fatal assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionType {
    Ground,
    Air,
    Water,
}

impl PositionType {
    #[inline]
    pub fn is_ground(self) -> bool {
        matches!(self, PositionType::Ground)
    }
}

/// The eight movement-key combinations the input system can hold during a
/// strafing frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveButton {
    Forward,
    ForwardLeft,
    Left,
    BackLeft,
    Back,
    BackRight,
    Right,
    ForwardRight,
}

impl MoveButton {
    /// Reference angle between the look yaw and the acceleration direction
    /// this key combination produces: 45-degree steps, with `Back` a half
    /// turn. The enum is closed, so the mapping is total.
    pub fn phi(self) -> f64 {
        match self {
            MoveButton::Forward => 0.0,
            MoveButton::ForwardLeft => PI / 4.0,
            MoveButton::Left => PI / 2.0,
            MoveButton::BackLeft => 3.0 * PI / 4.0,
            MoveButton::Back => -PI,
            MoveButton::BackRight => -3.0 * PI / 4.0,
            MoveButton::Right => -PI / 2.0,
            MoveButton::ForwardRight => -PI / 4.0,
        }
    }
}
