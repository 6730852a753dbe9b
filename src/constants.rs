//! Engine-compatibility constants.
//!
//! These values come from the reference movement model and must match it
//! exactly; the solvers' branch boundaries depend on them.

use core::f64::consts::PI;

/// Air movement caps the usable wishspeed at 30 units/second no matter how
/// large the requested wishspeed is. Ground movement has no such cap.
pub const AIR_SPEED_CAP: f64 = 30.0;

/// One step of the engine's 16-bit yaw grid: 360/65536 degrees, in radians.
/// Every yaw the input system can actually express is a multiple of this.
pub const ANGLE_QUANTUM_RAD: f64 = PI / 32768.0;
