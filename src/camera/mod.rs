//! Camera state for the background scene.
//!
//! The composer owns a single [`core::Camera`]; its pose is replaced
//! wholesale each frame from the timeline, optionally rotated by a pointer
//! [`orbit::OrbitOffset`].

/// Core camera struct and GPU uniform types.
pub mod core;
/// Rotate-only pointer orbit around the look-at target.
pub mod orbit;

pub use self::core::{Camera, CameraUniform};
pub use orbit::{OrbitOffset, PolarLimits};
