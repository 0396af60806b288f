use glam::{Vec2, Vec3};

use crate::timeline::CameraPose;

/// Accumulated pointer orbit layered on top of the scroll-driven pose.
///
/// Rotation only: the distance to the look-at target is preserved and the
/// target never moves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitOffset {
    /// Rotation around the world Y axis through the target, in radians.
    pub azimuth: f32,
    /// Change of the polar angle (measured from +Y), in radians.
    pub polar: f32,
}

/// Allowed polar range for an orbited camera, in radians from +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarLimits {
    /// Smallest polar angle (highest camera).
    pub min: f32,
    /// Largest polar angle (lowest camera).
    pub max: f32,
}

impl OrbitOffset {
    /// Whether the offset leaves poses untouched.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.azimuth == 0.0 && self.polar == 0.0
    }

    /// Accumulate a pointer drag, in pixels, scaled by `speed` radians per
    /// pixel. Dragging right spins the camera left around the target, like
    /// grabbing the scene.
    ///
    /// The stored polar delta is clamped so that `base` stays inside
    /// `limits`; dragging past a limit does not build up slack that a
    /// reverse drag would first have to undo.
    pub fn drag(&mut self, delta: Vec2, speed: f32, base: CameraPose, limits: PolarLimits) {
        self.azimuth -= delta.x * speed;
        let polar = self.polar - delta.y * speed;
        self.polar = match spherical(base) {
            Some((_, base_polar, _)) => {
                (base_polar + polar).clamp(limits.min, limits.max) - base_polar
            }
            None => polar,
        };
    }

    /// Apply the offset to `pose`. The polar angle after rotation is clamped
    /// to `limits`, since the base pose moves with scroll after the drag.
    #[must_use]
    pub fn apply(&self, pose: CameraPose, limits: PolarLimits) -> CameraPose {
        if self.is_zero() {
            return pose;
        }
        let Some((radius, polar, azimuth)) = spherical(pose) else {
            return pose;
        };

        let polar = (polar + self.polar).clamp(limits.min, limits.max);
        let azimuth = azimuth + self.azimuth;

        let (sin_p, cos_p) = polar.sin_cos();
        let (sin_a, cos_a) = azimuth.sin_cos();
        let rotated = Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a) * radius;
        CameraPose::new(pose.look_at + rotated, pose.look_at)
    }
}

/// Radius, polar angle from +Y and azimuth of the eye around the target.
/// `None` when the eye sits on the target.
fn spherical(pose: CameraPose) -> Option<(f32, f32, f32)> {
    let offset = pose.position - pose.look_at;
    let radius = offset.length();
    if radius <= f32::EPSILON || !radius.is_finite() {
        return None;
    }
    let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
    Some((radius, polar, offset.x.atan2(offset.z)))
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    use super::*;

    const LIMITS: PolarLimits = PolarLimits {
        min: FRAC_PI_3,
        max: PI / 1.5,
    };

    fn pose() -> CameraPose {
        CameraPose::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO)
    }

    #[test]
    fn zero_offset_is_identity() {
        let base = CameraPose::new(Vec3::new(0.0, 9.0, 0.1), Vec3::ZERO);
        assert_eq!(OrbitOffset::default().apply(base, LIMITS), base);
    }

    #[test]
    fn azimuth_preserves_distance_and_target() {
        let orbit = OrbitOffset {
            azimuth: FRAC_PI_2,
            polar: 0.0,
        };
        let out = orbit.apply(pose(), LIMITS);
        assert_eq!(out.look_at, Vec3::ZERO);
        assert!((out.position.length() - 5.0).abs() < 1e-4);
        assert!(out.position.abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn polar_is_clamped() {
        let up = OrbitOffset {
            azimuth: 0.0,
            polar: -3.0,
        };
        let out = up.apply(pose(), LIMITS);
        let polar = (out.position.y / out.position.length()).acos();
        assert!((polar - LIMITS.min).abs() < 1e-4);

        let down = OrbitOffset {
            azimuth: 0.0,
            polar: 3.0,
        };
        let out = down.apply(pose(), LIMITS);
        let polar = (out.position.y / out.position.length()).acos();
        assert!((polar - LIMITS.max).abs() < 1e-4);
    }

    #[test]
    fn drag_accumulates() {
        let mut orbit = OrbitOffset::default();
        orbit.drag(Vec2::new(10.0, -4.0), 0.01, pose(), LIMITS);
        orbit.drag(Vec2::new(10.0, 0.0), 0.01, pose(), LIMITS);
        assert!((orbit.azimuth + 0.2).abs() < 1e-6);
        assert!((orbit.polar - 0.04).abs() < 1e-6);
    }

    #[test]
    fn reverse_drag_responds_right_after_hitting_limit() {
        let base = CameraPose::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let mut orbit = OrbitOffset::default();
        // Far past the upper limit.
        orbit.drag(Vec2::new(0.0, 400.0), 0.005, base, LIMITS);
        let at_limit = orbit.apply(base, LIMITS);
        assert!((orbit.polar - (LIMITS.min - FRAC_PI_2)).abs() < 1e-5);

        orbit.drag(Vec2::new(0.0, -100.0), 0.005, base, LIMITS);
        let reversed = orbit.apply(base, LIMITS);
        assert!(!reversed.position.abs_diff_eq(at_limit.position, 1e-3));
        assert!(reversed.position.y < at_limit.position.y);
    }

    #[test]
    fn degenerate_base_keeps_raw_polar() {
        let base = CameraPose::new(Vec3::ONE, Vec3::ONE);
        let mut orbit = OrbitOffset::default();
        orbit.drag(Vec2::new(0.0, 10.0), 0.1, base, LIMITS);
        assert!((orbit.polar + 1.0).abs() < 1e-6);
        assert_eq!(orbit.apply(base, LIMITS), base);
    }
}
