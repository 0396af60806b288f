use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

/// Virtual camera placement: eye position plus look-at target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Eye position in scene units.
    pub position: Vec3,
    /// Point the camera looks at.
    pub look_at: Vec3,
}

impl CameraPose {
    /// Create a pose from eye position and target.
    #[must_use]
    pub const fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// Interpolate toward `other`. `t <= 0` and `t >= 1` return the
    /// endpoints bit-for-bit.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        if t <= 0.0 {
            return *self;
        }
        if t >= 1.0 {
            return *other;
        }
        Self {
            position: self.position.lerp(other.position, t),
            look_at: self.look_at.lerp(other.look_at, t),
        }
    }

    /// Component-wise comparison within `max_abs_diff`.
    #[must_use]
    pub fn abs_diff_eq(&self, other: &Self, max_abs_diff: f32) -> bool {
        self.position.abs_diff_eq(other.position, max_abs_diff)
            && self.look_at.abs_diff_eq(other.look_at, max_abs_diff)
    }

    /// Whether every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.look_at.is_finite()
    }
}

/// One authored interval of the camera choreography.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSegment {
    /// Narrative stage this segment animates into.
    pub stage: String,
    /// Progress at which the segment begins (inclusive).
    pub start_progress: f32,
    /// Progress at which the segment ends (exclusive, except for the
    /// final segment).
    pub end_progress: f32,
    /// Pose at `start_progress`.
    pub start_pose: CameraPose,
    /// Pose at `end_progress`.
    pub end_pose: CameraPose,
    /// Curve applied to local progress within the segment.
    pub easing: EasingFunction,
}

impl TimelineSegment {
    /// Width of the segment in progress units.
    #[must_use]
    pub fn span(&self) -> f32 {
        self.end_progress - self.start_progress
    }

    /// Raw (un-eased) progress of `p` within this segment, clamped to
    /// [0, 1].
    #[must_use]
    pub fn local_progress(&self, p: f32) -> f32 {
        let span = self.span();
        if span <= 0.0 {
            return 1.0;
        }
        ((p - self.start_progress) / span).clamp(0.0, 1.0)
    }

    /// Pose at raw local progress `t`.
    #[must_use]
    pub fn pose_at(&self, t: f32) -> CameraPose {
        if t <= 0.0 {
            return self.start_pose;
        }
        if t >= 1.0 {
            return self.end_pose;
        }
        self.start_pose.lerp(&self.end_pose, self.easing.evaluate(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(easing: EasingFunction) -> TimelineSegment {
        TimelineSegment {
            stage: "test".into(),
            start_progress: 0.2,
            end_progress: 0.6,
            start_pose: CameraPose::new(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO),
            end_pose: CameraPose::new(Vec3::new(4.0, 0.0, 1.0), Vec3::Y),
            easing,
        }
    }

    #[test]
    fn local_progress_maps_span() {
        let seg = segment(EasingFunction::Linear);
        assert_eq!(seg.local_progress(0.2), 0.0);
        assert!((seg.local_progress(0.4) - 0.5).abs() < 1e-6);
        assert_eq!(seg.local_progress(0.6), 1.0);
        assert_eq!(seg.local_progress(0.9), 1.0);
    }

    #[test]
    fn pose_endpoints_are_exact() {
        let seg = segment(EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 });
        assert_eq!(seg.pose_at(0.0), seg.start_pose);
        assert_eq!(seg.pose_at(1.0), seg.end_pose);
    }

    #[test]
    fn linear_midpoint() {
        let seg = segment(EasingFunction::Linear);
        let mid = seg.pose_at(0.5);
        assert!(mid.position.abs_diff_eq(Vec3::new(2.0, 1.0, 3.0), 1e-6));
        assert!(mid.look_at.abs_diff_eq(Vec3::new(0.0, 0.5, 0.0), 1e-6));
    }

    #[test]
    fn easing_shapes_the_path() {
        let linear = segment(EasingFunction::Linear).pose_at(0.25);
        let eased = segment(EasingFunction::QuadraticIn).pose_at(0.25);
        // Quadratic-in lags behind linear early in the segment.
        assert!(eased.position.x < linear.position.x);
    }
}
