//! Authored camera keyframes for the four narrative stages of the site.
//!
//! The stage boundaries are pacing choices, not derived values. They are
//! exposed through [`Options`](crate::options::Options) so a preset can
//! retime the scroll without touching code.

use glam::Vec3;

use super::segment::CameraPose;
use crate::util::easing::EasingFunction;

/// A stage as consumed by [`ScrollTimeline::from_stages`](super::ScrollTimeline::from_stages):
/// the camera travels from the previous stage's pose to `pose`, finishing
/// at `end_progress`.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    /// Stage name, used in logs.
    pub name: String,
    /// Progress at which the stage's pose is reached.
    pub end_progress: f32,
    /// Pose at the end of the stage.
    pub pose: CameraPose,
    /// Easing of the approach.
    pub easing: EasingFunction,
}

/// Compile-time form of [`Stage`].
#[derive(Debug, Clone, Copy)]
pub struct StageKeyframe {
    /// Stage name.
    pub name: &'static str,
    /// Progress at which the stage's pose is reached.
    pub end_progress: f32,
    /// Pose at the end of the stage.
    pub pose: CameraPose,
    /// Easing of the approach.
    pub easing: EasingFunction,
}

impl StageKeyframe {
    /// Owned copy for building a timeline.
    #[must_use]
    pub fn to_stage(&self) -> Stage {
        Stage {
            name: self.name.to_owned(),
            end_progress: self.end_progress,
            pose: self.pose,
            easing: self.easing,
        }
    }
}

/// Camera pose at the top of the page: slightly above the plant, looking
/// at it.
pub const DEFAULT_ORIGIN: CameraPose =
    CameraPose::new(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO);

/// Diagnosis, sourcing, market, strategy.
pub const DEFAULT_STAGES: [StageKeyframe; 4] = [
    StageKeyframe {
        name: "diagnosis",
        end_progress: 0.22,
        pose: CameraPose::new(Vec3::new(3.0, 1.5, 4.0), Vec3::new(0.0, 0.5, 0.0)),
        easing: EasingFunction::QuadraticInOut,
    },
    StageKeyframe {
        name: "sourcing",
        end_progress: 0.44,
        pose: CameraPose::new(Vec3::new(4.0, 0.5, -1.0), Vec3::ZERO),
        easing: EasingFunction::QuadraticInOut,
    },
    StageKeyframe {
        name: "market",
        end_progress: 0.67,
        pose: CameraPose::new(Vec3::new(-2.5, 3.0, -3.5), Vec3::new(0.0, 1.0, 0.0)),
        easing: EasingFunction::QuadraticInOut,
    },
    StageKeyframe {
        name: "strategy",
        end_progress: 1.0,
        pose: CameraPose::new(Vec3::new(0.0, 1.0, 6.0), Vec3::ZERO),
        easing: EasingFunction::SmoothStep,
    },
];
