use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::timeline::{
    CameraPose, ScrollTimeline, Stage, StageKeyframe, TimelineError,
    DEFAULT_ORIGIN, DEFAULT_STAGES,
};
use crate::util::easing::EasingFunction;

/// Serializable camera pose.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PoseOptions {
    /// Eye position.
    pub position: [f32; 3],
    /// Look-at target.
    pub look_at: [f32; 3],
}

impl From<CameraPose> for PoseOptions {
    fn from(pose: CameraPose) -> Self {
        Self {
            position: pose.position.to_array(),
            look_at: pose.look_at.to_array(),
        }
    }
}

impl From<PoseOptions> for CameraPose {
    fn from(pose: PoseOptions) -> Self {
        Self::new(Vec3::from_array(pose.position), Vec3::from_array(pose.look_at))
    }
}

/// One narrative stage of the scroll choreography.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StageOptions {
    /// Stage name, used in logs.
    pub name: String,
    /// Scroll progress at which the camera arrives at `pose`.
    pub end_progress: f32,
    /// Camera pose at the end of the stage.
    pub pose: PoseOptions,
    /// Easing of the approach.
    #[serde(default)]
    pub easing: EasingFunction,
}

impl From<&StageKeyframe> for StageOptions {
    fn from(key: &StageKeyframe) -> Self {
        Self {
            name: key.name.to_owned(),
            end_progress: key.end_progress,
            pose: key.pose.into(),
            easing: key.easing,
        }
    }
}

/// Camera choreography: a starting pose and the stages that follow it.
///
/// Stage boundaries are pacing constants. The defaults split the page at
/// 0.22, 0.44 and 0.67.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimelineOptions {
    /// Pose at the top of the page.
    pub origin: PoseOptions,
    /// Stages in scroll order; the last must end at 1.0.
    pub stages: Vec<StageOptions>,
}

impl TimelineOptions {
    /// Validate and build the timeline.
    pub fn build(&self) -> Result<ScrollTimeline, TimelineError> {
        let stages = self.stages.iter().map(|s| Stage {
            name: s.name.clone(),
            end_progress: s.end_progress,
            pose: s.pose.into(),
            easing: s.easing,
        });
        ScrollTimeline::from_stages(self.origin.into(), stages)
    }
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.into(),
            stages: DEFAULT_STAGES.iter().map(StageOptions::from).collect(),
        }
    }
}
