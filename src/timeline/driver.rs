//! Scroll-timeline driver: maps scroll progress to a camera pose and an
//! object rotation.

use std::f32::consts::TAU;

use super::segment::{CameraPose, TimelineSegment};
use super::stages::{Stage, DEFAULT_ORIGIN, DEFAULT_STAGES};
use super::TimelineError;
use crate::scroll::ScrollProgress;

/// Tolerance for pose continuity between adjacent segments.
const POSE_EPSILON: f32 = 1e-5;

/// Result of sampling the timeline at one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineSample {
    /// Progress the sample was taken at (already clamped).
    pub progress: ScrollProgress,
    /// Camera pose at this progress.
    pub pose: CameraPose,
    /// Y-axis rotation of the scene object, 0 at the top, 2π at the bottom.
    pub rotation: f32,
    /// Index of the active segment.
    pub segment: usize,
    /// Raw progress within the active segment.
    pub local_progress: f32,
}

/// Ordered, contiguous set of segments covering [0, 1] exactly once.
///
/// Immutable after construction; sampling is a pure function of the
/// progress value.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTimeline {
    segments: Vec<TimelineSegment>,
}

impl ScrollTimeline {
    /// Build a timeline from explicit segments, checking every invariant.
    pub fn new(segments: Vec<TimelineSegment>) -> Result<Self, TimelineError> {
        validate(&segments)?;
        Ok(Self { segments })
    }

    /// Build a timeline from an origin pose and a sequence of stages. Each
    /// stage starts where the previous one ended, so adjacent segments
    /// always share their boundary pose.
    pub fn from_stages<I>(origin: CameraPose, stages: I) -> Result<Self, TimelineError>
    where
        I: IntoIterator<Item = Stage>,
    {
        let mut segments = Vec::new();
        let mut start_progress = 0.0;
        let mut start_pose = origin;
        for stage in stages {
            segments.push(TimelineSegment {
                stage: stage.name,
                start_progress,
                end_progress: stage.end_progress,
                start_pose,
                end_pose: stage.pose,
                easing: stage.easing,
            });
            start_progress = stage.end_progress;
            start_pose = stage.pose;
        }
        Self::new(segments)
    }

    /// Segments in progress order.
    #[must_use]
    pub fn segments(&self) -> &[TimelineSegment] {
        &self.segments
    }

    /// Interior boundaries between segments.
    pub fn boundaries(&self) -> impl Iterator<Item = f32> + '_ {
        self.segments
            .iter()
            .take(self.segments.len().saturating_sub(1))
            .map(|s| s.end_progress)
    }

    /// Index of the segment owning `progress`. A value on a boundary
    /// belongs to the later segment; 1.0 belongs to the last one.
    #[must_use]
    pub fn segment_index(&self, progress: ScrollProgress) -> usize {
        let p = progress.get();
        let idx = self.segments.partition_point(|s| s.end_progress <= p);
        idx.min(self.segments.len() - 1)
    }

    /// Sample pose and rotation at `progress`.
    #[must_use]
    pub fn sample(&self, progress: ScrollProgress) -> TimelineSample {
        let segment = self.segment_index(progress);
        let active = &self.segments[segment];
        let local_progress = active.local_progress(progress.get());

        TimelineSample {
            progress,
            pose: active.pose_at(local_progress),
            rotation: TAU * progress.get(),
            segment,
            local_progress,
        }
    }

    /// Sample at a raw progress value, clamped into [0, 1].
    #[must_use]
    pub fn sample_at(&self, progress: f32) -> TimelineSample {
        self.sample(ScrollProgress::new(progress))
    }

    /// Pose at the top of the document.
    #[must_use]
    pub fn start_pose(&self) -> CameraPose {
        self.segments[0].start_pose
    }

    /// Pose at the bottom of the document.
    #[must_use]
    pub fn end_pose(&self) -> CameraPose {
        self.segments[self.segments.len() - 1].end_pose
    }
}

impl Default for ScrollTimeline {
    /// The four-stage choreography shipped with the site.
    fn default() -> Self {
        let segments = DEFAULT_STAGES
            .iter()
            .scan((0.0, DEFAULT_ORIGIN), |(start, pose), stage| {
                let segment = TimelineSegment {
                    stage: stage.name.to_owned(),
                    start_progress: *start,
                    end_progress: stage.end_progress,
                    start_pose: *pose,
                    end_pose: stage.pose,
                    easing: stage.easing,
                };
                *start = stage.end_progress;
                *pose = stage.pose;
                Some(segment)
            })
            .collect();
        Self { segments }
    }
}

fn validate(segments: &[TimelineSegment]) -> Result<(), TimelineError> {
    let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
        return Err(TimelineError::Empty);
    };
    if first.start_progress != 0.0 {
        return Err(TimelineError::StartNotZero {
            start: first.start_progress,
        });
    }
    if last.end_progress != 1.0 {
        return Err(TimelineError::EndNotOne {
            end: last.end_progress,
        });
    }

    for (index, seg) in segments.iter().enumerate() {
        if !seg.start_progress.is_finite()
            || !seg.end_progress.is_finite()
            || !seg.start_pose.is_finite()
            || !seg.end_pose.is_finite()
        {
            return Err(TimelineError::NonFinite { index });
        }
        if seg.end_progress <= seg.start_progress {
            return Err(TimelineError::EmptySpan { index });
        }
        if !seg.easing.is_monotonic() {
            return Err(TimelineError::NonMonotonicEasing { index });
        }
    }

    for (index, pair) in segments.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.start_progress != prev.end_progress {
            return Err(TimelineError::Discontiguous {
                index: index + 1,
                expected: prev.end_progress,
                found: next.start_progress,
            });
        }
        if !next.start_pose.abs_diff_eq(&prev.end_pose, POSE_EPSILON) {
            return Err(TimelineError::PoseDiscontinuity { index: index + 1 });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::util::easing::EasingFunction;

    fn linear_timeline() -> ScrollTimeline {
        let stages = DEFAULT_STAGES.iter().map(|s| Stage {
            easing: EasingFunction::Linear,
            ..s.to_stage()
        });
        ScrollTimeline::from_stages(DEFAULT_ORIGIN, stages).unwrap()
    }

    fn keyframes(timeline: &ScrollTimeline) -> Vec<CameraPose> {
        std::iter::once(timeline.start_pose())
            .chain(timeline.segments().iter().map(|s| s.end_pose))
            .collect()
    }

    #[test]
    fn default_timeline_is_valid() {
        let timeline = ScrollTimeline::default();
        assert_eq!(timeline.segments().len(), 4);
        assert!(validate(timeline.segments()).is_ok());
        let bounds: Vec<f32> = timeline.boundaries().collect();
        assert_eq!(bounds, vec![0.22, 0.44, 0.67]);
    }

    #[test]
    fn endpoints_match_authored_poses_exactly() {
        let timeline = ScrollTimeline::default();
        assert_eq!(timeline.sample_at(0.0).pose, DEFAULT_ORIGIN);
        assert_eq!(timeline.sample_at(1.0).pose, timeline.end_pose());
        assert_eq!(timeline.sample_at(1.0).segment, 3);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let timeline = ScrollTimeline::default();
        assert_eq!(timeline.sample_at(-0.3), timeline.sample_at(0.0));
        assert_eq!(timeline.sample_at(7.0), timeline.sample_at(1.0));
    }

    #[test]
    fn boundary_uses_later_segment_start() {
        let timeline = ScrollTimeline::default();
        for (i, b) in timeline.boundaries().enumerate() {
            let sample = timeline.sample_at(b);
            assert_eq!(sample.segment, i + 1);
            assert_eq!(sample.local_progress, 0.0);
            assert_eq!(sample.pose, timeline.segments()[i + 1].start_pose);
        }
    }

    #[test]
    fn continuous_across_boundaries() {
        let timeline = ScrollTimeline::default();
        for b in timeline.boundaries() {
            let before = timeline.sample_at(b - 1e-5).pose;
            let after = timeline.sample_at(b).pose;
            assert!(
                before.abs_diff_eq(&after, 1e-2),
                "jump at {b}: {before:?} vs {after:?}"
            );
        }
    }

    #[test]
    fn rotation_is_monotone_full_turn() {
        let timeline = ScrollTimeline::default();
        assert_eq!(timeline.sample_at(0.0).rotation, 0.0);
        assert!((timeline.sample_at(1.0).rotation - TAU).abs() < 1e-6);
        let mut prev = 0.0;
        for i in 0..=500 {
            let r = timeline.sample_at(i as f32 / 500.0).rotation;
            assert!(r >= prev);
            prev = r;
        }
    }

    #[test]
    fn linear_poses_stay_inside_keyframe_hull() {
        // The axis-aligned box around the keyframes contains their convex
        // hull, so leaving the box means overshoot.
        let timeline = linear_timeline();
        let points = keyframes(&timeline);
        let (lo, hi) = points.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), p| (lo.min(p.position), hi.max(p.position)),
        );
        for i in 0..=1000 {
            let pose = timeline.sample_at(i as f32 / 1000.0).pose;
            let p = pose.position;
            assert!(p.cmpge(lo - 1e-5).all() && p.cmple(hi + 1e-5).all());
        }
    }

    #[test]
    fn linear_poses_lie_on_segment_chords() {
        let timeline = linear_timeline();
        for seg in timeline.segments() {
            let mid = (seg.start_progress + seg.end_progress) / 2.0;
            let pose = timeline.sample_at(mid).pose;
            let expected = seg.start_pose.position.lerp(seg.end_pose.position, 0.5);
            assert!(pose.position.abs_diff_eq(expected, 1e-4));
        }
    }

    #[test]
    fn jump_to_end_needs_no_intermediate_samples() {
        let timeline = ScrollTimeline::default();
        let _ = timeline.sample_at(0.0);
        assert_eq!(timeline.sample(ScrollProgress::END).pose, timeline.end_pose());
    }

    fn seg(start: f32, end: f32, from: CameraPose, to: CameraPose) -> TimelineSegment {
        TimelineSegment {
            stage: String::new(),
            start_progress: start,
            end_progress: end,
            start_pose: from,
            end_pose: to,
            easing: EasingFunction::Linear,
        }
    }

    #[test]
    fn rejects_broken_coverage() {
        let a = CameraPose::new(Vec3::ZERO, Vec3::ZERO);
        let b = CameraPose::new(Vec3::X, Vec3::ZERO);

        assert_eq!(ScrollTimeline::new(vec![]), Err(TimelineError::Empty));
        assert_eq!(
            ScrollTimeline::new(vec![seg(0.1, 1.0, a, b)]),
            Err(TimelineError::StartNotZero { start: 0.1 })
        );
        assert_eq!(
            ScrollTimeline::new(vec![seg(0.0, 0.9, a, b)]),
            Err(TimelineError::EndNotOne { end: 0.9 })
        );
        assert_eq!(
            ScrollTimeline::new(vec![seg(0.0, 0.4, a, b), seg(0.5, 1.0, b, a)]),
            Err(TimelineError::Discontiguous {
                index: 1,
                expected: 0.4,
                found: 0.5
            })
        );
        assert_eq!(
            ScrollTimeline::new(vec![seg(0.0, 0.6, a, b), seg(0.6, 0.6, b, a), seg(0.6, 1.0, a, b)]),
            Err(TimelineError::EmptySpan { index: 1 })
        );
    }

    #[test]
    fn rejects_pose_jumps_and_bad_easing() {
        let a = CameraPose::new(Vec3::ZERO, Vec3::ZERO);
        let b = CameraPose::new(Vec3::X, Vec3::ZERO);
        assert_eq!(
            ScrollTimeline::new(vec![seg(0.0, 0.5, a, b), seg(0.5, 1.0, a, b)]),
            Err(TimelineError::PoseDiscontinuity { index: 1 })
        );

        let mut overshoot = seg(0.0, 1.0, a, b);
        overshoot.easing = EasingFunction::CubicHermite { c1: 0.5, c2: 1.6 };
        assert_eq!(
            ScrollTimeline::new(vec![overshoot]),
            Err(TimelineError::NonMonotonicEasing { index: 0 })
        );

        let nan = CameraPose::new(Vec3::splat(f32::NAN), Vec3::ZERO);
        assert_eq!(
            ScrollTimeline::new(vec![seg(0.0, 1.0, a, nan)]),
            Err(TimelineError::NonFinite { index: 0 })
        );
    }

    #[test]
    fn from_stages_chains_poses() {
        let timeline = linear_timeline();
        for pair in timeline.segments().windows(2) {
            assert_eq!(pair[0].end_pose, pair[1].start_pose);
            assert_eq!(pair[0].end_progress, pair[1].start_progress);
        }
    }
}
