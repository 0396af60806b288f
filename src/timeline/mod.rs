//! Scroll-synchronized camera choreography.
//!
//! A [`ScrollTimeline`] is an ordered list of [`TimelineSegment`]s that
//! cover scroll progress [0, 1] exactly once. Sampling it is a pure
//! function; applying the result to a live camera is the job of the
//! [`SceneComposer`](crate::composer::SceneComposer).

mod driver;
mod segment;
pub mod stages;

use std::fmt;

pub use driver::{ScrollTimeline, TimelineSample};
pub use segment::{CameraPose, TimelineSegment};
pub use stages::{Stage, StageKeyframe, DEFAULT_ORIGIN, DEFAULT_STAGES};

/// Ways an authored timeline can violate the segment invariants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineError {
    /// No segments at all.
    Empty,
    /// First segment does not begin at progress 0.
    StartNotZero {
        /// Actual start of the first segment.
        start: f32,
    },
    /// Last segment does not end at progress 1.
    EndNotOne {
        /// Actual end of the last segment.
        end: f32,
    },
    /// A segment's end is not after its start.
    EmptySpan {
        /// Offending segment.
        index: usize,
    },
    /// A segment leaves a gap or overlaps its predecessor.
    Discontiguous {
        /// Offending segment.
        index: usize,
        /// End of the previous segment.
        expected: f32,
        /// Start of the offending segment.
        found: f32,
    },
    /// A segment does not start at its predecessor's end pose.
    PoseDiscontinuity {
        /// Offending segment.
        index: usize,
    },
    /// A segment's easing curve can run backwards.
    NonMonotonicEasing {
        /// Offending segment.
        index: usize,
    },
    /// A progress bound or pose component is NaN or infinite.
    NonFinite {
        /// Offending segment.
        index: usize,
    },
}

impl fmt::Display for TimelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "timeline has no segments"),
            Self::StartNotZero { start } => {
                write!(f, "first segment starts at {start}, expected 0")
            }
            Self::EndNotOne { end } => {
                write!(f, "last segment ends at {end}, expected 1")
            }
            Self::EmptySpan { index } => {
                write!(f, "segment {index} has no width")
            }
            Self::Discontiguous {
                index,
                expected,
                found,
            } => write!(
                f,
                "segment {index} starts at {found} but previous ends at \
                 {expected}"
            ),
            Self::PoseDiscontinuity { index } => write!(
                f,
                "segment {index} does not start at the previous end pose"
            ),
            Self::NonMonotonicEasing { index } => {
                write!(f, "segment {index} easing is not monotonic")
            }
            Self::NonFinite { index } => {
                write!(f, "segment {index} has non-finite values")
            }
        }
    }
}

impl std::error::Error for TimelineError {}
