//! Normalized scroll position derived from host document metrics.

use serde::{Deserialize, Serialize};

/// Raw scroll measurements read from the host document.
///
/// All values are in CSS pixels. They are sampled on every scroll or
/// resize event and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset.
    pub offset: f64,
    /// Total document height.
    pub document_height: f64,
    /// Visible viewport height.
    pub viewport_height: f64,
    /// Visible viewport width, used for the camera aspect ratio.
    pub viewport_width: f64,
}

impl ScrollMetrics {
    /// Scrollable range in pixels. Zero when the document fits the
    /// viewport.
    #[must_use]
    pub fn scroll_range(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// Viewport aspect ratio, or `None` for a degenerate viewport.
    #[must_use]
    pub fn aspect(&self) -> Option<f32> {
        (self.viewport_width > 0.0 && self.viewport_height > 0.0)
            .then(|| (self.viewport_width / self.viewport_height) as f32)
    }

    /// Normalized progress for these metrics.
    #[must_use]
    pub fn progress(&self) -> ScrollProgress {
        let range = self.scroll_range();
        if range <= 0.0 || !range.is_finite() {
            return ScrollProgress::START;
        }
        ScrollProgress::new((self.offset / range) as f32)
    }
}

/// Normalized scroll position in [0, 1].
///
/// Construction clamps, so every value held by this type is inside the
/// unit interval. `NaN` collapses to 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ScrollProgress(f32);

impl ScrollProgress {
    /// Top of the document.
    pub const START: Self = Self(0.0);
    /// Bottom of the document.
    pub const END: Self = Self(1.0);

    /// Clamp `value` into [0, 1].
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// The normalized value.
    #[must_use]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl From<f32> for ScrollProgress {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(offset: f64, document_height: f64) -> ScrollMetrics {
        ScrollMetrics {
            offset,
            document_height,
            viewport_height: 800.0,
            viewport_width: 1280.0,
        }
    }

    #[test]
    fn progress_is_offset_over_range() {
        let p = metrics(600.0, 2000.0).progress();
        assert!((p.get() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn no_scrollable_range_is_zero() {
        assert_eq!(metrics(0.0, 800.0).progress(), ScrollProgress::START);
        assert_eq!(metrics(40.0, 600.0).progress(), ScrollProgress::START);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(metrics(-50.0, 2000.0).progress(), ScrollProgress::START);
        assert_eq!(metrics(5000.0, 2000.0).progress(), ScrollProgress::END);
    }

    #[test]
    fn non_finite_values_collapse_to_start() {
        assert_eq!(ScrollProgress::new(f32::NAN), ScrollProgress::START);
        assert_eq!(ScrollProgress::new(f32::INFINITY), ScrollProgress::END);
        assert_eq!(ScrollProgress::new(f32::NEG_INFINITY), ScrollProgress::START);
    }

    #[test]
    fn aspect_requires_positive_viewport() {
        assert!((metrics(0.0, 2000.0).aspect().unwrap() - 1.6).abs() < 1e-6);
        assert_eq!(ScrollMetrics::default().aspect(), None);
    }
}
