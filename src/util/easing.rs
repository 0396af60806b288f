//! Easing curves applied to the local progress of a timeline segment.
//!
//! Every curve maps [0, 1] onto [0, 1] with `f(0) = 0` and `f(1) = 1`.
//! Inputs outside the unit interval are clamped first.

use serde::{Deserialize, Serialize};

/// Easing function variants for camera segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Quadratic ease-in-out, symmetric around t = 0.5.
    QuadraticInOut,
    /// Cubic ease-in-out, a stronger version of `QuadraticInOut`.
    CubicInOut,
    /// Square root ease-out (fast start, gradual slow).
    SqrtOut,
    /// Hermite smoothstep `3t² - 2t³`.
    SmoothStep,
    /// Cubic Bezier-style curve with configurable inner control values.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First inner control value.
        c1: f32,
        /// Second inner control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default segment easing: symmetric quadratic so the camera settles
    /// into each stage and leaves it gently.
    pub const DEFAULT: Self = Self::QuadraticInOut;

    /// Evaluate the easing function at `t`, clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::SqrtOut => t.sqrt(),
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }

    /// Whether the curve never decreases over [0, 1].
    ///
    /// The fixed curves always are. A `CubicHermite` curve is when its
    /// Bernstein coefficients `0, c1, c2, 1` are non-decreasing.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        match *self {
            Self::CubicHermite { c1, c2 } => {
                c1.is_finite()
                    && c2.is_finite()
                    && 0.0 <= c1
                    && c1 <= c2
                    && c2 <= 1.0
            }
            _ => true,
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 8] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticIn,
        EasingFunction::QuadraticOut,
        EasingFunction::QuadraticInOut,
        EasingFunction::CubicInOut,
        EasingFunction::SqrtOut,
        EasingFunction::SmoothStep,
        EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 },
    ];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.evaluate(0.0), 0.0, "{easing:?} at 0");
            assert!((easing.evaluate(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn input_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.evaluate(-0.5), easing.evaluate(0.0));
            assert_eq!(easing.evaluate(1.5), easing.evaluate(1.0));
        }
    }

    #[test]
    fn curves_never_decrease() {
        for easing in ALL {
            let mut prev = easing.evaluate(0.0);
            for i in 1..=200 {
                let v = easing.evaluate(i as f32 / 200.0);
                assert!(v + 1e-6 >= prev, "{easing:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn in_out_curves_are_symmetric_at_midpoint() {
        assert!((EasingFunction::QuadraticInOut.evaluate(0.5) - 0.5).abs() < 1e-6);
        assert!((EasingFunction::CubicInOut.evaluate(0.5) - 0.5).abs() < 1e-6);
        assert!((EasingFunction::SmoothStep.evaluate(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn quadratic_out_shape() {
        assert_eq!(EasingFunction::QuadraticOut.evaluate(0.5), 0.75);
        assert_eq!(EasingFunction::QuadraticIn.evaluate(0.5), 0.25);
    }

    #[test]
    fn hermite_monotonicity_check() {
        assert!(EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 }.is_monotonic());
        assert!(!EasingFunction::CubicHermite { c1: 0.5, c2: 1.4 }.is_monotonic());
        assert!(!EasingFunction::CubicHermite { c1: 0.8, c2: 0.2 }.is_monotonic());
        assert!(!EasingFunction::CubicHermite { c1: f32::NAN, c2: 1.0 }.is_monotonic());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_string(&EasingFunction::SmoothStep).unwrap();
        assert_eq!(json, r#"{"kind":"smooth_step"}"#);
        let parsed: EasingFunction =
            serde_json::from_str(r#"{"kind":"cubic_hermite","c1":0.2,"c2":0.9}"#)
                .unwrap();
        assert_eq!(parsed, EasingFunction::CubicHermite { c1: 0.2, c2: 0.9 });
    }
}
