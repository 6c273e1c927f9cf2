//! Stock curves for common animation shapes.
//!
//! Hosts typically install these into a registry as packaged defaults
//! and let user definition files override them by name.

use glam::Vec2;

use crate::curve::Curve;
use crate::error::CurveError;
use crate::fold::FoldMode;
use crate::pivot::PivotPoint;

/// S-shaped ease for one-shot fades: slow start, fast middle, slow
/// landing on the target value.
pub fn fade_in_smooth() -> Result<Curve, CurveError> {
    Curve::new(
        "fade_in_smooth",
        vec![
            PivotPoint::smooth(0.0, 0.0, Vec2::new(0.3, 0.1))?,
            PivotPoint::smooth(1.0, 1.0, Vec2::new(0.3, 0.1))?,
        ],
        FoldMode::Clamp,
    )
}

/// Repeating rise-and-fall for breathing or flicker effects; starts
/// and ends at zero so the loop seam is invisible.
pub fn pulse() -> Result<Curve, CurveError> {
    Curve::new(
        "pulse",
        vec![
            PivotPoint::smooth(0.0, 0.0, Vec2::new(0.33, 1.0))?,
            PivotPoint::smooth(1.0, 0.0, Vec2::new(0.33, -1.0))?,
        ],
        FoldMode::Repeat,
    )
}

/// Two-segment rise to a peak at the halfway point, then a fall back
/// to zero. The peak pivot splits its tangents so both flanks lean
/// outward.
pub fn mountain() -> Result<Curve, CurveError> {
    Curve::new(
        "mountain",
        vec![
            PivotPoint::smooth(0.0, 0.0, Vec2::new(0.2, 0.2))?,
            PivotPoint::split(0.5, 1.0, Vec2::new(-0.2, -0.1), Vec2::new(0.2, -0.1))?,
            PivotPoint::smooth(1.0, 0.0, Vec2::new(0.2, -0.2))?,
        ],
        FoldMode::Clamp,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn must<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
        match result {
            Ok(v) => v,
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }

    #[test]
    fn test_fade_in_smooth_spans_zero_to_one() {
        let curve = must(fade_in_smooth());
        assert_eq!(curve.evaluate(0.0), 0.0);
        assert_eq!(curve.evaluate(1.0), 1.0);
        assert_eq!(curve.fold_mode(), FoldMode::Clamp);
    }

    #[test]
    fn test_pulse_loops_seamlessly() {
        let curve = must(pulse());
        assert_eq!(curve.evaluate(0.0), 0.0);
        assert!((curve.evaluate(0.0) - curve.evaluate(1.0)).abs() < 1e-6);
        // The hump rises away from the seam.
        assert!(curve.evaluate(0.5) > 0.5);
    }

    #[test]
    fn test_mountain_peaks_at_center() {
        let curve = must(mountain());
        assert_eq!(curve.evaluate(0.0), 0.0);
        assert_eq!(curve.evaluate(0.5), 1.0);
        assert_eq!(curve.evaluate(1.0), 0.0);
        assert_eq!(curve.segment_count(), 2);
    }
}
