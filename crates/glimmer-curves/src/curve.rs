//! Named, immutable, piecewise cubic Bezier curves.

use crate::error::CurveError;
use crate::fold::FoldMode;
use crate::pivot::PivotPoint;
use crate::segment::Segment;

/// Largest accepted x gap between adjacent segments.
const CONTIGUITY_TOLERANCE: f32 = 1e-4;

/// An ordered, validated chain of Bezier segments with a fold mode.
///
/// Built from an ordered pivot list: every adjacent pair contributes
/// one segment, so `n` pivots yield `n - 1` segments. Construction is
/// the only point where geometry is checked; a constructed curve is
/// sound, immutable, and freely shareable across threads. The pivot
/// list is retained so the curve can be re-serialized losslessly.
///
/// # Example
///
/// ```
/// use glam::Vec2;
/// use glimmer_curves::{Curve, FoldMode, PivotPoint};
///
/// let pulse = Curve::new(
///     "pulse",
///     vec![
///         PivotPoint::smooth(0.0, 0.0, Vec2::new(0.33, 1.0))?,
///         PivotPoint::smooth(1.0, 0.0, Vec2::new(0.33, -1.0))?,
///     ],
///     FoldMode::Repeat,
/// )?;
///
/// // Repeat folding makes the curve periodic.
/// assert!((pulse.evaluate(0.25) - pulse.evaluate(2.25)).abs() < 1e-4);
/// # Ok::<(), glimmer_curves::CurveError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    name: String,
    pivots: Vec<PivotPoint>,
    segments: Vec<Segment>,
    fold: FoldMode,
}

impl Curve {
    /// Build a curve from at least two pivot points ordered by x.
    ///
    /// Fails when fewer than two pivots are given, when any adjacent
    /// pair cannot form a segment (non-increasing x, linear pivot in a
    /// non-final position, invalid tangents), or when the resulting
    /// segment chain has a gap on the x axis.
    pub fn new(
        name: impl Into<String>,
        pivots: Vec<PivotPoint>,
        fold: FoldMode,
    ) -> Result<Self, CurveError> {
        let name = name.into();
        if pivots.len() < 2 {
            return Err(CurveError::TooFewPivots {
                name,
                count: pivots.len(),
            });
        }

        let mut segments = Vec::with_capacity(pivots.len() - 1);
        for pair in pivots.windows(2) {
            if let [current, next] = pair {
                segments.push(current.link_to(next)?);
            }
        }
        validate_contiguity(&segments)?;

        Ok(Self {
            name,
            pivots,
            segments,
            fold,
        })
    }

    /// Map a progress value through the curve.
    ///
    /// The input is folded into `[0,1]` first; the first segment whose
    /// x range contains the folded value evaluates it. Inputs that slip
    /// past every segment through float rounding at the extreme
    /// boundaries take the nearest anchor's y value.
    #[must_use]
    pub fn evaluate(&self, x: f32) -> f32 {
        let folded = self.fold.apply(x);
        for segment in &self.segments {
            if segment.contains_x(folded) {
                if let Ok(y) = segment.evaluate(folded) {
                    return y;
                }
            }
        }
        self.boundary_value(folded)
    }

    // Rounding fallback: pin to the nearest end of the curve.
    fn boundary_value(&self, folded: f32) -> f32 {
        if let (Some(first), Some(last)) = (self.segments.first(), self.segments.last()) {
            if folded <= first.x_start() {
                first.anchor_start().y
            } else {
                last.anchor_end().y
            }
        } else {
            folded
        }
    }

    /// The curve's registry name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pivot points the curve was built from.
    #[must_use]
    pub fn pivot_points(&self) -> &[PivotPoint] {
        &self.pivots
    }

    /// The derived segment chain.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments (always `pivot count - 1`).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The curve's boundary handling mode.
    #[must_use]
    pub fn fold_mode(&self) -> FoldMode {
        self.fold
    }
}

fn validate_contiguity(segments: &[Segment]) -> Result<(), CurveError> {
    for (index, pair) in segments.windows(2).enumerate() {
        if let [current, next] = pair {
            if (current.x_end() - next.x_start()).abs() > CONTIGUITY_TOLERANCE {
                return Err(CurveError::DiscontinuousSegments {
                    index,
                    next: index + 1,
                    x_end: current.x_end(),
                    next_x_start: next.x_start(),
                });
            }
        }
    }
    Ok(())
}
