//! A single cubic Bezier piece between two adjacent pivot points.

use crate::error::CurveError;
use crate::point::ControlPoint;

/// One cubic Bezier span covering a contiguous x sub-range of a curve.
///
/// For the local parameter `t` in `[0,1]`:
///
/// ```text
/// B(t) = (1-t)^3 P0 + 3(1-t)^2 t P1 + 3(1-t) t^2 P2 + t^3 P3
/// ```
///
/// where `P0`/`P3` are the anchors the curve passes through exactly and
/// `P1`/`P2` are the handles. Anchors define the x range; only the
/// y values of the handles shape the output, their x coordinates never
/// enter the evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    anchor_start: ControlPoint,
    handle_out: ControlPoint,
    handle_in: ControlPoint,
    anchor_end: ControlPoint,
    x_start: f32,
    x_end: f32,
}

impl Segment {
    /// Build a segment; fails unless the anchors advance strictly
    /// along x.
    pub fn new(
        anchor_start: ControlPoint,
        handle_out: ControlPoint,
        handle_in: ControlPoint,
        anchor_end: ControlPoint,
    ) -> Result<Self, CurveError> {
        let x_start = anchor_start.x;
        let x_end = anchor_end.x;
        if x_end <= x_start {
            return Err(CurveError::EmptySegmentSpan { x_start, x_end });
        }
        Ok(Self {
            anchor_start,
            handle_out,
            handle_in,
            anchor_end,
            x_start,
            x_end,
        })
    }

    /// Whether `x` falls inside the segment's x range, boundaries
    /// included.
    #[must_use]
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.x_start && x <= self.x_end
    }

    /// Evaluate the segment at a global `x` inside its range.
    ///
    /// The global x is mapped to the local parameter
    /// `t = (x - x_start) / (x_end - x_start)` and run through the
    /// Bernstein-weighted sum over the four y values. At `t = 0` the
    /// result is exactly the start anchor's y, at `t = 1` exactly the
    /// end anchor's y.
    pub fn evaluate(&self, x: f32) -> Result<f32, CurveError> {
        if !self.contains_x(x) {
            return Err(CurveError::OutOfSegmentRange {
                x,
                x_start: self.x_start,
                x_end: self.x_end,
            });
        }
        let t = (x - self.x_start) / (self.x_end - self.x_start);
        Ok(self.bezier_y(t))
    }

    // Bernstein weights: (1-t)^3, 3(1-t)^2 t, 3(1-t) t^2, t^3.
    fn bezier_y(&self, t: f32) -> f32 {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        b0 * self.anchor_start.y
            + b1 * self.handle_out.y
            + b2 * self.handle_in.y
            + b3 * self.anchor_end.y
    }

    /// Start anchor, the point the curve leaves.
    #[must_use]
    pub fn anchor_start(&self) -> ControlPoint {
        self.anchor_start
    }

    /// Handle controlling the departure from the start anchor.
    #[must_use]
    pub fn handle_out(&self) -> ControlPoint {
        self.handle_out
    }

    /// Handle controlling the approach into the end anchor.
    #[must_use]
    pub fn handle_in(&self) -> ControlPoint {
        self.handle_in
    }

    /// End anchor, the point the curve arrives at.
    #[must_use]
    pub fn anchor_end(&self) -> ControlPoint {
        self.anchor_end
    }

    /// Start of the segment's x range.
    #[must_use]
    pub fn x_start(&self) -> f32 {
        self.x_start
    }

    /// End of the segment's x range.
    #[must_use]
    pub fn x_end(&self) -> f32 {
        self.x_end
    }

    /// X-axis span covered by the segment.
    #[must_use]
    pub fn span(&self) -> f32 {
        self.x_end - self.x_start
    }
}
