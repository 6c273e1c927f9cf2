//! Pivot points: the authoring primitive for curves.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, TangentRole};
use crate::point::ControlPoint;
use crate::segment::Segment;

/// Minimum accepted tangent length; shorter vectors carry no direction.
const MIN_TANGENT_LENGTH: f32 = 1e-6;

/// Near-vertical cutoff for the |y| component of a unit-length tangent.
const MAX_UNIT_Y: f32 = 0.99;

/// Continuity behavior at a pivot point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PivotMode {
    /// Mirrored tangents; first-derivative continuity across the pivot.
    Smooth,
    /// Fixed flat tangents on both sides.
    Linear,
    /// Independent tangents; the curve stays connected but may corner.
    Split,
}

/// An authoring-level curve point: a position, a pair of tangent
/// vectors, and a continuity mode.
///
/// Tangents are offsets from the position to the Bezier handles:
///
/// ```text
/// o ------ (tangent_in) ------ O ------ (tangent_out) ------ o
/// ```
///
/// The incoming tangent must point left (`x < 0`), the outgoing
/// tangent must point right (`x > 0`), both must have measurable
/// length, and neither may be near-vertical. Every factory validates
/// both tangents; a pivot that exists is geometrically usable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PivotPoint {
    position: ControlPoint,
    tangent_in: Vec2,
    tangent_out: Vec2,
    mode: PivotMode,
}

impl PivotPoint {
    /// Create a smooth pivot: `tangent_in` is the exact mirror of
    /// `tangent_out`, so the curve's first derivative matches on both
    /// sides of the pivot.
    pub fn smooth(x: f32, y: f32, tangent_out: Vec2) -> Result<Self, CurveError> {
        Self::build(x, y, -tangent_out, tangent_out, PivotMode::Smooth)
    }

    /// Create a linear pivot with fixed flat tangents `(-1, 0)` and
    /// `(1, 0)`.
    ///
    /// The flat tangents ease the curve in and out of this pivot rather
    /// than drawing a geometric straight line: the neighboring segment
    /// shape still depends on the far endpoint's handle, so the name
    /// oversells the effect.
    #[must_use]
    pub fn linear(x: f32, y: f32) -> Self {
        Self {
            position: ControlPoint::new(x, y),
            tangent_in: Vec2::new(-1.0, 0.0),
            tangent_out: Vec2::new(1.0, 0.0),
            mode: PivotMode::Linear,
        }
    }

    /// Create a split pivot with independent tangents, allowing a
    /// visible corner (C0 continuity only).
    pub fn split(x: f32, y: f32, tangent_in: Vec2, tangent_out: Vec2) -> Result<Self, CurveError> {
        Self::build(x, y, tangent_in, tangent_out, PivotMode::Split)
    }

    fn build(
        x: f32,
        y: f32,
        tangent_in: Vec2,
        tangent_out: Vec2,
        mode: PivotMode,
    ) -> Result<Self, CurveError> {
        validate_tangent(tangent_in, TangentRole::In)?;
        validate_tangent(tangent_out, TangentRole::Out)?;
        Ok(Self {
            position: ControlPoint::new(x, y),
            tangent_in,
            tangent_out,
            mode,
        })
    }

    /// The pivot's position on the curve.
    #[must_use]
    pub fn position(&self) -> ControlPoint {
        self.position
    }

    /// The pivot's continuity mode.
    #[must_use]
    pub fn mode(&self) -> PivotMode {
        self.mode
    }

    /// Offset from the position to the incoming handle.
    #[must_use]
    pub fn tangent_in(&self) -> Vec2 {
        self.tangent_in
    }

    /// Offset from the position to the outgoing handle.
    #[must_use]
    pub fn tangent_out(&self) -> Vec2 {
        self.tangent_out
    }

    /// Handle position on the incoming side: `position + tangent_in`.
    #[must_use]
    pub fn tangent_in_point(&self) -> ControlPoint {
        ControlPoint::new(
            self.position.x + self.tangent_in.x,
            self.position.y + self.tangent_in.y,
        )
    }

    /// Handle position on the outgoing side: `position + tangent_out`.
    ///
    /// Linear-mode pivots refuse this access even though their default
    /// outgoing tangent is well defined; the restriction is established
    /// behavior and is kept as-is. One consequence: a linear pivot can
    /// only appear in the final position of a curve.
    pub fn tangent_out_point(&self) -> Result<ControlPoint, CurveError> {
        if self.mode == PivotMode::Linear {
            return Err(CurveError::LinearOutgoingHandle {
                x: self.position.x,
            });
        }
        Ok(ControlPoint::new(
            self.position.x + self.tangent_out.x,
            self.position.y + self.tangent_out.y,
        ))
    }

    /// Connect this pivot to the next one as a cubic Bezier segment:
    /// this position and outgoing handle become the segment's start
    /// anchor and first handle, the other pivot's incoming handle and
    /// position become the second handle and end anchor.
    pub fn link_to(&self, next: &PivotPoint) -> Result<Segment, CurveError> {
        Segment::new(
            self.position,
            self.tangent_out_point()?,
            next.tangent_in_point(),
            next.position,
        )
    }
}

fn validate_tangent(tangent: Vec2, role: TangentRole) -> Result<(), CurveError> {
    let invalid = |reason: &'static str| CurveError::InvalidTangent {
        role,
        x: tangent.x,
        y: tangent.y,
        reason,
    };

    let length = tangent.length();
    if length <= MIN_TANGENT_LENGTH {
        return Err(invalid("length is effectively zero"));
    }
    match role {
        TangentRole::In if tangent.x >= 0.0 => return Err(invalid("must point left (x < 0)")),
        TangentRole::Out if tangent.x <= 0.0 => return Err(invalid("must point right (x > 0)")),
        _ => {}
    }
    // Slope guard: a near-vertical handle makes the segment's local
    // parameter mapping degenerate.
    if (tangent.y / length).abs() >= MAX_UNIT_Y {
        return Err(invalid("too close to vertical"));
    }
    Ok(())
}
