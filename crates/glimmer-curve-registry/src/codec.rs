//! JSON codec for curve definitions.
//!
//! The wire format is hand-editable and its field names are
//! load-bearing; user definition files rely on them:
//!
//! ```json
//! {
//!   "curve_name": "fade_in_smooth",
//!   "pivot_points": [
//!     { "point_mode": "SMOOTH", "x": 0.0, "y": 0.0,
//!       "tangent_out": { "x": 0.3, "y": 0.1 } },
//!     { "point_mode": "SMOOTH", "x": 1.0, "y": 1.0,
//!       "tangent_out": { "x": 0.3, "y": 0.1 } }
//!   ],
//!   "clamp_mode": "CLAMP"
//! }
//! ```
//!
//! `clamp_mode` is optional and defaults to `CLAMP`. Which tangent
//! fields a pivot record needs depends on its `point_mode`; see
//! [`decode_curve`].

use glam::Vec2;
use glimmer_curves::{Curve, FoldMode, PivotMode, PivotPoint};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::RegistryError;
use crate::Result;

/// Serialized tangent vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TangentRecord {
    /// X component of the offset.
    pub x: f32,
    /// Y component of the offset.
    pub y: f32,
}

impl From<Vec2> for TangentRecord {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<TangentRecord> for Vec2 {
    fn from(record: TangentRecord) -> Self {
        Vec2::new(record.x, record.y)
    }
}

/// Serialized pivot point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PivotRecord {
    /// Continuity mode: `SMOOTH`, `LINEAR`, or `SPLIT`.
    pub point_mode: PivotMode,
    /// X position of the pivot.
    pub x: f32,
    /// Y position of the pivot.
    pub y: f32,
    /// Incoming tangent offset, when the mode calls for one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tangent_in: Option<TangentRecord>,
    /// Outgoing tangent offset, when the mode calls for one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tangent_out: Option<TangentRecord>,
}

/// Serialized curve definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveRecord {
    /// The registry name of the curve.
    pub curve_name: String,
    /// Ordered pivot records.
    pub pivot_points: Vec<PivotRecord>,
    /// Boundary handling mode; absent means `CLAMP`.
    #[serde(default)]
    pub clamp_mode: FoldMode,
}

/// Parse definition text into a validated curve.
pub fn decode_curve(text: &str) -> Result<Curve> {
    let record: CurveRecord = serde_json::from_str(text)?;
    curve_from_record(&record)
}

/// Serialize a curve to pretty-printed definition text.
///
/// Every pivot is emitted with both tangent vectors verbatim, so the
/// output round-trips for `LINEAR` and `SPLIT` pivots; for `SMOOTH`
/// pivots the stored `tangent_out` is authoritative on reload.
pub fn encode_curve(curve: &Curve) -> Result<String> {
    Ok(serde_json::to_string_pretty(&record_from_curve(curve))?)
}

/// Build a curve from an already-parsed record.
pub fn curve_from_record(record: &CurveRecord) -> Result<Curve> {
    if record.pivot_points.is_empty() {
        return Err(RegistryError::EmptyPivotList {
            curve: record.curve_name.clone(),
        });
    }

    let mut pivots = Vec::with_capacity(record.pivot_points.len());
    for pivot in &record.pivot_points {
        pivots.push(pivot_from_record(&record.curve_name, pivot)?);
    }

    Curve::new(record.curve_name.clone(), pivots, record.clamp_mode).map_err(|source| {
        RegistryError::Validation {
            curve: record.curve_name.clone(),
            source,
        }
    })
}

/// Capture a curve as a serializable record.
pub fn record_from_curve(curve: &Curve) -> CurveRecord {
    CurveRecord {
        curve_name: curve.name().to_string(),
        pivot_points: curve
            .pivot_points()
            .iter()
            .map(|pivot| PivotRecord {
                point_mode: pivot.mode(),
                x: pivot.position().x,
                y: pivot.position().y,
                tangent_in: Some(pivot.tangent_in().into()),
                tangent_out: Some(pivot.tangent_out().into()),
            })
            .collect(),
        clamp_mode: curve.fold_mode(),
    }
}

fn pivot_from_record(curve: &str, record: &PivotRecord) -> Result<PivotPoint> {
    let validation = |source| RegistryError::Validation {
        curve: curve.to_string(),
        source,
    };

    match record.point_mode {
        // Linear pivots carry fixed tangents; any tangent fields in the
        // record are ignored.
        PivotMode::Linear => Ok(PivotPoint::linear(record.x, record.y)),

        PivotMode::Smooth => match (record.tangent_out, record.tangent_in) {
            (Some(tangent_out), maybe_in) => {
                if maybe_in.is_some() {
                    warn!(
                        curve,
                        x = record.x,
                        "smooth pivot defines both tangents; the definition is \
                         ambiguous and 'tangent_out' wins"
                    );
                }
                PivotPoint::smooth(record.x, record.y, tangent_out.into()).map_err(validation)
            }
            // A lone incoming tangent is accepted and negated into the
            // canonical outgoing form.
            (None, Some(tangent_in)) => {
                let tangent_in: Vec2 = tangent_in.into();
                PivotPoint::smooth(record.x, record.y, -tangent_in).map_err(validation)
            }
            (None, None) => Err(RegistryError::MissingTangent {
                curve: curve.to_string(),
                mode: "SMOOTH",
                x: record.x,
                field: "tangent_out",
            }),
        },

        PivotMode::Split => match (record.tangent_in, record.tangent_out) {
            (Some(tangent_in), Some(tangent_out)) => {
                PivotPoint::split(record.x, record.y, tangent_in.into(), tangent_out.into())
                    .map_err(validation)
            }
            (None, _) => Err(RegistryError::MissingTangent {
                curve: curve.to_string(),
                mode: "SPLIT",
                x: record.x,
                field: "tangent_in",
            }),
            (_, None) => Err(RegistryError::MissingTangent {
                curve: curve.to_string(),
                mode: "SPLIT",
                x: record.x,
                field: "tangent_out",
            }),
        },
    }
}
