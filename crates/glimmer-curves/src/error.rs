//! Error types for curve construction and evaluation.

use std::fmt;

use thiserror::Error;

/// Which side of a pivot point a tangent vector belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TangentRole {
    /// Incoming tangent, pointing left toward the previous pivot.
    In,
    /// Outgoing tangent, pointing right toward the next pivot.
    Out,
}

impl fmt::Display for TangentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::In => write!(f, "incoming"),
            Self::Out => write!(f, "outgoing"),
        }
    }
}

/// Errors produced while building or evaluating curve geometry.
///
/// A curve that fails construction never exists as a value; callers
/// decide whether to abort or skip the offending definition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Tangent vector violates a direction, length, or slope constraint.
    #[error("invalid {role} tangent ({x}, {y}): {reason}")]
    InvalidTangent {
        /// The side of the pivot the tangent was given for.
        role: TangentRole,
        /// X component of the rejected vector.
        x: f32,
        /// Y component of the rejected vector.
        y: f32,
        /// Which constraint failed.
        reason: &'static str,
    },

    /// A curve needs at least two pivot points to span a domain.
    #[error("curve '{name}' has {count} pivot point(s), at least 2 required")]
    TooFewPivots {
        /// Name of the curve under construction.
        name: String,
        /// Number of pivot points supplied.
        count: usize,
    },

    /// Segment anchors coincide on x or run right-to-left.
    #[error("segment end x {x_end} must be strictly greater than start x {x_start}")]
    EmptySegmentSpan {
        /// X of the starting anchor.
        x_start: f32,
        /// X of the ending anchor.
        x_end: f32,
    },

    /// Input lies outside the x range covered by the segment.
    #[error("x value {x} outside segment range [{x_start}, {x_end}]")]
    OutOfSegmentRange {
        /// The rejected input.
        x: f32,
        /// Start of the segment's x range.
        x_start: f32,
        /// End of the segment's x range.
        x_end: f32,
    },

    /// Adjacent segments do not join on the x axis.
    #[error(
        "segments {index} and {next} disconnected: end x {x_end} vs start x {next_x_start}"
    )]
    DiscontinuousSegments {
        /// Index of the earlier segment.
        index: usize,
        /// Index of the later segment.
        next: usize,
        /// Where the earlier segment ends.
        x_end: f32,
        /// Where the later segment starts.
        next_x_start: f32,
    },

    /// Linear-mode pivot points expose no outgoing handle point.
    #[error("linear pivot point at x {x} has no outgoing handle point")]
    LinearOutgoingHandle {
        /// X position of the pivot.
        x: f32,
    },
}
