//! Piecewise cubic Bezier animation curves for Glimmer.
//!
//! This crate implements the curve math used to drive animation
//! parameters (opacity, scale, speed, brightness) from a normalized
//! progress value: pivot points with continuity modes, multi-segment
//! cubic Bezier construction and evaluation, and boundary domain
//! folding.
//!
//! # Overview
//!
//! Curves are authored as ordered [`PivotPoint`] lists. Each pivot
//! carries a position, a pair of tangent vectors, and a continuity
//! mode:
//! - **Smooth**: mirrored tangents, first-derivative continuity
//! - **Linear**: fixed flat tangents on both sides
//! - **Split**: independent tangents, allowing a visible corner
//!
//! [`Curve::new`] links every adjacent pivot pair into a [`Segment`]
//! and validates the chain once; a constructed curve is geometrically
//! sound and immutable, so it can be shared across threads without
//! coordination. Inputs outside `[0,1]` are folded back into the
//! domain by the curve's [`FoldMode`] before segment lookup.
//!
//! Evaluation is exact and recomputed per call; there is no sampling
//! or lookup-table layer.
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use glimmer_curves::{Curve, FoldMode, PivotPoint};
//!
//! let curve = Curve::new(
//!     "fade_in",
//!     vec![
//!         PivotPoint::smooth(0.0, 0.0, Vec2::new(0.3, 0.1))?,
//!         PivotPoint::smooth(1.0, 1.0, Vec2::new(0.3, 0.1))?,
//!     ],
//!     FoldMode::Clamp,
//! )?;
//!
//! assert_eq!(curve.evaluate(0.0), 0.0);
//! assert_eq!(curve.evaluate(1.0), 1.0);
//! assert!(curve.evaluate(0.25) < curve.evaluate(0.75));
//! # Ok::<(), glimmer_curves::CurveError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod curve;
pub mod error;
pub mod fold;
pub mod pivot;
pub mod point;
pub mod prelude;
pub mod presets;
pub mod segment;

pub use curve::Curve;
pub use error::{CurveError, TangentRole};
pub use fold::FoldMode;
pub use pivot::{PivotMode, PivotPoint};
pub use point::ControlPoint;
pub use segment::Segment;
