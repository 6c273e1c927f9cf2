//! Convenience re-exports for common types.

pub use crate::curve::Curve;
pub use crate::error::{CurveError, TangentRole};
pub use crate::fold::FoldMode;
pub use crate::pivot::{PivotMode, PivotPoint};
pub use crate::point::ControlPoint;
pub use crate::segment::Segment;
