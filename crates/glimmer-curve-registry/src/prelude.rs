//! Convenience re-exports for common types.

pub use crate::codec::{CurveRecord, PivotRecord, TangentRecord};
pub use crate::error::RegistryError;
pub use crate::registry::CurveRegistry;
pub use crate::source::{CurveDefinitionSource, DirectorySource, PackagedSource};

pub use glimmer_curves::prelude::{
    ControlPoint, Curve, CurveError, FoldMode, PivotMode, PivotPoint, Segment,
};
