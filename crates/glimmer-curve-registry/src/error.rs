//! Error types for codec and registry operations.

use glimmer_curves::CurveError;
use thiserror::Error;

/// Errors that can occur while parsing, persisting, or loading curve
/// definitions.
///
/// Failures are scoped to the smallest unit that can fail: a malformed
/// definition is reported (and skipped during batch loads) without
/// affecting other definitions, and only an I/O failure on a whole
/// source scan aborts that scan.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A definition source could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Definition text is not well-formed JSON or uses unknown field
    /// values (unrecognized point or clamp mode).
    #[error("malformed curve definition: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A pivot record omits a tangent field its mode requires.
    #[error("curve '{curve}': {mode} pivot at x {x} is missing required field '{field}'")]
    MissingTangent {
        /// Name of the curve being decoded.
        curve: String,
        /// The pivot's declared mode.
        mode: &'static str,
        /// X position of the offending pivot record.
        x: f32,
        /// The absent field.
        field: &'static str,
    },

    /// A definition contains no pivot points at all.
    #[error("curve '{curve}' defines no pivot points")]
    EmptyPivotList {
        /// Name of the curve being decoded.
        curve: String,
    },

    /// A definition parsed but its geometry failed validation.
    #[error("curve '{curve}' failed validation: {source}")]
    Validation {
        /// Name of the curve being decoded.
        curve: String,
        /// The underlying geometry error.
        #[source]
        source: CurveError,
    },

    /// `save` was called on a registry with no writable source.
    #[error("no writable definition source configured")]
    NoWritableSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_tangent() {
        let err = RegistryError::MissingTangent {
            curve: "glow".to_string(),
            mode: "SPLIT",
            x: 0.5,
            field: "tangent_in",
        };
        let msg = format!("{}", err);
        assert!(msg.contains("glow"));
        assert!(msg.contains("SPLIT"));
        assert!(msg.contains("tangent_in"));
    }

    #[test]
    fn test_validation_error_carries_source() {
        let err = RegistryError::Validation {
            curve: "solo".to_string(),
            source: CurveError::TooFewPivots {
                name: "solo".to_string(),
                count: 1,
            },
        };
        let msg = format!("{}", err);
        assert!(msg.contains("solo"));
        assert!(msg.contains("at least 2"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = RegistryError::NoWritableSource;
        let _: &dyn std::error::Error = &err;
    }
}
