//! Named curve storage, lookup, and reload for Glimmer.
//!
//! This crate provides the persistence and lookup layer on top of
//! [`glimmer_curves`]:
//! - a JSON codec for the on-disk curve definition format
//! - a [`CurveDefinitionSource`](source::CurveDefinitionSource)
//!   abstraction over where definition text lives, with directory-scan
//!   and packaged-resource providers
//! - a [`CurveRegistry`](registry::CurveRegistry) caching curves by
//!   name with load, save, and reload semantics
//!
//! # Architecture
//!
//! - [`codec`]: serde records mirroring the wire format and the
//!   record ⇄ curve conversions
//! - [`source`]: the definition-source trait plus the concrete
//!   directory and packaged providers
//! - [`registry`]: the name-keyed cache and its lifecycle operations
//! - [`error`]: error types for codec and registry operations
//!
//! # Error Recovery
//!
//! One bad definition never takes down a scan: parse and validation
//! failures are logged and the offending entry is skipped. File writes
//! are atomic (temp file, then rename) and the in-memory cache is only
//! touched after a write succeeds. A missing curve at evaluation time
//! is not an error either; the lookup falls back to the identity
//! mapping.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use glimmer_curve_registry::prelude::*;
//!
//! # fn main() -> std::io::Result<()> {
//! let registry = CurveRegistry::new(vec![
//!     Arc::new(PackagedSource::new("defaults", Vec::new())),
//!     Arc::new(DirectorySource::new("config/curves")?),
//! ]);
//! registry.load_all();
//!
//! // Drives an animation parameter; a missing curve falls back to
//! // the identity mapping instead of failing.
//! let opacity = registry.evaluate("fade_in_smooth", 0.37);
//! # let _ = opacity;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod codec;
pub mod error;
pub mod prelude;
pub mod registry;
pub mod source;

pub use error::RegistryError;
pub use registry::CurveRegistry;
pub use source::{CurveDefinitionSource, DirectorySource, PackagedSource};

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
