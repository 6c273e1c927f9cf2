//! Name-keyed curve cache with load, save, and reload semantics.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use glimmer_curves::Curve;
use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use crate::codec;
use crate::error::RegistryError;
use crate::source::CurveDefinitionSource;
use crate::Result;

/// Definition identifier for a curve name.
fn definition_id(name: &str) -> String {
    format!("{name}.json")
}

/// Cached, fallback-safe lookup of named curves.
///
/// Sources are applied in priority order: the registry scans them
/// lowest-priority first, so later sources override earlier ones per
/// curve name (packaged defaults first, user overrides last; last
/// write wins).
///
/// Readers never observe a partially built curve: curves are fully
/// constructed before publication into the cache and handed out behind
/// `Arc`, so a lookup racing a reload sees either the old or the new
/// curve, never an inconsistent one. Writers are serialized by the
/// cache lock, held only for the map mutation itself.
///
/// There is no global instance; hosts construct a registry explicitly
/// and pass it to whatever needs curve lookups.
pub struct CurveRegistry {
    sources: Vec<Arc<dyn CurveDefinitionSource>>,
    cache: RwLock<HashMap<String, Arc<Curve>>>,
}

impl CurveRegistry {
    /// Create a registry over the given sources, lowest priority
    /// first. The cache starts empty; call
    /// [`load_all`](Self::load_all) to populate it.
    #[must_use]
    pub fn new(sources: Vec<Arc<dyn CurveDefinitionSource>>) -> Self {
        Self {
            sources,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Scan a single source, installing every definition that parses.
    ///
    /// Definitions are decoded independently: a malformed or invalid
    /// one is logged and skipped while the scan continues. Failing to
    /// list the source at all aborts the scan and surfaces the error.
    /// Returns the number of curves installed.
    pub fn load_from(&self, source: &dyn CurveDefinitionSource) -> Result<usize> {
        let definitions = source.list_definitions()?;
        let mut installed = 0usize;
        for (id, text) in definitions {
            match codec::decode_curve(&text) {
                Ok(curve) => {
                    debug!(source = source.label(), %id, curve = curve.name(), "curve loaded");
                    self.insert(curve);
                    installed += 1;
                }
                Err(err) => {
                    error!(
                        source = source.label(),
                        %id,
                        error = %err,
                        "skipping curve definition"
                    );
                }
            }
        }
        info!(source = source.label(), installed, "source scan complete");
        Ok(installed)
    }

    /// Scan every configured source in priority order.
    ///
    /// A source that cannot be listed is logged and skipped; the
    /// remaining sources still load. Returns the total number of
    /// curves installed.
    pub fn load_all(&self) -> usize {
        let mut installed = 0usize;
        for source in &self.sources {
            match self.load_from(source.as_ref()) {
                Ok(count) => installed += count,
                Err(err) => {
                    error!(source = source.label(), error = %err, "source scan failed");
                }
            }
        }
        installed
    }

    /// Look up a curve by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Curve>> {
        self.cache.read().get(name).cloned()
    }

    /// Whether a curve with this name is installed.
    #[must_use]
    pub fn has_curve(&self, name: &str) -> bool {
        self.cache.read().contains_key(name)
    }

    /// Number of curves currently installed.
    #[must_use]
    pub fn curve_count(&self) -> usize {
        self.cache.read().len()
    }

    /// Map `x` through the named curve.
    ///
    /// A missing name is not an error: the miss is logged and `x`
    /// comes back unchanged, so callers always get a usable value.
    #[must_use]
    pub fn evaluate(&self, name: &str, x: f32) -> f32 {
        match self.get(name) {
            Some(curve) => curve.evaluate(x),
            None => {
                warn!(curve = name, "curve not found, falling back to identity");
                x
            }
        }
    }

    /// Install a curve directly into the cache, replacing any previous
    /// entry of the same name. Nothing is persisted.
    pub fn insert(&self, curve: Curve) {
        self.cache
            .write()
            .insert(curve.name().to_string(), Arc::new(curve));
    }

    /// Persist a curve through the writable source, then install it.
    ///
    /// The cache is only touched after the write succeeds, so a failed
    /// save leaves lookups unaffected. Fails with
    /// [`RegistryError::NoWritableSource`] when no configured source
    /// accepts writes.
    pub fn save(&self, curve: &Curve) -> Result<()> {
        let source = self
            .writable_source()
            .ok_or(RegistryError::NoWritableSource)?;
        let text = codec::encode_curve(curve)?;
        let id = definition_id(curve.name());
        source.write_definition(&id, &text)?;
        self.insert(curve.clone());
        info!(source = source.label(), curve = curve.name(), "curve saved");
        Ok(())
    }

    /// Re-read one curve's backing definition and reinstall it.
    ///
    /// The highest-priority source offering the definition is
    /// authoritative. When no source still offers it, or when it no
    /// longer decodes, the miss is logged and the cache is left
    /// untouched.
    pub fn reload(&self, name: &str) {
        let id = definition_id(name);
        for source in self.sources.iter().rev() {
            let text = match source.read_definition(&id) {
                Ok(text) => text,
                Err(_) => continue,
            };
            match codec::decode_curve(&text) {
                Ok(curve) => {
                    info!(source = source.label(), curve = name, "curve reloaded");
                    self.insert(curve);
                }
                Err(err) => {
                    error!(
                        source = source.label(),
                        curve = name,
                        error = %err,
                        "curve reload failed"
                    );
                }
            }
            return;
        }
        warn!(curve = name, "no source offers this definition, reload skipped");
    }

    /// Clear the cache, then rescan every source in priority order.
    /// Returns the number of curves installed.
    pub fn reload_all(&self) -> usize {
        info!("reloading all curves");
        self.clear();
        self.load_all()
    }

    /// Empty the cache. Hosts call this on shutdown.
    pub fn clear(&self) {
        self.cache.write().clear();
        debug!("curve cache cleared");
    }

    // Highest-priority source that accepts writes.
    fn writable_source(&self) -> Option<&Arc<dyn CurveDefinitionSource>> {
        self.sources.iter().rev().find(|source| source.is_writable())
    }
}

impl fmt::Debug for CurveRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveRegistry")
            .field("sources", &self.sources.len())
            .field("curves", &self.curve_count())
            .finish()
    }
}
