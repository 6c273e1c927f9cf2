//! Definition sources: where curve text comes from and goes to.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// File extension expected on definition files.
const DEFINITION_EXTENSION: &str = "json";

/// A provider of curve definition text.
///
/// The registry depends only on this interface; hosts plug in
/// directory scans, packaged resources, or anything else that can
/// yield definition text. Identifiers are file-style names
/// (`<curve_name>.json`). Sources are read-only unless they opt into
/// writes.
pub trait CurveDefinitionSource: Send + Sync {
    /// Short human-readable name used in log output.
    fn label(&self) -> &str;

    /// Enumerate every `(identifier, text)` pair the source offers.
    fn list_definitions(&self) -> io::Result<Vec<(String, String)>>;

    /// Read a single definition by identifier.
    fn read_definition(&self, id: &str) -> io::Result<String>;

    /// Persist a definition under the identifier.
    fn write_definition(&self, _id: &str, _text: &str) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("source '{}' is read-only", self.label()),
        ))
    }

    /// Whether `write_definition` is expected to succeed.
    fn is_writable(&self) -> bool {
        false
    }
}

/// Writable provider scanning a directory of definition files.
///
/// The usual backing for user-editable curves: one `<curve_name>.json`
/// file per curve. Writes are atomic (temp file, then rename), so a
/// failed write never clobbers an existing definition.
#[derive(Debug)]
pub struct DirectorySource {
    label: String,
    dir: PathBuf,
}

impl DirectorySource {
    /// Open a directory source, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let label = dir.display().to_string();
        Ok(Self { label, dir })
    }

    /// The directory scanned by this source.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn definition_path(&self, id: &str) -> PathBuf {
        self.dir.join(id)
    }
}

impl CurveDefinitionSource for DirectorySource {
    fn label(&self) -> &str {
        &self.label
    }

    fn list_definitions(&self) -> io::Result<Vec<(String, String)>> {
        let mut definitions = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(DEFINITION_EXTENSION) {
                continue;
            }
            let Some(id) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            definitions.push((id.to_string(), fs::read_to_string(&path)?));
        }
        Ok(definitions)
    }

    fn read_definition(&self, id: &str) -> io::Result<String> {
        fs::read_to_string(self.definition_path(id))
    }

    fn write_definition(&self, id: &str, text: &str) -> io::Result<()> {
        let path = self.definition_path(id);
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, text)?;
        fs::rename(&temp_path, &path)?;
        debug!(path = ?path, "definition written");
        Ok(())
    }

    fn is_writable(&self) -> bool {
        true
    }
}

/// Read-only provider over definitions shipped with the application,
/// typically fed from `include_str!` resources compiled into the host.
#[derive(Debug)]
pub struct PackagedSource {
    label: String,
    entries: Vec<(String, String)>,
}

impl PackagedSource {
    /// Wrap a set of `(identifier, text)` resource entries.
    #[must_use]
    pub fn new(label: impl Into<String>, entries: Vec<(String, String)>) -> Self {
        Self {
            label: label.into(),
            entries,
        }
    }
}

impl CurveDefinitionSource for PackagedSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn list_definitions(&self) -> io::Result<Vec<(String, String)>> {
        Ok(self.entries.clone())
    }

    fn read_definition(&self, id: &str) -> io::Result<String> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no packaged definition '{id}'"),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn must<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
        match result {
            Ok(v) => v,
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }

    #[test]
    fn test_directory_source_creates_directory() {
        let temp = must(TempDir::new());
        let nested = temp.path().join("config").join("curves");
        let source = must(DirectorySource::new(&nested));
        assert!(nested.is_dir());
        assert!(source.is_writable());
    }

    #[test]
    fn test_directory_source_lists_only_json_files() {
        let temp = must(TempDir::new());
        let source = must(DirectorySource::new(temp.path()));
        must(fs::write(temp.path().join("a.json"), "{}"));
        must(fs::write(temp.path().join("b.json"), "{}"));
        must(fs::write(temp.path().join("notes.txt"), "ignore me"));

        let definitions = must(source.list_definitions());
        assert_eq!(definitions.len(), 2);
    }

    #[test]
    fn test_directory_source_write_then_read() {
        let temp = must(TempDir::new());
        let source = must(DirectorySource::new(temp.path()));
        must(source.write_definition("glow.json", "{ \"probe\": true }"));

        let text = must(source.read_definition("glow.json"));
        assert_eq!(text, "{ \"probe\": true }");
        // The temp file from the atomic write does not linger.
        assert!(!temp.path().join("glow.tmp").exists());
    }

    #[test]
    fn test_directory_source_read_missing_fails() {
        let temp = must(TempDir::new());
        let source = must(DirectorySource::new(temp.path()));
        assert!(source.read_definition("ghost.json").is_err());
    }

    #[test]
    fn test_packaged_source_is_read_only() {
        let source = PackagedSource::new(
            "defaults",
            vec![("glow.json".to_string(), "{}".to_string())],
        );
        assert!(!source.is_writable());
        assert!(source.write_definition("glow.json", "{}").is_err());
        assert_eq!(must(source.read_definition("glow.json")), "{}");
        assert!(source.read_definition("ghost.json").is_err());
    }
}
