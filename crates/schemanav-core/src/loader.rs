//! Schema document loading.
//!
//! Provides the [`SchemaSource`] trait for reading raw schema documents by
//! target name, the filesystem implementation [`FsSchemaSource`], and
//! [`load_schemas`] which folds a list of targets into the final document set.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::schema::Schema;

/// File extension of schema documents.
const SCHEMA_EXTENSION: &str = "json";

/// Error returned when schema documents cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// No targets to load.
    #[error("No schema documents configured")]
    NoTargets,
    /// Target name would escape the source.
    #[error("Invalid schema target name: {0}")]
    InvalidTarget(String),
    /// Reading the document failed.
    #[error("Failed to read schema {target}: {source}")]
    Io {
        /// Target name.
        target: String,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The document is not a valid schema.
    #[error("Failed to parse schema {target}: {source}")]
    Parse {
        /// Target name.
        target: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Source of raw schema documents, addressed by target name.
pub trait SchemaSource {
    /// Read the raw JSON text of `target`.
    fn read(&self, target: &str) -> Result<String, LoadError>;
}

/// Reads `<source_dir>/<target>.json` from the local filesystem.
#[derive(Clone, Debug)]
pub struct FsSchemaSource {
    source_dir: PathBuf,
}

impl FsSchemaSource {
    /// Create a source rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Root directory.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Target names of every `*.json` file in the source directory, sorted.
    pub fn discover(&self) -> Result<Vec<String>, LoadError> {
        let entries = fs::read_dir(&self.source_dir).map_err(|source| LoadError::Io {
            target: self.source_dir.display().to_string(),
            source,
        })?;

        let mut targets: Vec<String> = entries
            .filter_map(|entry| {
                entry
                    .inspect_err(|e| {
                        tracing::warn!(
                            dir = %self.source_dir.display(),
                            error = %e,
                            "Skipping unreadable directory entry"
                        );
                    })
                    .ok()
            })
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == SCHEMA_EXTENSION))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        targets.sort();

        tracing::debug!(
            dir = %self.source_dir.display(),
            target_count = targets.len(),
            "Discovered schema documents"
        );
        Ok(targets)
    }

    fn validate_target(target: &str) -> Result<(), LoadError> {
        let escapes =
            target.is_empty() || target.contains(['/', '\\']) || target.starts_with("..");
        if escapes {
            return Err(LoadError::InvalidTarget(target.to_owned()));
        }
        Ok(())
    }
}

impl SchemaSource for FsSchemaSource {
    fn read(&self, target: &str) -> Result<String, LoadError> {
        Self::validate_target(target)?;
        let path = self.source_dir.join(format!("{target}.{SCHEMA_EXTENSION}"));
        fs::read_to_string(&path).map_err(|source| LoadError::Io {
            target: target.to_owned(),
            source,
        })
    }
}

/// Load and parse `targets` from `source`, in order.
///
/// The first target is required: if it fails the whole load fails. Later
/// targets that fail are logged and left out.
///
/// # Errors
///
/// Returns `LoadError::NoTargets` for an empty target list, or the error of
/// the first target.
pub fn load_schemas(
    source: &dyn SchemaSource,
    targets: &[String],
) -> Result<Vec<Schema>, LoadError> {
    let (first, rest) = targets.split_first().ok_or(LoadError::NoTargets)?;

    let mut schemas = vec![load_one(source, first)?];
    for target in rest {
        match load_one(source, target) {
            Ok(schema) => schemas.push(schema),
            Err(e) => tracing::warn!(document = %target, error = %e, "Skipping schema document"),
        }
    }

    tracing::debug!(
        document_count = schemas.len(),
        requested = targets.len(),
        "Schema documents loaded"
    );
    Ok(schemas)
}

fn load_one(source: &dyn SchemaSource, target: &str) -> Result<Schema, LoadError> {
    let content = source.read(target)?;
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        target: target.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    /// In-memory source for tests.
    #[derive(Default)]
    struct MapSource {
        documents: HashMap<String, String>,
    }

    impl MapSource {
        fn with_document(mut self, target: &str, content: &str) -> Self {
            self.documents.insert(target.to_owned(), content.to_owned());
            self
        }
    }

    impl SchemaSource for MapSource {
        fn read(&self, target: &str) -> Result<String, LoadError> {
            self.documents
                .get(target)
                .cloned()
                .ok_or_else(|| LoadError::Io {
                    target: target.to_owned(),
                    source: io::Error::from(io::ErrorKind::NotFound),
                })
        }
    }

    fn targets(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_owned()).collect()
    }

    fn titles(schemas: &[Schema]) -> Vec<Option<&str>> {
        schemas.iter().map(Schema::title).collect()
    }

    #[test]
    fn test_load_preserves_target_order() {
        let source = MapSource::default()
            .with_document("Form", r#"{"title": "Form"}"#)
            .with_document("Step", r#"{"title": "Step"}"#);

        let schemas = load_schemas(&source, &targets(&["Step", "Form"])).unwrap();

        assert_eq!(titles(&schemas), vec![Some("Step"), Some("Form")]);
    }

    #[test]
    fn test_load_without_targets_fails() {
        let err = load_schemas(&MapSource::default(), &[]).unwrap_err();
        assert!(matches!(err, LoadError::NoTargets));
    }

    #[test]
    fn test_first_target_failure_is_fatal() {
        let source = MapSource::default().with_document("Step", r#"{"title": "Step"}"#);

        let err = load_schemas(&source, &targets(&["Form", "Step"])).unwrap_err();

        assert!(matches!(err, LoadError::Io { ref target, .. } if target == "Form"));
    }

    #[test]
    fn test_later_target_failures_are_skipped() {
        let source = MapSource::default()
            .with_document("Form", r#"{"title": "Form"}"#)
            .with_document("Broken", "{ not json")
            .with_document("Role", r#"{"title": "Role"}"#);

        let requested = targets(&["Form", "Broken", "Missing", "Role"]);
        let schemas = load_schemas(&source, &requested).unwrap();

        assert_eq!(titles(&schemas), vec![Some("Form"), Some("Role")]);
    }

    #[test]
    fn test_parse_error_names_target() {
        let source = MapSource::default().with_document("Form", r#""just a string""#);

        let err = load_schemas(&source, &targets(&["Form"])).unwrap_err();

        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains("Form"));
    }

    #[test]
    fn test_fs_source_reads_json_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Form.json"), r#"{"title": "Form"}"#).unwrap();
        fs::write(dir.path().join("Any.json"), "true").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested.json")).unwrap();

        let source = FsSchemaSource::new(dir.path().to_path_buf());
        let discovered = source.discover().unwrap();
        assert_eq!(discovered, targets(&["Any", "Form"]));

        let schemas = load_schemas(&source, &discovered).unwrap();
        assert_eq!(schemas[0], Schema::Anything);
        assert_eq!(schemas[1].title(), Some("Form"));
    }

    #[test]
    fn test_fs_source_rejects_escaping_targets() {
        let dir = TempDir::new().unwrap();
        let source = FsSchemaSource::new(dir.path().to_path_buf());

        for target in ["../secret", "a/b", "a\\b", "..", ""] {
            let err = source.read(target).unwrap_err();
            assert!(
                matches!(err, LoadError::InvalidTarget(_)),
                "Expected InvalidTarget for {target:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_fs_source_missing_dir() {
        let source = FsSchemaSource::new(PathBuf::from("/nonexistent/schemanav"));
        assert!(matches!(source.discover(), Err(LoadError::Io { .. })));
    }
}
