//! Registry of lookups keyed by document title.
//!
//! Built once the document set is final. Document titles are the namespace
//! keys of references, so the registry refuses duplicates instead of letting
//! one document shadow another.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::lookup::{InternalLookup, Lookup};
use crate::schema::Schema;

/// Error returned when the document set cannot be indexed by title.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Two documents share a title.
    #[error("Duplicate schema document title: {0}")]
    DuplicateTitle(String),
    /// An object document has no title to be addressed by.
    #[error("Schema document at position {index} has no title")]
    MissingTitle {
        /// Position of the document in the input list.
        index: usize,
    },
}

/// Mapping from document title to the [`Lookup`] bound to that document.
#[derive(Clone, Debug, Default)]
pub struct LookupRegistry {
    lookups: BTreeMap<String, Arc<dyn Lookup>>,
}

impl LookupRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry with one [`InternalLookup`] per document.
    ///
    /// Boolean documents have no title and cannot be addressed; they are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::MissingTitle` for an untitled object document
    /// and `RegistryError::DuplicateTitle` when two documents share a title.
    pub fn from_schemas(schemas: &[Schema]) -> Result<Self, RegistryError> {
        let mut registry = Self::new();

        for (index, schema) in schemas.iter().enumerate() {
            let Some(node) = schema.as_node() else {
                tracing::warn!(index, "Skipping boolean schema document");
                continue;
            };
            let title = node
                .title()
                .ok_or(RegistryError::MissingTitle { index })?
                .to_owned();
            let lookup = InternalLookup::new(Arc::new(schema.clone()));
            registry.insert(title, Arc::new(lookup))?;
        }

        tracing::debug!(document_count = registry.len(), "Lookup registry built");
        Ok(registry)
    }

    /// Register `lookup` under `title`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateTitle` if `title` is already taken.
    pub fn insert(&mut self, title: String, lookup: Arc<dyn Lookup>) -> Result<(), RegistryError> {
        if self.lookups.contains_key(&title) {
            return Err(RegistryError::DuplicateTitle(title));
        }
        self.lookups.insert(title, lookup);
        Ok(())
    }

    /// Lookup registered for a document title.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&Arc<dyn Lookup>> {
        self.lookups.get(title)
    }

    /// Registered document titles, sorted.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.lookups.keys().map(String::as_str)
    }

    /// Number of registered documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lookups.len()
    }

    /// Whether no documents are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lookups.is_empty()
    }
}
