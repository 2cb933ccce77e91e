//! Schema reference resolution and navigation for schemanav.
//!
//! This crate provides:
//! - [`Schema`]: Boolean-or-object JSON Schema document model
//! - [`Lookup`]: Pointer resolution against a bound document
//! - [`LookupRegistry`]: Document title to lookup mapping
//! - [`build_path`]: Breadcrumb trail for a URL path
//! - [`build_links`]: Side navigation with a deduplicated definitions group
//! - [`load_schemas`]: Loading documents from a [`SchemaSource`]
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use schemanav_core::{
//!     FsSchemaSource, LookupRegistry, build_links, build_path, load_schemas, split_url_path,
//! };
//!
//! let source = FsSchemaSource::new(PathBuf::from("schemas"));
//! let targets = source.discover()?;
//! let schemas = load_schemas(&source, &targets)?;
//! let registry = LookupRegistry::from_schemas(&schemas)?;
//!
//! // Breadcrumbs for the current URL
//! let path = build_path(&split_url_path("/app/Form#"), &["app"], &registry);
//!
//! // Side navigation anchored at the current document
//! if let Some(lookup) = path.last().and_then(|e| e.lookup.as_deref()) {
//!     let links = build_links(&schemas, lookup);
//! }
//! # Ok(())
//! # }
//! ```

mod loader;
mod lookup;
mod path;
mod reference;
mod registry;
mod schema;
mod side_nav;
mod title;

pub use loader::{FsSchemaSource, LoadError, SchemaSource, load_schemas};
pub use lookup::{InternalLookup, Lookup, get_schema_from_reference};
pub use path::{
    PathElement, UNKNOWN_DOCUMENT_TITLE, build_path, relative_segments, split_url_path,
};
pub use reference::Reference;
pub use registry::{LookupRegistry, RegistryError};
pub use schema::{Schema, SchemaNode};
pub use side_nav::{
    DEFINITIONS_GROUP_TITLE, GroupSideNavLink, SideNavLink, SingleSideNavLink, build_links,
};
pub use title::{ANYTHING_TITLE, NOT_FOUND_TITLE, OBJECT_TITLE, title};
