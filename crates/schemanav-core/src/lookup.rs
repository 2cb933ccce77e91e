//! Pointer resolution against schema documents.
//!
//! A [`Lookup`] is bound to one root document and turns the pointer portion
//! of a reference (`#/definitions/Foo`) into the schema it designates.
//! [`InternalLookup`] resolves purely within its own document; other
//! strategies (e.g. following references into sibling documents) implement
//! the same trait.
//!
//! # Pointer Syntax
//!
//! - `""` or `"#"` - the document root
//! - `"#/a/b"` - field `a`, then field `b`
//!
//! Segments arrive already decoded and are matched literally. Inside
//! `definitions` and other object fields a segment is a key; inside arrays it
//! is a decimal index.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::reference::Reference;
use crate::schema::Schema;

/// Resolves pointers against a bound root document.
pub trait Lookup: fmt::Debug + Send + Sync {
    /// Resolve `pointer` to the schema it designates.
    ///
    /// Returns `None` when any segment does not exist, passes through a
    /// boolean schema, or lands on a value that is not a schema.
    fn resolve(&self, pointer: &str) -> Option<Cow<'_, Schema>>;
}

/// Resolve `reference` through `lookup`, ignoring its document portion.
///
/// The caller picks the lookup for the reference's document; this strips the
/// reference down to its pointer.
pub fn get_schema_from_reference<'a>(
    reference: &Reference,
    lookup: &'a dyn Lookup,
) -> Option<Cow<'a, Schema>> {
    lookup.resolve(reference.pointer())
}

/// Lookup that resolves pointers within a single document.
#[derive(Clone, Debug)]
pub struct InternalLookup {
    root: Arc<Schema>,
}

impl InternalLookup {
    /// Bind a lookup to `root`.
    #[must_use]
    pub fn new(root: Arc<Schema>) -> Self {
        Self { root }
    }

    /// The bound root document.
    #[must_use]
    pub fn root(&self) -> &Schema {
        &self.root
    }
}

impl From<Schema> for InternalLookup {
    fn from(root: Schema) -> Self {
        Self::new(Arc::new(root))
    }
}

impl Lookup for InternalLookup {
    fn resolve(&self, pointer: &str) -> Option<Cow<'_, Schema>> {
        let rest = pointer.strip_prefix('#').unwrap_or(pointer);
        let mut cursor = Cursor::Schema(self.root.as_ref());
        if rest.is_empty() {
            return cursor.into_schema();
        }

        let path = rest.strip_prefix('/')?;
        if path.is_empty() {
            return cursor.into_schema();
        }

        for segment in path.split('/') {
            cursor = cursor.step(segment)?;
        }
        cursor.into_schema()
    }
}

/// Position reached while walking a pointer.
#[derive(Clone, Copy)]
enum Cursor<'a> {
    Schema(&'a Schema),
    Definitions(&'a BTreeMap<String, Schema>),
    Value(&'a Value),
}

impl<'a> Cursor<'a> {
    fn step(self, segment: &str) -> Option<Self> {
        match self {
            Self::Schema(Schema::Anything | Schema::Nothing) => None,
            Self::Schema(Schema::Node(node)) => match segment {
                "definitions" => node.definitions.as_ref().map(Self::Definitions),
                // A title is a string; nothing below it is addressable.
                "title" => None,
                _ => node.fields.get(segment).map(Self::Value),
            },
            Self::Definitions(definitions) => definitions.get(segment).map(Self::Schema),
            Self::Value(Value::Object(map)) => map.get(segment).map(Self::Value),
            Self::Value(Value::Array(items)) => segment
                .parse::<usize>()
                .ok()
                .and_then(|i| items.get(i))
                .map(Self::Value),
            Self::Value(_) => None,
        }
    }

    fn into_schema(self) -> Option<Cow<'a, Schema>> {
        match self {
            Self::Schema(schema) => Some(Cow::Borrowed(schema)),
            Self::Definitions(definitions) => serde_json::to_value(definitions)
                .ok()
                .and_then(Schema::from_value)
                .map(Cow::Owned),
            Self::Value(value) => Schema::from_value(value.clone()).map(Cow::Owned),
        }
    }
}
