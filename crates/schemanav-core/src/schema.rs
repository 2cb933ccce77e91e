//! Schema document model.
//!
//! A schema is either a boolean (`true` accepts anything, `false` accepts
//! nothing) or an object node. Object nodes expose the two fields navigation
//! cares about, `title` and `definitions`, and keep every other dialect field
//! as opaque JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON Schema node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSchema", into = "RawSchema")]
pub enum Schema {
    /// Boolean `true` schema.
    Anything,
    /// Boolean `false` schema.
    Nothing,
    /// Object schema.
    Node(SchemaNode),
}

/// Object form of a schema.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    /// Human-readable title. At a document root this is the document's
    /// namespace key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Named reusable sub-schemas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<BTreeMap<String, Schema>>,
    /// Remaining dialect fields (`properties`, `items`, `enum`, ...).
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Wire shape of [`Schema`].
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawSchema {
    Bool(bool),
    Node(SchemaNode),
}

impl From<RawSchema> for Schema {
    fn from(raw: RawSchema) -> Self {
        match raw {
            RawSchema::Bool(true) => Self::Anything,
            RawSchema::Bool(false) => Self::Nothing,
            RawSchema::Node(node) => Self::Node(node),
        }
    }
}

impl From<Schema> for RawSchema {
    fn from(schema: Schema) -> Self {
        match schema {
            Schema::Anything => Self::Bool(true),
            Schema::Nothing => Self::Bool(false),
            Schema::Node(node) => Self::Node(node),
        }
    }
}

impl Schema {
    /// Interpret a JSON value as a schema.
    ///
    /// Returns `None` for values that are neither booleans nor objects.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(true) => Some(Self::Anything),
            Value::Bool(false) => Some(Self::Nothing),
            Value::Object(_) => serde_json::from_value(value).ok().map(Self::Node),
            _ => None,
        }
    }

    /// Object node, if this is not a boolean schema.
    #[must_use]
    pub fn as_node(&self) -> Option<&SchemaNode> {
        match self {
            Self::Node(node) => Some(node),
            Self::Anything | Self::Nothing => None,
        }
    }

    /// Non-empty title of an object schema.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.as_node().and_then(SchemaNode::title)
    }

    /// Definitions map of an object schema, when declared and non-empty.
    #[must_use]
    pub fn definitions(&self) -> Option<&BTreeMap<String, Schema>> {
        self.as_node()
            .and_then(|node| node.definitions.as_ref())
            .filter(|defs| !defs.is_empty())
    }
}

impl SchemaNode {
    /// Title, treating an empty string as absent.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Whether the node enumerates its allowed values.
    #[must_use]
    pub fn is_enum(&self) -> bool {
        self.fields.get("enum").is_some_and(|v| !v.is_null())
    }
}
