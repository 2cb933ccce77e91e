//! Display titles for resolved schema nodes.

use crate::schema::Schema;

/// Label for a reference that did not resolve.
pub const NOT_FOUND_TITLE: &str = "<not found>";
/// Label for a boolean schema, `true` or `false`.
pub const ANYTHING_TITLE: &str = "<anything>";
/// Label for an object schema without a title.
pub const OBJECT_TITLE: &str = "object";

/// Derive a human-readable label for `reference` resolved to `schema`.
///
/// Total over its inputs: unresolved references, boolean schemas and untitled
/// objects all get a fixed label.
#[must_use]
pub fn title(reference: &str, schema: Option<&Schema>) -> String {
    let label = match schema {
        None => {
            tracing::trace!(reference, "Reference did not resolve");
            NOT_FOUND_TITLE
        }
        Some(Schema::Anything | Schema::Nothing) => ANYTHING_TITLE,
        Some(Schema::Node(node)) => node.title().unwrap_or(OBJECT_TITLE),
    };
    label.to_owned()
}
