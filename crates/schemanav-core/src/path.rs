//! Navigation path reconstruction from URL paths.
//!
//! The application is mounted under a base path (e.g. `/app/v1`). Every URL
//! segment after the base is one hop of the breadcrumb trail, written as a
//! (percent-encoded) reference: `/app/v1/Form%23/Step%23%2Fdefinitions%2FId`.

use std::sync::Arc;

use percent_encoding::percent_decode_str;
use serde::Serialize;

use crate::lookup::{Lookup, get_schema_from_reference};
use crate::reference::Reference;
use crate::registry::LookupRegistry;
use crate::title::title;

/// Title of a path element whose document is not loaded.
pub const UNKNOWN_DOCUMENT_TITLE: &str = "Not found";

/// One hop of the breadcrumb trail.
#[derive(Clone, Debug, Serialize)]
pub struct PathElement {
    /// Display title.
    pub title: String,
    /// Reference this hop points at.
    pub reference: Reference,
    /// Lookup for the referenced document. `None` if the document is unknown.
    #[serde(skip)]
    pub lookup: Option<Arc<dyn Lookup>>,
}

impl PathElement {
    /// Whether the referenced document was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.lookup.is_some()
    }
}

/// Split a URL pathname into segments, dropping one leading slash.
///
/// `"/app/Form#"` becomes `["app", "Form#"]`. An empty pathname yields a
/// single empty segment.
pub fn split_url_path(pathname: &str) -> Vec<&str> {
    pathname
        .strip_prefix('/')
        .unwrap_or(pathname)
        .split('/')
        .collect()
}

/// URL segments remaining after the longest common prefix with `base_segments`.
pub fn relative_segments<'a, S, B>(url_segments: &'a [S], base_segments: &[B]) -> &'a [S]
where
    S: AsRef<str>,
    B: AsRef<str>,
{
    let common = url_segments
        .iter()
        .zip(base_segments)
        .take_while(|(url, base)| url.as_ref() == base.as_ref())
        .count();
    &url_segments[common..]
}

/// Build the breadcrumb trail for a URL path.
///
/// Segments shared with `base_segments` are skipped; each remaining segment is
/// decoded, split on its first `#` into document title and pointer, and
/// resolved through `lookups`. The result is in URL order. An empty result
/// means the URL does not address anything under the base path.
pub fn build_path<S, B>(
    url_segments: &[S],
    base_segments: &[B],
    lookups: &LookupRegistry,
) -> Vec<PathElement>
where
    S: AsRef<str>,
    B: AsRef<str>,
{
    relative_segments(url_segments, base_segments)
        .iter()
        .map(|segment| path_element(segment.as_ref(), lookups))
        .collect()
}

fn path_element(segment: &str, lookups: &LookupRegistry) -> PathElement {
    let decoded = percent_decode_str(segment).decode_utf8_lossy();
    let reference = Reference::parse(&decoded);

    let Some(lookup) = lookups.get(reference.document_title()) else {
        tracing::debug!(%reference, "Path segment names an unknown document");
        return PathElement {
            title: UNKNOWN_DOCUMENT_TITLE.to_owned(),
            reference,
            lookup: None,
        };
    };

    let schema = get_schema_from_reference(&reference, lookup.as_ref());
    PathElement {
        title: title(reference.as_str(), schema.as_deref()),
        reference,
        lookup: Some(Arc::clone(lookup)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::schema::Schema;

    fn registry() -> LookupRegistry {
        let schemas = vec![
            Schema::from_value(json!({ "title": "Doc1" })).unwrap(),
            Schema::from_value(json!({
                "title": "Doc2",
                "definitions": { "X": { "title": "Ex" }, "Any": true }
            }))
            .unwrap(),
        ];
        LookupRegistry::from_schemas(&schemas).unwrap()
    }

    fn references(path: &[PathElement]) -> Vec<&str> {
        path.iter().map(|e| e.reference.as_str()).collect()
    }

    fn titles(path: &[PathElement]) -> Vec<&str> {
        path.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_split_url_path() {
        assert_eq!(split_url_path("/app/v1/Doc1#"), vec!["app", "v1", "Doc1#"]);
        assert_eq!(split_url_path("app"), vec!["app"]);
        assert_eq!(split_url_path(""), vec![""]);
        assert_eq!(split_url_path("/"), vec![""]);
    }

    #[test]
    fn test_base_prefix_is_stripped() {
        let path = build_path(
            &["app", "v1", "Doc1#", "Doc2#/definitions/X"],
            &["app", "v1"],
            &registry(),
        );

        assert_eq!(references(&path), vec!["Doc1#", "Doc2#/definitions/X"]);
        assert_eq!(titles(&path), vec!["Doc1", "Ex"]);
        assert!(path.iter().all(PathElement::is_found));
    }

    #[test]
    fn test_partial_prefix_match() {
        let path = build_path(&["app", "v2", "Doc1#"], &["app", "v1"], &registry());

        assert_eq!(references(&path), vec!["v2#", "Doc1#"]);
        assert_eq!(titles(&path), vec![UNKNOWN_DOCUMENT_TITLE, "Doc1"]);
    }

    #[test]
    fn test_segments_are_percent_decoded() {
        let path = build_path(
            &["Doc2%23%2Fdefinitions%2FX"],
            &[] as &[&str],
            &registry(),
        );

        assert_eq!(references(&path), vec!["Doc2#/definitions/X"]);
        assert_eq!(titles(&path), vec!["Ex"]);
    }

    #[test]
    fn test_segment_is_decoded_exactly_once() {
        let schemas = vec![
            Schema::from_value(json!({
                "title": "Doc",
                "definitions": {
                    "Foo%20Bar": { "title": "Literal" },
                    "Foo Bar": { "title": "Spaced" }
                }
            }))
            .unwrap(),
        ];
        let registry = LookupRegistry::from_schemas(&schemas).unwrap();

        let path = build_path(
            &["Doc%23%2Fdefinitions%2FFoo%2520Bar"],
            &[] as &[&str],
            &registry,
        );

        assert_eq!(references(&path), vec!["Doc#/definitions/Foo%20Bar"]);
        assert_eq!(titles(&path), vec!["Literal"]);
    }

    #[test]
    fn test_segment_without_hash_addresses_document_root() {
        let path = build_path(&["Doc1"], &[] as &[&str], &registry());

        assert_eq!(references(&path), vec!["Doc1#"]);
        assert_eq!(titles(&path), vec!["Doc1"]);
    }

    #[test]
    fn test_unknown_document_is_not_found() {
        let path = build_path(&["Missing#/definitions/X"], &[] as &[&str], &registry());

        assert_eq!(path.len(), 1);
        assert_eq!(path[0].title, "Not found");
        assert_eq!(path[0].reference.as_str(), "Missing#/definitions/X");
        assert!(path[0].lookup.is_none());
    }

    #[test]
    fn test_unresolved_pointer_keeps_lookup() {
        let path = build_path(&["Doc2#/definitions/Nope"], &[] as &[&str], &registry());

        assert_eq!(titles(&path), vec!["<not found>"]);
        assert!(path[0].is_found());
    }

    #[test]
    fn test_boolean_definition_title() {
        let path = build_path(&["Doc2#/definitions/Any"], &[] as &[&str], &registry());
        assert_eq!(titles(&path), vec!["<anything>"]);
    }

    #[test]
    fn test_url_equal_to_base_is_empty() {
        let path = build_path(&["app", "v1"], &["app", "v1"], &registry());
        assert!(path.is_empty());
    }

    #[test]
    fn test_base_longer_than_url() {
        let path = build_path(&["app"], &["app", "v1", "extra"], &registry());
        assert!(path.is_empty());

        let url: [&str; 0] = [];
        assert!(build_path(&url, &["app"], &registry()).is_empty());
    }

    #[test]
    fn test_serialized_path_omits_lookup() {
        let path = build_path(&["Doc1#"], &[] as &[&str], &registry());
        let value = serde_json::to_value(&path).unwrap();

        assert_eq!(value, json!([{ "title": "Doc1", "reference": "Doc1#" }]));
    }
}
