//! Reference strings.
//!
//! A reference names a document and a pointer inside it:
//! `<documentTitle>#<pointer>`, e.g. `Form#/definitions/Field`. An empty
//! document title means "the current document".

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `<documentTitle>#<pointer>` reference.
///
/// Always contains a `#`; the pointer portion returned by
/// [`Reference::pointer`] therefore always starts with `#`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Reference(String);

impl Reference {
    /// Build a reference from a document title and the pointer text after `#`.
    #[must_use]
    pub fn new(document: &str, pointer_tail: &str) -> Self {
        Self(format!("{document}#{pointer_tail}"))
    }

    /// Reference to the root of a document (`<title>#`).
    #[must_use]
    pub fn document_root(document: &str) -> Self {
        Self::new(document, "")
    }

    /// Reference to a named definition (`<title>#/definitions/<key>`).
    #[must_use]
    pub fn definition(document: &str, key: &str) -> Self {
        Self(format!("{document}#/definitions/{key}"))
    }

    /// Parse reference text, splitting on the first `#`.
    ///
    /// Text without `#` is taken as a bare document title.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text.split_once('#') {
            Some((document, tail)) => Self::new(document, tail),
            None => Self::document_root(text),
        }
    }

    /// Document title portion (before the first `#`).
    #[must_use]
    pub fn document_title(&self) -> &str {
        &self.0[..self.hash_index()]
    }

    /// Pointer portion, including the leading `#`.
    #[must_use]
    pub fn pointer(&self) -> &str {
        &self.0[self.hash_index()..]
    }

    /// Full reference text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn hash_index(&self) -> usize {
        self.0.find('#').unwrap_or(self.0.len())
    }
}

impl From<String> for Reference {
    fn from(text: String) -> Self {
        if text.contains('#') {
            Self(text)
        } else {
            Self::document_root(&text)
        }
    }
}

impl From<Reference> for String {
    fn from(reference: Reference) -> Self {
        reference.0
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_first_hash() {
        let reference = Reference::parse("Doc#/definitions/A#B");
        assert_eq!(reference.document_title(), "Doc");
        assert_eq!(reference.pointer(), "#/definitions/A#B");
    }

    #[test]
    fn test_parse_without_hash_is_document_root() {
        let reference = Reference::parse("Doc");
        assert_eq!(reference.as_str(), "Doc#");
        assert_eq!(reference.pointer(), "#");
    }

    #[test]
    fn test_empty_document_title() {
        let reference = Reference::parse("#/definitions/Foo");
        assert_eq!(reference.document_title(), "");
        assert_eq!(reference.pointer(), "#/definitions/Foo");
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Reference::document_root("Form").as_str(), "Form#");
        assert_eq!(
            Reference::definition("Form", "Field").as_str(),
            "Form#/definitions/Field"
        );
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let reference = Reference::definition("Form", "Field");
        let json = serde_json::to_string(&reference).unwrap();
        assert_eq!(json, r#""Form#/definitions/Field""#);

        let back: Reference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reference);
    }
}
