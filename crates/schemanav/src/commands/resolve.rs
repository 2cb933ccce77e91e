//! `schemanav resolve` command implementation.

use clap::Args;
use schemanav_core::{Reference, get_schema_from_reference};

use super::SchemaArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Reference to resolve (e.g. "Form#/definitions/Field").
    reference: String,

    /// Document to resolve against when the reference has no document title.
    #[arg(short, long)]
    document: Option<String>,

    #[command(flatten)]
    pub schemas: SchemaArgs,
}

impl ResolveArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let workspace = self.schemas.load(output)?;

        let reference = qualify(&self.reference, self.document.as_deref())?;
        let document = reference.document_title();
        let lookup = workspace
            .registry
            .get(document)
            .ok_or_else(|| CliError::NotFound(format!("Unknown schema document: {document}")))?;

        let schema = get_schema_from_reference(&reference, lookup.as_ref())
            .ok_or_else(|| CliError::NotFound(format!("Reference not found: {reference}")))?;

        output.data(&serde_json::to_string_pretty(&*schema)?)?;
        Ok(())
    }
}

/// Substitute `current` for an empty document title.
fn qualify(text: &str, current: Option<&str>) -> Result<Reference, CliError> {
    let reference = Reference::parse(text);
    if !reference.document_title().is_empty() {
        return Ok(reference);
    }
    let current = current.ok_or_else(|| {
        CliError::NotFound(format!(
            "Reference {reference} has no document title; pass --document"
        ))
    })?;
    let tail = reference.pointer().strip_prefix('#').unwrap_or_default();
    Ok(Reference::new(current, tail))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_qualify_keeps_explicit_document() {
        let reference = qualify("Form#/definitions/A", Some("Step")).unwrap();
        assert_eq!(reference.as_str(), "Form#/definitions/A");
    }

    #[test]
    fn test_qualify_substitutes_current_document() {
        let reference = qualify("#/definitions/A", Some("Step")).unwrap();
        assert_eq!(reference.as_str(), "Step#/definitions/A");
    }

    #[test]
    fn test_qualify_requires_document() {
        let err = qualify("#/definitions/A", None).unwrap_err();
        assert!(matches!(err, CliError::NotFound(_)));
        assert!(err.to_string().contains("--document"));
    }
}
