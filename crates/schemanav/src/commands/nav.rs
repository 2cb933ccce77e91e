//! `schemanav nav` command implementation.

use clap::Args;
use schemanav_core::build_links;

use super::SchemaArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Title of the document being viewed (default: first loaded document).
    #[arg(short, long)]
    document: Option<String>,

    #[command(flatten)]
    pub schemas: SchemaArgs,
}

impl NavArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let workspace = self.schemas.load(output)?;

        let anchor_title = match self.document {
            Some(title) => title,
            None => workspace
                .schemas
                .iter()
                .find_map(|schema| schema.title())
                .ok_or_else(|| CliError::NotFound("No navigable schema documents".to_owned()))?
                .to_owned(),
        };
        let anchor = workspace
            .registry
            .get(&anchor_title)
            .ok_or_else(|| CliError::NotFound(format!("Unknown schema document: {anchor_title}")))?;

        let links = build_links(&workspace.schemas, anchor.as_ref());
        output.data(&serde_json::to_string_pretty(&links)?)?;
        Ok(())
    }
}
