//! `schemanav path` command implementation.

use clap::Args;
use schemanav_core::{build_path, get_schema_from_reference, split_url_path};

use super::SchemaArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the path command.
#[derive(Args)]
pub(crate) struct PathArgs {
    /// URL path to interpret (e.g. "/app/Form%23/Step%23%2Fdefinitions%2FId").
    url_path: String,

    #[command(flatten)]
    pub schemas: SchemaArgs,
}

impl PathArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let workspace = self.schemas.load(output)?;

        let segments = split_url_path(&self.url_path);
        let base_segments = workspace.config.routing.base_segments();
        let path = build_path(&segments, &base_segments, &workspace.registry);

        let Some(current) = path.last() else {
            return Err(CliError::NotFound(
                "Could not work out what to load from the schema".to_owned(),
            ));
        };

        match current.lookup.as_deref() {
            None => output.warning(&format!("Object not found: {}", current.reference)),
            Some(lookup) => {
                if get_schema_from_reference(&current.reference, lookup).is_none() {
                    output.warning(&format!(
                        "Could not look up the schema requested in the URL: {}",
                        current.reference
                    ));
                }
            }
        }

        output.data(&serde_json::to_string_pretty(&path)?)?;
        Ok(())
    }
}
