//! CLI command implementations.

pub(crate) mod nav;
pub(crate) mod path;
pub(crate) mod resolve;

use std::path::PathBuf;

use clap::Args;
use schemanav_config::{CliSettings, Config};
use schemanav_core::{FsSchemaSource, LookupRegistry, Schema, load_schemas};

use crate::error::CliError;
use crate::output::Output;

pub(crate) use nav::NavArgs;
pub(crate) use path::PathArgs;
pub(crate) use resolve::ResolveArgs;

/// Arguments shared by every command for locating schema documents.
#[derive(Args)]
pub(crate) struct SchemaArgs {
    /// Path to configuration file (default: auto-discover schemanav.toml).
    #[arg(short, long, env = "SCHEMANAV_CONFIG")]
    config: Option<PathBuf>,

    /// Schema source directory (overrides config).
    #[arg(short, long)]
    schema_dir: Option<PathBuf>,

    /// URL path the application is mounted under (overrides config).
    #[arg(short, long)]
    base_path: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Loaded document set with its lookup registry.
pub(crate) struct Workspace {
    pub config: Config,
    pub schemas: Vec<Schema>,
    pub registry: LookupRegistry,
}

impl SchemaArgs {
    /// Load configuration and every configured schema document.
    pub(crate) fn load(&self, output: &Output) -> Result<Workspace, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.schema_dir.clone(),
            base_path: self.base_path.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(config_path = ?config.config_path, "Configuration loaded");

        let source = FsSchemaSource::new(config.schemas_resolved.source_dir.clone());
        let targets = if config.schemas_resolved.targets.is_empty() {
            source.discover()?
        } else {
            config.schemas_resolved.targets.clone()
        };

        let schemas = load_schemas(&source, &targets)?;
        let registry = LookupRegistry::from_schemas(&schemas)?;

        if self.verbose {
            output.info(&format!(
                "Loaded {} schema documents from {}",
                schemas.len(),
                source.source_dir().display()
            ));
        }

        Ok(Workspace {
            config,
            schemas,
            registry,
        })
    }
}
