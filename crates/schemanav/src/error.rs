//! CLI error types.

use schemanav_config::ConfigError;
use schemanav_core::{LoadError, RegistryError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Registry(#[from] RegistryError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_output_write_failure_is_an_error() {
        let err = CliError::from(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"));

        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(err.to_string(), "stdout closed");
    }
}
