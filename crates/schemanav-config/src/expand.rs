//! Environment variable expansion for the routing base path.
//!
//! `${VAR}` expands to the value of VAR and fails if it is unset.
//! `${VAR:-default}` falls back to `default`. A bare `$` is left alone, since
//! it can legitimately appear in a URL path.

use std::borrow::Cow;
use std::env::{self, VarError};

use crate::ConfigError;

/// Field name reported in expansion errors.
const BASE_PATH_FIELD: &str = "routing.base_path";

/// Expand `${}` references in a configured base path.
pub(crate) fn expand_base_path(raw: &str) -> Result<String, ConfigError> {
    if !raw.contains("${") {
        return Ok(raw.to_owned());
    }

    shellexpand::env_with_context(raw, |name| env::var(name).map(Some))
        .map(Cow::into_owned)
        .map_err(|e| {
            let reason = match e.cause {
                VarError::NotPresent => "not set",
                VarError::NotUnicode(_) => "is not valid unicode",
            };
            ConfigError::EnvVar {
                field: BASE_PATH_FIELD.to_owned(),
                message: format!("${{{}}} {reason}", e.var_name),
            }
        })
}
