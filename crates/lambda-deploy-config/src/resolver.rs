//! Resolution of a function configuration from a project directory.

use lambda_deploy_core::FunctionConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{ConfigError, ConfigResult, EnvironmentSet};

/// Name of the per-project configuration file.
pub const CONFIG_FILE_NAME: &str = "deploy.json";

/// Region used when an environment does not set one.
pub const DEFAULT_REGION: &str = "us-west-2";

/// Location of the configuration file for a project directory.
pub fn config_path(directory: &Path) -> PathBuf {
    directory.join(CONFIG_FILE_NAME)
}

/// Read `<directory>/deploy.json` and resolve the configuration for `env`.
///
/// The environment key is matched case-insensitively. An empty region falls
/// back to [`DEFAULT_REGION`], and the directory of the result is always
/// `directory` itself, whatever the file says.
pub fn resolve_config(directory: impl AsRef<Path>, env: &str) -> ConfigResult<FunctionConfig> {
    let directory = directory.as_ref();
    if directory.as_os_str().is_empty() {
        return Err(ConfigError::MissingField("directory".to_string()));
    }
    if env.is_empty() {
        return Err(ConfigError::MissingField("environment".to_string()));
    }

    let path = config_path(directory);
    info!(path = %path.display(), "Reading config");
    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;

    let set = EnvironmentSet::parse(&content)?;
    let record = set.select(&env.to_lowercase());

    let region = match record.region {
        Some(region) if !region.is_empty() => region,
        _ => DEFAULT_REGION.to_string(),
    };

    let config = FunctionConfig {
        name: record.lambda_name.unwrap_or_default(),
        directory: directory.to_path_buf(),
        region,
    };
    debug!(function = %config.name, region = %config.region, "Resolved config");
    Ok(config)
}
