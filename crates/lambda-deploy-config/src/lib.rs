//! deploy.json parsing for lambda-deploy.
//!
//! This crate handles:
//! - Parsing the per-environment `deploy.json` file
//! - Selecting an environment by key
//! - Resolving the final function configuration (region default, directory override)

pub mod deploy_file;
pub mod environment;
pub mod error;
pub mod resolver;

pub use deploy_file::{EnvironmentRecord, EnvironmentSet};
pub use environment::Environment;
pub use error::{ConfigError, ConfigResult};
pub use resolver::{CONFIG_FILE_NAME, DEFAULT_REGION, config_path, resolve_config};
