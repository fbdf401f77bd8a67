//! `deploy.json` file format.
//!
//! Object keys match exactly when possible and otherwise case-insensitively,
//! so `"Dev"` selects the dev entry and `"LAMBDA_NAME"` fills the name.

use serde_json::{Map, Value};
use tracing::warn;

use crate::{ConfigResult, Environment};

const LAMBDA_NAME: &str = "Lambda_Name";
const LAMBDA_DIRECTORY: &str = "Lambda_Directory";
const REGION: &str = "Region";

/// Per-environment entries of a `deploy.json` file.
///
/// An environment missing from the file (or set to `null`) is an empty record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSet {
    pub dev: Option<EnvironmentRecord>,
    pub qa: Option<EnvironmentRecord>,
    pub prod: Option<EnvironmentRecord>,
}

/// One environment's entry, as written in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentRecord {
    pub lambda_name: Option<String>,
    /// Never used; the project root always comes from the caller.
    pub lambda_directory: Option<String>,
    pub region: Option<String>,
}

impl EnvironmentSet {
    /// Parse the text of a `deploy.json` file.
    pub fn parse(json: &str) -> ConfigResult<Self> {
        let root: Map<String, Value> = serde_json::from_str(json)?;

        Ok(Self {
            dev: parse_record(&root, Environment::Dev)?,
            qa: parse_record(&root, Environment::Qa)?,
            prod: parse_record(&root, Environment::Prod)?,
        })
    }

    /// Record for a known environment.
    pub fn get(&self, env: Environment) -> EnvironmentRecord {
        let record = match env {
            Environment::Dev => &self.dev,
            Environment::Qa => &self.qa,
            Environment::Prod => &self.prod,
        };
        record.clone().unwrap_or_default()
    }

    /// Record for a lowercase environment key.
    ///
    /// Keys other than `dev`, `qa` and `prod` select an empty record.
    pub fn select(&self, key: &str) -> EnvironmentRecord {
        match Environment::from_key(key) {
            Some(env) => self.get(env),
            None => {
                warn!(env = %key, "Unknown environment, using an empty configuration");
                EnvironmentRecord::default()
            }
        }
    }
}

fn parse_record(
    root: &Map<String, Value>,
    env: Environment,
) -> ConfigResult<Option<EnvironmentRecord>> {
    let Some(value) = lookup(root, &env.to_string()) else {
        return Ok(None);
    };
    let fields: Option<Map<String, Value>> = serde_json::from_value(value.clone())?;
    let Some(fields) = fields else {
        return Ok(None);
    };

    Ok(Some(EnvironmentRecord {
        lambda_name: parse_field(&fields, LAMBDA_NAME)?,
        lambda_directory: parse_field(&fields, LAMBDA_DIRECTORY)?,
        region: parse_field(&fields, REGION)?,
    }))
}

fn parse_field(fields: &Map<String, Value>, key: &str) -> ConfigResult<Option<String>> {
    match lookup(fields, key) {
        Some(value) => Ok(serde_json::from_value(value.clone())?),
        None => Ok(None),
    }
}

/// Value for `key`, preferring an exact key over a case-insensitive one.
fn lookup<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).or_else(|| {
        object
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
            .map(|(_, value)| value)
    })
}
