//! Deployment environments.

use derive_more::Display;

/// One of the fixed deployment targets in `deploy.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Environment {
    #[display("dev")]
    Dev,
    #[display("qa")]
    Qa,
    #[display("prod")]
    Prod,
}

impl Environment {
    pub const ALL: [Environment; 3] = [Environment::Dev, Environment::Qa, Environment::Prod];

    /// Look up an environment by its lowercase key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "dev" => Some(Self::Dev),
            "qa" => Some(Self::Qa),
            "prod" => Some(Self::Prod),
            _ => None,
        }
    }
}
