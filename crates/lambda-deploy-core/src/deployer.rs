//! Deployer trait and function-update types.
//!
//! Deployers push new code to a remote function service (Lambda today).

use async_trait::async_trait;
use bytes::Bytes;

use crate::Result;

/// Request to replace a function's code with a zip payload.
#[derive(Debug, Clone)]
pub struct UpdateFunctionCode {
    /// Name of the remote function.
    pub function_name: String,
    /// Zip archive contents.
    pub zip_file: Bytes,
    /// Whether to publish a new version from the uploaded code.
    pub publish: bool,
}

/// What the remote service reports after accepting new code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishedVersion {
    pub function_name: String,
    pub function_arn: Option<String>,
    /// Version number assigned by the publish, `$LATEST` when not published.
    pub version: Option<String>,
    /// Base64 SHA-256 of the stored code.
    pub code_sha256: Option<String>,
    /// Size of the stored code in bytes.
    pub code_size: i64,
}

/// Trait for function deployers.
#[async_trait]
pub trait FunctionDeployer: Send + Sync {
    /// Name of this deployer.
    fn name(&self) -> &'static str;

    /// Upload new code for a function.
    async fn update_function_code(&self, request: UpdateFunctionCode) -> Result<PublishedVersion>;
}
