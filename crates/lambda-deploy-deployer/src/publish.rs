//! Upload of an artifact as a new published function version.

use lambda_deploy_core::artifact::code_sha256;
use lambda_deploy_core::deployer::{FunctionDeployer, PublishedVersion, UpdateFunctionCode};
use lambda_deploy_core::{Artifact, FunctionConfig, Result};
use tracing::{info, warn};

/// Upload `artifact` as the new code of the configured function.
///
/// The artifact is consumed: its file is gone when this returns, whether the
/// upload succeeded or not.
pub async fn publish<D>(
    deployer: &D,
    config: &FunctionConfig,
    artifact: Artifact,
) -> Result<PublishedVersion>
where
    D: FunctionDeployer + ?Sized,
{
    let payload = artifact.read()?;
    let local_sha256 = code_sha256(&payload);

    let request = UpdateFunctionCode {
        function_name: config.name.clone(),
        zip_file: payload,
        publish: true,
    };
    let result = deployer.update_function_code(request).await;
    drop(artifact);

    let published = result?;
    info!(
        deployer = deployer.name(),
        function = %published.function_name,
        version = published.version.as_deref().unwrap_or("unknown"),
        code_size = published.code_size,
        "Code pushed"
    );

    match published.code_sha256.as_deref() {
        Some(remote) if remote != local_sha256 => {
            warn!(local = %local_sha256, remote = %remote, "Remote code hash differs from artifact");
        }
        _ => {}
    }

    Ok(published)
}
