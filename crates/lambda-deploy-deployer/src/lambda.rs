//! AWS Lambda deployer implementation.

use async_trait::async_trait;
use aws_sdk_lambda::Client;
use aws_sdk_lambda::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_lambda::primitives::Blob;
use lambda_deploy_core::deployer::{FunctionDeployer, PublishedVersion, UpdateFunctionCode};
use lambda_deploy_core::{Error, Result, UploadFailure};
use tracing::info;

use crate::session::Session;

/// Deployer that pushes code through the Lambda `UpdateFunctionCode` API.
pub struct LambdaDeployer {
    client: Client,
}

impl LambdaDeployer {
    pub fn new(session: &Session) -> Self {
        Self {
            client: Client::new(session.sdk_config()),
        }
    }
}

#[async_trait]
impl FunctionDeployer for LambdaDeployer {
    fn name(&self) -> &'static str {
        "lambda"
    }

    async fn update_function_code(&self, request: UpdateFunctionCode) -> Result<PublishedVersion> {
        info!(
            function = %request.function_name,
            bytes = request.zip_file.len(),
            publish = request.publish,
            "Attempting to push code"
        );

        let output = self
            .client
            .update_function_code()
            .function_name(&request.function_name)
            .zip_file(Blob::new(request.zip_file.to_vec()))
            .publish(request.publish)
            .send()
            .await
            .map_err(|e| Error::Upload {
                kind: classify_error_code(e.code()),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(PublishedVersion {
            function_name: output
                .function_name()
                .unwrap_or(&request.function_name)
                .to_string(),
            function_arn: output.function_arn().map(str::to_string),
            version: output.version().map(str::to_string),
            code_sha256: output.code_sha256().map(str::to_string),
            code_size: output.code_size(),
        })
    }
}

/// Map a Lambda error code onto a failure class.
pub fn classify_error_code(code: Option<&str>) -> UploadFailure {
    match code {
        Some("ResourceNotFoundException") => UploadFailure::NotFound,
        Some("RequestTooLargeException" | "CodeStorageExceededException") => {
            UploadFailure::PayloadTooLarge
        }
        Some("TooManyRequestsException" | "ThrottlingException") => UploadFailure::Throttled,
        Some(
            "AccessDeniedException"
            | "UnrecognizedClientException"
            | "InvalidSignatureException"
            | "ExpiredTokenException",
        ) => UploadFailure::PermissionDenied,
        _ => UploadFailure::Other,
    }
}
