//! Deployment stages for lambda-deploy.
//!
//! Provides:
//! - Session: region-scoped AWS credentials and SDK config
//! - Archive: zip packaging of a function's `src` tree
//! - Lambda: the `FunctionDeployer` backed by AWS Lambda
//! - Publish: upload of an artifact as a new function version

pub mod archive;
pub mod lambda;
pub mod publish;
pub mod session;

pub use archive::{archive_function, archive_function_into};
pub use lambda::LambdaDeployer;
pub use lambda_deploy_core::deployer::{FunctionDeployer, PublishedVersion, UpdateFunctionCode};
pub use publish::publish;
pub use session::{Session, build_session};
