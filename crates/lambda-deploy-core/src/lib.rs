//! Core domain types and traits for lambda-deploy.
//!
//! This crate contains:
//! - The resolved function configuration
//! - The local artifact and its cleanup guard
//! - Deployer trait and function-update types
//! - The error taxonomy shared by the pipeline stages

pub mod artifact;
pub mod deployer;
pub mod error;
pub mod function;

pub use artifact::Artifact;
pub use error::{Error, Result, UploadFailure};
pub use function::FunctionConfig;
