//! Error types for lambda-deploy.

use derive_more::Display;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("session failed: {0}")]
    Session(String),

    #[error("archive failed: {0}")]
    Archive(String),

    #[error("cannot read artifact {}: {source}", path.display())]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("function update failed ({kind}): {message}")]
    Upload { kind: UploadFailure, message: String },
}

/// Broad class of a rejected function update.
///
/// Every kind is fatal; the class only sharpens the log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum UploadFailure {
    #[display("function not found")]
    NotFound,
    #[display("payload too large")]
    PayloadTooLarge,
    #[display("throttled")]
    Throttled,
    #[display("permission denied")]
    PermissionDenied,
    #[display("other")]
    Other,
}

pub type Result<T> = std::result::Result<T, Error>;
