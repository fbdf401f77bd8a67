//! Local deployment artifact.
//!
//! An [`Artifact`] owns the zip file on disk for the length of one run. The
//! file is removed when the value is dropped, whichever way the run ends.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use sha2::{Digest, Sha256};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::{Error, Result};

/// A zip file on local disk that is deleted on drop.
#[derive(Debug)]
pub struct Artifact {
    path: PathBuf,
}

impl Artifact {
    /// Take ownership of a file that has just been created at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole artifact into memory.
    pub fn read(&self) -> Result<Bytes> {
        std::fs::read(&self.path)
            .map(Bytes::from)
            .map_err(|source| Error::ArtifactRead {
                path: self.path.clone(),
                source,
            })
    }
}

impl Drop for Artifact {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "Removed artifact"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "Failed to remove artifact"),
        }
    }
}

/// Base64 SHA-256 of a payload, in the form Lambda reports as `CodeSha256`.
pub fn code_sha256(payload: &[u8]) -> String {
    STANDARD.encode(Sha256::digest(payload))
}
