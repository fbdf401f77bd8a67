//! Packaging of a function's source tree into a zip artifact.

use lambda_deploy_core::{Artifact, Error, FunctionConfig, Result};
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{self, Seek, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Zip `<directory>/src` into `<name>.zip` in the working directory.
pub fn archive_function(config: &FunctionConfig) -> Result<Artifact> {
    write_archive(&config.source_dir(), PathBuf::from(config.artifact_file_name()))
}

/// Zip `<directory>/src` into `<name>.zip` inside `out_dir`.
pub fn archive_function_into(config: &FunctionConfig, out_dir: &Path) -> Result<Artifact> {
    write_archive(&config.source_dir(), config.artifact_path_in(out_dir))
}

fn write_archive(source: &Path, dest: PathBuf) -> Result<Artifact> {
    if !source.is_dir() {
        return Err(Error::Archive(format!(
            "source directory {} does not exist",
            source.display()
        )));
    }

    info!(source = %source.display(), artifact = %dest.display(), "Archiving source directory");
    let file = File::create(&dest).map_err(|e| archive_error(&dest, e))?;
    // From here on a failure drops the guard and removes the partial file.
    let artifact = Artifact::new(dest);

    let mut zip = ZipWriter::new(file);
    let entries = add_dir(&mut zip, source, source)?;
    zip.finish().map_err(|e| archive_error(artifact.path(), e))?;

    info!(entries, artifact = %artifact.path().display(), "Directory added");
    Ok(artifact)
}

/// Add the contents of `dir` under names relative to `base`.
fn add_dir<W: Write + Seek>(zip: &mut ZipWriter<W>, dir: &Path, base: &Path) -> Result<usize> {
    let mut children = fs::read_dir(dir)
        .and_then(|entries| entries.collect::<io::Result<Vec<_>>>())
        .map_err(|e| archive_error(dir, e))?;
    children.sort_by_key(|entry| entry.file_name());

    let mut count = 0;
    for child in children {
        let path = child.path();
        let name = entry_name(&path, base)?;
        let metadata = fs::metadata(&path).map_err(|e| archive_error(&path, e))?;

        if metadata.is_dir() {
            debug!(entry = %name, "Adding directory");
            zip.add_directory(format!("{}/", name), file_options(&metadata))
                .map_err(|e| archive_error(&path, e))?;
            count += 1 + add_dir(zip, &path, base)?;
        } else {
            debug!(entry = %name, "Adding file");
            zip.start_file(name, file_options(&metadata))
                .map_err(|e| archive_error(&path, e))?;
            let mut source = File::open(&path).map_err(|e| archive_error(&path, e))?;
            io::copy(&mut source, zip).map_err(|e| archive_error(&path, e))?;
            count += 1;
        }
    }

    Ok(count)
}

/// Zip entry name for `path`: relative to `base`, `/`-separated.
fn entry_name(path: &Path, base: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(base)
        .map_err(|e| archive_error(path, e))?;

    let mut parts = Vec::new();
    for component in relative.components() {
        let part = component.as_os_str().to_str().ok_or_else(|| {
            Error::Archive(format!("path is not valid UTF-8: {}", path.display()))
        })?;
        parts.push(part);
    }
    Ok(parts.join("/"))
}

fn base_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

#[cfg(unix)]
fn file_options(metadata: &fs::Metadata) -> SimpleFileOptions {
    use std::os::unix::fs::PermissionsExt;
    base_options().unix_permissions(metadata.permissions().mode())
}

#[cfg(not(unix))]
fn file_options(_metadata: &fs::Metadata) -> SimpleFileOptions {
    base_options()
}

fn archive_error(path: &Path, e: impl Display) -> Error {
    Error::Archive(format!("{}: {}", path.display(), e))
}
