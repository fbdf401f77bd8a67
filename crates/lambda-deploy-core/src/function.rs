//! Resolved function configuration.

use std::path::{Path, PathBuf};

/// Subdirectory of the project root that gets archived.
pub const SOURCE_DIR: &str = "src";

/// Everything the pipeline needs to know about one deploy target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionConfig {
    /// Remote function name.
    pub name: String,
    /// Project root as given on the command line.
    pub directory: PathBuf,
    /// AWS region the function lives in.
    pub region: String,
}

impl FunctionConfig {
    /// Directory whose contents become the artifact.
    pub fn source_dir(&self) -> PathBuf {
        self.directory.join(SOURCE_DIR)
    }

    /// File name of the local artifact, `<name>.zip`.
    pub fn artifact_file_name(&self) -> String {
        format!("{}.zip", self.name)
    }

    /// Path of the artifact when written into `out_dir`.
    pub fn artifact_path_in(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(self.artifact_file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FunctionConfig {
        FunctionConfig {
            name: "my-fn".to_string(),
            directory: PathBuf::from("myfn"),
            region: "us-west-2".to_string(),
        }
    }

    #[test]
    fn test_source_dir_is_src_under_directory() {
        assert_eq!(config().source_dir(), PathBuf::from("myfn").join("src"));
    }

    #[test]
    fn test_artifact_file_name() {
        assert_eq!(config().artifact_file_name(), "my-fn.zip");
        assert_eq!(
            config().artifact_path_in(Path::new("out")),
            PathBuf::from("out").join("my-fn.zip")
        );
    }
}
