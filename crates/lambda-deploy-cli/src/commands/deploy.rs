//! Deploy command: resolve, connect, archive, publish.

use anyhow::{Context, Result};
use lambda_deploy_config::resolve_config;
use lambda_deploy_core::deployer::FunctionDeployer;
use lambda_deploy_deployer::{
    LambdaDeployer, PublishedVersion, archive_function, build_session, publish,
};
use std::future::Future;
use tracing::info;

/// Deploy the project in `directory` to the Lambda function configured for `env`.
pub async fn deploy(directory: &str, env: &str) -> Result<PublishedVersion> {
    deploy_with(directory, env, connect_lambda).await
}

async fn connect_lambda(region: String) -> lambda_deploy_core::Result<LambdaDeployer> {
    let session = build_session(&region).await?;
    Ok(LambdaDeployer::new(&session))
}

/// Run the deploy pipeline with `connect` producing the deployer for a region.
///
/// The artifact is written to the working directory and is gone again when
/// this returns, on success and on every error after archiving.
pub async fn deploy_with<D, F, Fut>(
    directory: &str,
    env: &str,
    connect: F,
) -> Result<PublishedVersion>
where
    D: FunctionDeployer,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = lambda_deploy_core::Result<D>>,
{
    let config = resolve_config(directory, env)
        .with_context(|| format!("Failed to resolve config for environment '{}'", env))?;
    info!(function = %config.name, region = %config.region, env = %env, "Deploying function");

    let deployer = connect(config.region.clone())
        .await
        .with_context(|| format!("Failed to create AWS session in {}", config.region))?;

    let artifact = archive_function(&config).context("Failed to create zip")?;

    let published = publish(&deployer, &config, artifact)
        .await
        .with_context(|| format!("Failed to push code to '{}'", config.name))?;

    Ok(published)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lambda_deploy_core::deployer::UpdateFunctionCode;
    use lambda_deploy_core::{Error, UploadFailure};
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    struct StubDeployer {
        reject: bool,
        artifact: PathBuf,
        events: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl FunctionDeployer for StubDeployer {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn update_function_code(
            &self,
            request: UpdateFunctionCode,
        ) -> lambda_deploy_core::Result<PublishedVersion> {
            self.events
                .lock()
                .unwrap()
                .push(format!("upload zip={}", self.artifact.exists()));
            if self.reject {
                return Err(Error::Upload {
                    kind: UploadFailure::PermissionDenied,
                    message: "denied".to_string(),
                });
            }
            Ok(PublishedVersion {
                function_name: request.function_name,
                version: Some("1".to_string()),
                code_size: request.zip_file.len() as i64,
                ..Default::default()
            })
        }
    }

    /// A project whose function name is unique to the calling test, so
    /// artifacts written to the working directory never collide.
    fn project(name: &str, region: &str, with_src: bool) -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        fs::write(
            root.path().join("deploy.json"),
            format!(r#"{{"dev":{{"Lambda_Name":"{}","Region":"{}"}}}}"#, name, region),
        )
        .unwrap();
        if with_src {
            fs::create_dir(root.path().join("src")).unwrap();
            fs::write(root.path().join("src/index.js"), "exports.handler = () => 1;").unwrap();
        }
        root
    }

    fn dir_arg(dir: &tempfile::TempDir) -> String {
        dir.path().to_str().unwrap().to_string()
    }

    async fn run_with_stub(
        dir: &tempfile::TempDir,
        name: &str,
        reject: bool,
    ) -> (Result<PublishedVersion>, Vec<String>) {
        let artifact = PathBuf::from(format!("{}.zip", name));
        let events = Arc::new(Mutex::new(Vec::new()));
        let connect_events = events.clone();

        let result = deploy_with(&dir_arg(dir), "DEV", move |region| async move {
            connect_events.lock().unwrap().push(format!(
                "connect {} zip={}",
                region,
                artifact.exists()
            ));
            Ok::<_, Error>(StubDeployer {
                reject,
                artifact,
                events: connect_events,
            })
        })
        .await;

        let events = events.lock().unwrap().clone();
        (result, events)
    }

    #[tokio::test]
    async fn test_deploy_success_connects_before_archiving_and_cleans_up() {
        let name = "deploy-cmd-success-fn";
        let dir = project(name, "", true);

        let (result, events) = run_with_stub(&dir, name, false).await;

        let published = result.unwrap();
        assert_eq!(published.function_name, name);
        assert_eq!(
            events,
            vec!["connect us-west-2 zip=false", "upload zip=true"]
        );
        assert!(!Path::new(&format!("{}.zip", name)).exists());
    }

    #[tokio::test]
    async fn test_deploy_upload_failure_cleans_up() {
        let name = "deploy-cmd-rejected-fn";
        let dir = project(name, "eu-west-1", true);

        let (result, events) = run_with_stub(&dir, name, true).await;

        assert!(result.is_err());
        assert_eq!(events.last().map(String::as_str), Some("upload zip=true"));
        assert!(!Path::new(&format!("{}.zip", name)).exists());
    }

    #[tokio::test]
    async fn test_deploy_missing_src_fails_without_artifact() {
        let name = "deploy-cmd-missing-src-fn";
        let dir = project(name, "", false);

        let (result, events) = run_with_stub(&dir, name, false).await;

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to create zip"));
        assert_eq!(events, vec!["connect us-west-2 zip=false"]);
        assert!(!Path::new(&format!("{}.zip", name)).exists());
    }

    #[tokio::test]
    async fn test_deploy_missing_config_fails_without_artifact() {
        let dir = tempfile::tempdir().unwrap();

        let err = deploy(&dir_arg(&dir), "dev").await.unwrap_err();

        assert!(format!("{:#}", err).contains("Failed to resolve config"));
        assert!(!Path::new(".zip").exists());
    }

    #[tokio::test]
    async fn test_deploy_malformed_region_fails_before_archiving() {
        let name = "deploy-cmd-bad-region-fn";
        let dir = project(name, "moon-base", true);

        let err = deploy(&dir_arg(&dir), "dev").await.unwrap_err();

        assert!(format!("{:#}", err).contains("Failed to create AWS session"));
        assert!(!Path::new(&format!("{}.zip", name)).exists());
    }
}
