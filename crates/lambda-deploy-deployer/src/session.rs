//! Region-scoped AWS session.

use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_lambda::config::Region;
use lambda_deploy_core::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info};

// Regex for AWS region identifiers like us-west-2, us-gov-east-1 or eusc-de-east-1
static REGION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]{2,}(-[a-z]+)+-[0-9]+$").expect("region pattern is valid")
});

/// Authenticated client context for one region.
#[derive(Debug, Clone)]
pub struct Session {
    config: SdkConfig,
}

impl Session {
    pub fn sdk_config(&self) -> &SdkConfig {
        &self.config
    }
}

/// Check that `region` looks like an AWS region identifier.
pub fn validate_region(region: &str) -> Result<()> {
    if REGION_PATTERN.is_match(region) {
        Ok(())
    } else {
        Err(Error::Session(format!("malformed region '{}'", region)))
    }
}

/// Build a session for `region` from the ambient credential chain.
///
/// Credentials are resolved here once so that a missing profile or expired
/// token fails before any archive is written.
pub async fn build_session(region: &str) -> Result<Session> {
    validate_region(region)?;

    info!(region = %region, "Building AWS session");
    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await;

    let provider = config
        .credentials_provider()
        .ok_or_else(|| Error::Session("no credentials provider configured".to_string()))?;
    provider
        .provide_credentials()
        .await
        .map_err(|e| Error::Session(format!("cannot resolve credentials: {}", e)))?;
    debug!(region = %region, "Credentials resolved");

    Ok(Session { config })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_region_accepts_known_shapes() {
        for region in [
            "us-west-2",
            "us-east-1",
            "eu-central-1",
            "ap-southeast-2",
            "us-gov-west-1",
            "cn-northwest-1",
            "il-central-1",
            "mx-central-1",
            "us-isob-east-1",
            "eusc-de-east-1",
        ] {
            assert!(validate_region(region).is_ok(), "{region}");
        }
    }

    #[test]
    fn test_validate_region_rejects_malformed() {
        for region in ["", "us-west", "US-WEST-2", "uswest2", "us west 2", "-us-west-2"] {
            let err = validate_region(region).unwrap_err();
            assert!(matches!(err, Error::Session(_)), "{region}");
        }
    }

    #[tokio::test]
    async fn test_build_session_rejects_malformed_region_before_loading() {
        let err = build_session("not a region").await.unwrap_err();
        assert!(matches!(err, Error::Session(_)));
    }
}
