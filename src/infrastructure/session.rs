//! AWS session setup: resolve (profile, region) into an SSM client

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::provider::ProvideCredentials;
use tracing::debug;

use crate::infrastructure::error::SessionError;

/// Regions where SSM is available. The Rust SDK has no runtime region
/// catalogue, so an explicit region override is validated against this table.
const SSM_REGIONS: &[&str] = &[
    "af-south-1",
    "ap-east-1",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ap-southeast-5",
    "ca-central-1",
    "ca-west-1",
    "cn-north-1",
    "cn-northwest-1",
    "eu-central-1",
    "eu-central-2",
    "eu-north-1",
    "eu-south-1",
    "eu-south-2",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "il-central-1",
    "me-central-1",
    "me-south-1",
    "sa-east-1",
    "us-east-1",
    "us-east-2",
    "us-gov-east-1",
    "us-gov-west-1",
    "us-west-1",
    "us-west-2",
];

/// A resolved session: one client, used by exactly one handler invocation.
pub struct Session {
    pub client: aws_sdk_ssm::Client,
    /// Effective region after profile/environment resolution
    pub region: Option<String>,
}

/// Check a region override against the known SSM regions.
pub fn is_valid_region(region: &str) -> bool {
    SSM_REGIONS.contains(&region)
}

/// Build a session from an optional profile and an optional region override.
///
/// An unknown region and an unusable profile are both fatal configuration
/// errors. Credential resolution is lazy in the SDK, so when a profile is
/// named it is resolved once here to fail before any API call.
pub async fn connect(
    profile: Option<&str>,
    region: Option<&str>,
) -> Result<Session, SessionError> {
    if let Some(r) = region {
        if !is_valid_region(r) {
            return Err(SessionError::UnknownRegion(r.to_string()));
        }
    }

    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(p) = profile {
        loader = loader.profile_name(p);
    }
    if let Some(r) = region {
        loader = loader.region(Region::new(r.to_string()));
    }
    let config = loader.load().await;

    if let Some(p) = profile {
        let provider =
            config
                .credentials_provider()
                .ok_or_else(|| SessionError::Profile {
                    profile: p.to_string(),
                    reason: "no credentials provider configured".to_string(),
                })?;
        provider
            .provide_credentials()
            .await
            .map_err(|e| SessionError::Profile {
                profile: p.to_string(),
                reason: e.to_string(),
            })?;
    }

    let effective_region = config.region().map(|r| r.to_string());
    debug!("session region: {:?}", effective_region);

    Ok(Session {
        client: aws_sdk_ssm::Client::new(&config),
        region: effective_region,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_regions_are_accepted() {
        assert!(is_valid_region("eu-west-1"));
        assert!(is_valid_region("us-east-1"));
    }

    #[test]
    fn test_unknown_region_is_rejected() {
        assert!(!is_valid_region("eu-west-9"));
        assert!(!is_valid_region("mars-central-1"));
        assert!(!is_valid_region(""));
    }
}
