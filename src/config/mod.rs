#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{HandlerError, Result};
use crate::utils::validation::{validate_aws_region, validate_secret_id, validate_url, Validate};
use std::env;

pub const SECRET_ID_VAR: &str = "SECRET_API_KEY_ARN";
pub const VERSION_STAGE_VAR: &str = "SECRET_VERSION_STAGE";
pub const REGION_VAR: &str = "SECRET_REGION";
pub const ENDPOINT_URL_VAR: &str = "SECRET_ENDPOINT_URL";

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Reads an environment variable, treating an empty value as unset.
pub fn env_override(key: &str) -> Option<String> {
    non_empty(env::var(key).ok())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    /// ARN or name of the secret to read.
    pub secret_id: String,
    pub version_stage: Option<String>,
    /// Overrides the region from the SDK's default provider chain.
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

impl HandlerConfig {
    pub fn new(secret_id: impl Into<String>) -> Self {
        Self {
            secret_id: secret_id.into(),
            version_stage: None,
            region: None,
            endpoint_url: None,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| non_empty(lookup(key));

        let secret_id = optional(SECRET_ID_VAR).ok_or_else(|| HandlerError::MissingConfigError {
            field: SECRET_ID_VAR.to_string(),
        })?;

        Ok(Self {
            secret_id,
            version_stage: optional(VERSION_STAGE_VAR),
            region: optional(REGION_VAR),
            endpoint_url: optional(ENDPOINT_URL_VAR),
        })
    }
}

impl Validate for HandlerConfig {
    fn validate(&self) -> Result<()> {
        validate_secret_id(SECRET_ID_VAR, &self.secret_id)?;

        if let Some(region) = &self.region {
            validate_aws_region(REGION_VAR, region)?;
        }

        if let Some(endpoint_url) = &self.endpoint_url {
            validate_url(ENDPOINT_URL_VAR, endpoint_url)?;
        }

        tracing::debug!("Handler configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_reads_all_fields() {
        let config = HandlerConfig::from_lookup(lookup_from(&[
            (SECRET_ID_VAR, "prod/api-key"),
            (VERSION_STAGE_VAR, "AWSPREVIOUS"),
            (REGION_VAR, "eu-west-1"),
            (ENDPOINT_URL_VAR, "http://localhost:4566"),
        ]))
        .unwrap();

        assert_eq!(config.secret_id, "prod/api-key");
        assert_eq!(config.version_stage.as_deref(), Some("AWSPREVIOUS"));
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_requires_secret_id() {
        let err = HandlerConfig::from_lookup(lookup_from(&[(REGION_VAR, "eu-west-1")])).unwrap_err();
        match err {
            HandlerError::MissingConfigError { field } => assert_eq!(field, SECRET_ID_VAR),
            other => panic!("unexpected error: {:?}", other),
        }

        let err = HandlerConfig::from_lookup(lookup_from(&[(SECRET_ID_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, HandlerError::MissingConfigError { .. }));
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let config =
            HandlerConfig::from_lookup(lookup_from(&[(SECRET_ID_VAR, "key"), (REGION_VAR, "")]))
                .unwrap();
        assert_eq!(config, HandlerConfig::new("key"));
    }

    #[test]
    fn test_env_override_ignores_blank_values() {
        const KEY: &str = "SECRET_EVENT_LAMBDA_TEST_OVERRIDE";

        env::set_var(KEY, "   ");
        assert_eq!(env_override(KEY), None);

        env::set_var(KEY, "eu-central-1");
        assert_eq!(env_override(KEY).as_deref(), Some("eu-central-1"));

        env::remove_var(KEY);
        assert_eq!(env_override(KEY), None);
    }

    #[test]
    fn test_validate_rejects_bad_overrides() {
        let mut config = HandlerConfig::new("prod/api-key");
        config.region = Some("Not A Region".to_string());
        assert!(config.validate().is_err());

        let mut config = HandlerConfig::new("prod/api-key");
        config.endpoint_url = Some("ftp://localhost".to_string());
        assert!(config.validate().is_err());

        assert!(HandlerConfig::new("bad id!").validate().is_err());
    }
}
