use crate::domain::model::SecretValue;
use crate::utils::error::Result;

/// Source of secret values, keyed by ARN or name.
pub trait SecretStore: Send + Sync {
    fn get_secret(
        &self,
        secret_id: &str,
        version_stage: Option<&str>,
    ) -> impl std::future::Future<Output = Result<SecretValue>> + Send;
}
