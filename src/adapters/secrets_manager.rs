use crate::config::{env_override, HandlerConfig, ENDPOINT_URL_VAR, REGION_VAR};
use crate::domain::model::SecretValue;
use crate::domain::ports::SecretStore;
use crate::utils::error::{HandlerError, Result};
use aws_config::BehaviorVersion;
use aws_sdk_secretsmanager::config::Region;
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use aws_sdk_secretsmanager::Client as SecretsManagerClient;

const ACCESS_DENIED_CODE: &str = "AccessDeniedException";

#[derive(Debug, Clone)]
pub struct SecretsManagerStore {
    client: SecretsManagerClient,
}

impl SecretsManagerStore {
    pub fn new(client: SecretsManagerClient) -> Self {
        Self { client }
    }

    /// Loads the shared AWS config, applying the region and endpoint overrides.
    pub async fn connect(region: Option<String>, endpoint_url: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        if let Some(endpoint_url) = endpoint_url {
            tracing::info!(endpoint_url = %endpoint_url, "Using custom Secrets Manager endpoint");
            loader = loader.endpoint_url(endpoint_url);
        }

        let shared_config = loader.load().await;
        Self::new(SecretsManagerClient::new(&shared_config))
    }

    pub async fn for_config(config: &HandlerConfig) -> Self {
        Self::connect(config.region.clone(), config.endpoint_url.clone()).await
    }

    /// Region and endpoint overrides from `SECRET_REGION` / `SECRET_ENDPOINT_URL`.
    pub async fn from_env() -> Self {
        Self::connect(env_override(REGION_VAR), env_override(ENDPOINT_URL_VAR)).await
    }
}

impl SecretStore for SecretsManagerStore {
    async fn get_secret(&self, secret_id: &str, version_stage: Option<&str>) -> Result<SecretValue> {
        tracing::debug!(secret_id, ?version_stage, "Calling GetSecretValue");

        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .set_version_stage(version_stage.map(str::to_string))
            .send()
            .await
            .map_err(|e| map_sdk_error(secret_id, e))?;

        let secret = output
            .secret_string()
            .ok_or_else(|| HandlerError::SecretNotString {
                secret_id: secret_id.to_string(),
            })?;

        Ok(SecretValue::new(secret).with_metadata(
            output.arn().map(str::to_string),
            output.name().map(str::to_string),
            output.version_id().map(str::to_string),
        ))
    }
}

fn map_sdk_error<R: std::fmt::Debug>(
    secret_id: &str,
    err: SdkError<GetSecretValueError, R>,
) -> HandlerError {
    let secret_id = secret_id.to_string();

    let service_err = match err {
        SdkError::ServiceError(service_err) => service_err.into_err(),
        other => {
            return HandlerError::SecretRetrievalError {
                secret_id,
                message: format!("{}", DisplayErrorContext(other)),
            }
        }
    };

    let message = service_err
        .message()
        .unwrap_or("no message from service")
        .to_string();

    match service_err {
        GetSecretValueError::ResourceNotFoundException(_) => HandlerError::SecretNotFound { secret_id },
        err if err.code() == Some(ACCESS_DENIED_CODE) => HandlerError::AccessDenied { secret_id, message },
        err => HandlerError::SecretRetrievalError {
            secret_id,
            message: format!("{}: {}", err.code().unwrap_or("Unknown"), message),
        },
    }
}
