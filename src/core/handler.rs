use crate::config::HandlerConfig;
use crate::domain::ports::SecretStore;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use lambda_runtime::LambdaEvent;
use serde_json::Value;

/// Fetches the configured secret, then logs the triggering event.
///
/// Errors are returned as-is so the caller can fail the invocation. The secret
/// value is dropped once fetched and never logged.
pub async fn handle_event<S: SecretStore>(
    config: &HandlerConfig,
    store: &S,
    event: LambdaEvent<Value>,
) -> Result<()> {
    let LambdaEvent { payload, context } = event;

    let secret = store
        .get_secret(&config.secret_id, config.version_stage.as_deref())
        .await?;
    tracing::info!(
        request_id = %context.request_id,
        secret_id = %config.secret_id,
        version_id = secret.version_id.as_deref().unwrap_or("-"),
        "Retrieved secret"
    );

    tracing::info!(request_id = %context.request_id, event = %payload, "Received event");

    Ok(())
}

/// Lambda entry point. The environment is read on every invocation, so a
/// missing `SECRET_API_KEY_ARN` fails that invocation rather than the cold start.
pub async fn function_handler<S: SecretStore>(
    event: LambdaEvent<Value>,
    store: &S,
) -> std::result::Result<(), lambda_runtime::Error> {
    let config = HandlerConfig::from_env()?;
    config.validate()?;

    handle_event(&config, store, event).await?;
    Ok(())
}
