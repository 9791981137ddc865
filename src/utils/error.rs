use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Secret not found: {secret_id}")]
    SecretNotFound { secret_id: String },

    #[error("Access denied to secret {secret_id}: {message}")]
    AccessDenied { secret_id: String, message: String },

    #[error("Failed to retrieve secret {secret_id}: {message}")]
    SecretRetrievalError { secret_id: String, message: String },

    #[error("Secret {secret_id} has no string value")]
    SecretNotString { secret_id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl HandlerError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            HandlerError::MissingConfigError { field } => {
                format!("{} is not set", field)
            }
            HandlerError::InvalidConfigValueError { field, reason, .. } => {
                format!("{} is invalid: {}", field, reason)
            }
            HandlerError::SecretNotFound { secret_id } => {
                format!("The secret '{}' does not exist", secret_id)
            }
            HandlerError::AccessDenied { secret_id, .. } => {
                format!("Not allowed to read the secret '{}'", secret_id)
            }
            HandlerError::SecretRetrievalError { secret_id, .. } => {
                format!("Could not read the secret '{}'", secret_id)
            }
            HandlerError::SecretNotString { secret_id } => {
                format!("The secret '{}' is stored as binary, not text", secret_id)
            }
            HandlerError::IoError(e) => format!("Could not read input: {}", e),
            HandlerError::SerializationError(e) => format!("The event is not valid JSON: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HandlerError::MissingConfigError { .. } => {
                "Set SECRET_API_KEY_ARN to the ARN or name of the secret"
            }
            HandlerError::InvalidConfigValueError { .. } => {
                "Check the configured secret id, region and endpoint URL"
            }
            HandlerError::SecretNotFound { .. } => {
                "Check that the secret exists in the configured region and account"
            }
            HandlerError::AccessDenied { .. } => {
                "Grant secretsmanager:GetSecretValue on the secret to the execution role"
            }
            HandlerError::SecretRetrievalError { .. } => {
                "Check the secret's state, KMS key permissions and network access"
            }
            HandlerError::SecretNotString { .. } => "Store the secret value as a SecretString",
            HandlerError::IoError(_) => "Check the event file path",
            HandlerError::SerializationError(_) => "Pass a JSON document as the event",
        }
    }
}

pub type Result<T> = std::result::Result<T, HandlerError>;
