use crate::utils::error::{HandlerError, Result};
use url::Url;

/// Longest secret name Secrets Manager accepts.
pub const MAX_SECRET_NAME_LEN: usize = 512;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> HandlerError {
    HandlerError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_aws_region(field_name: &str, region: &str) -> Result<()> {
    validate_non_empty_string(field_name, region)?;

    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(invalid(
            field_name,
            region,
            "AWS region can only contain lowercase letters, numbers, and hyphens",
        ));
    }

    Ok(())
}

/// Accepts either a full secret ARN or a plain secret name.
pub fn validate_secret_id(field_name: &str, secret_id: &str) -> Result<()> {
    validate_non_empty_string(field_name, secret_id)?;

    if secret_id.starts_with("arn:") {
        validate_secret_arn(field_name, secret_id)
    } else {
        validate_secret_name(field_name, secret_id)
    }
}

// arn:<partition>:secretsmanager:<region>:<account>:secret:<name>
fn validate_secret_arn(field_name: &str, arn: &str) -> Result<()> {
    let parts: Vec<&str> = arn.splitn(7, ':').collect();
    if parts.len() != 7 {
        return Err(invalid(
            field_name,
            arn,
            "ARN must have the form arn:<partition>:secretsmanager:<region>:<account>:secret:<name>",
        ));
    }

    if parts[1].is_empty() {
        return Err(invalid(field_name, arn, "ARN partition is empty"));
    }
    if parts[2] != "secretsmanager" {
        return Err(invalid(
            field_name,
            arn,
            format!("ARN service must be secretsmanager, got '{}'", parts[2]),
        ));
    }
    validate_aws_region(field_name, parts[3])?;
    if parts[4].len() != 12 || !parts[4].chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(
            field_name,
            arn,
            "ARN account id must be 12 digits",
        ));
    }
    if parts[5] != "secret" {
        return Err(invalid(
            field_name,
            arn,
            "ARN resource type must be secret",
        ));
    }
    validate_secret_name(field_name, parts[6])
}

fn validate_secret_name(field_name: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(invalid(field_name, name, "Secret name cannot be empty"));
    }

    if name.chars().count() > MAX_SECRET_NAME_LEN {
        return Err(invalid(
            field_name,
            name,
            format!("Secret name cannot exceed {} characters", MAX_SECRET_NAME_LEN),
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "/_+=.@-".contains(c))
    {
        return Err(invalid(
            field_name,
            name,
            "Secret name can only contain letters, numbers, and /_+=.@-",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoint_url", "http://localhost:4566").is_ok());
        assert!(validate_url("endpoint_url", "https://secretsmanager.us-east-1.amazonaws.com").is_ok());
        assert!(validate_url("endpoint_url", "").is_err());
        assert!(validate_url("endpoint_url", "localhost:4566/x y").is_err());
        assert!(validate_url("endpoint_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_aws_region() {
        assert!(validate_aws_region("region", "ap-southeast-2").is_ok());
        assert!(validate_aws_region("region", "").is_err());
        assert!(validate_aws_region("region", "US_EAST_1").is_err());
    }

    #[test]
    fn test_validate_secret_id_accepts_names_and_arns() {
        assert!(validate_secret_id("secret_id", "prod/api-key").is_ok());
        assert!(validate_secret_id("secret_id", "my.secret@team+1=ok_").is_ok());
        assert!(validate_secret_id(
            "secret_id",
            "arn:aws:secretsmanager:us-east-1:123456789012:secret:prod/api-key-AbCdEf"
        )
        .is_ok());
        assert!(validate_secret_id(
            "secret_id",
            "arn:aws-cn:secretsmanager:cn-north-1:123456789012:secret:key"
        )
        .is_ok());
    }

    #[test]
    fn test_validate_secret_id_rejects_malformed() {
        assert!(validate_secret_id("secret_id", "").is_err());
        assert!(validate_secret_id("secret_id", "   ").is_err());
        assert!(validate_secret_id("secret_id", "has space").is_err());
        assert!(validate_secret_id("secret_id", &"a".repeat(MAX_SECRET_NAME_LEN + 1)).is_err());
        // wrong service
        assert!(validate_secret_id(
            "secret_id",
            "arn:aws:ssm:us-east-1:123456789012:secret:key"
        )
        .is_err());
        // short account id
        assert!(validate_secret_id(
            "secret_id",
            "arn:aws:secretsmanager:us-east-1:1234:secret:key"
        )
        .is_err());
        // missing name
        assert!(validate_secret_id(
            "secret_id",
            "arn:aws:secretsmanager:us-east-1:123456789012:secret:"
        )
        .is_err());
        assert!(validate_secret_id("secret_id", "arn:aws:secretsmanager").is_err());
    }
}
