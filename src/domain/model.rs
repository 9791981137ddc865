use std::fmt;

/// A retrieved secret. `Debug` never prints the value itself.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretValue {
    pub arn: Option<String>,
    pub name: Option<String>,
    pub version_id: Option<String>,
    secret: String,
}

impl SecretValue {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            arn: None,
            name: None,
            version_id: None,
            secret: secret.into(),
        }
    }

    pub fn with_metadata(
        mut self,
        arn: Option<String>,
        name: Option<String>,
        version_id: Option<String>,
    ) -> Self {
        self.arn = arn;
        self.name = name;
        self.version_id = version_id;
        self
    }

    pub fn expose(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretValue")
            .field("arn", &self.arn)
            .field("name", &self.name)
            .field("version_id", &self.version_id)
            .field("secret", &"<redacted>")
            .finish()
    }
}
