use crate::domain::validation::ConfigurationError;
use crate::domain::value::{ApiKey, Endpoint, SenderId};

/// Environment variable holding the Termii API key.
pub const API_KEY_VAR: &str = "TERMII_API_KEY";
/// Environment variable holding the base endpoint URL.
pub const ENDPOINT_URL_VAR: &str = "TERMII_ENDPOINT_URL";
/// Environment variable holding the default sender id.
pub const SENDER_ID_VAR: &str = "TERMII_SENDER_ID";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fully populated Termii credentials.
///
/// A value of this type either exists with all three fields validated or was
/// never constructed; there is no partially authenticated state. Every
/// endpoint builder takes a `&Credentials`, so no request can be assembled
/// without one.
pub struct Credentials {
    api_key: ApiKey,
    endpoint: Endpoint,
    sender_id: SenderId,
}

impl Credentials {
    /// Build credentials from explicit values.
    pub fn new(
        api_key: impl Into<String>,
        endpoint_url: impl AsRef<str>,
        sender_id: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            endpoint: Endpoint::new(endpoint_url)?,
            sender_id: SenderId::new(sender_id)?,
        })
    }

    /// Read credentials from `TERMII_API_KEY`, `TERMII_ENDPOINT_URL`, and
    /// `TERMII_SENDER_ID`.
    ///
    /// Variables are checked in that order and the first missing one is named
    /// in the error.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Same as [`Credentials::from_env`] but with an injectable variable
    /// lookup. Tests use this to avoid mutating the process environment.
    pub fn from_env_with(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigurationError> {
        let api_key = lookup(API_KEY_VAR).ok_or(ConfigurationError::MissingEnvironmentVariable {
            name: API_KEY_VAR,
        })?;
        let endpoint_url =
            lookup(ENDPOINT_URL_VAR).ok_or(ConfigurationError::MissingEnvironmentVariable {
                name: ENDPOINT_URL_VAR,
            })?;
        let sender_id =
            lookup(SENDER_ID_VAR).ok_or(ConfigurationError::MissingEnvironmentVariable {
                name: SENDER_ID_VAR,
            })?;
        Self::new(api_key, endpoint_url, sender_id)
    }

    /// The validated API key.
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// The validated base endpoint.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// The validated default sender id.
    pub fn sender_id(&self) -> &SenderId {
        &self.sender_id
    }
}
