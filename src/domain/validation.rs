use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Missing or malformed credentials.
///
/// Raised only while building a [`Credentials`](crate::domain::Credentials)
/// value; once one exists, every operation is fully authenticated.
pub enum ConfigurationError {
    MissingEnvironmentVariable { name: &'static str },
    EmptyCredential { field: &'static str },
    TrailingSlash { url: String },
    InvalidEndpointUrl { url: String, source: url::ParseError },
    CannotBeABase { url: String },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEnvironmentVariable { name } => {
                write!(f, "{name} is not present in the environment.")
            }
            Self::EmptyCredential { field } => write!(f, "{field} must not be empty"),
            Self::TrailingSlash { url } => {
                write!(f, "endpoint URL must not end with a trailing slash: {url}")
            }
            Self::InvalidEndpointUrl { url, source } => {
                write!(f, "invalid endpoint URL {url:?}: {source}")
            }
            Self::CannotBeABase { url } => {
                write!(f, "endpoint URL cannot be used as a base: {url}")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEndpointUrl { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An input was rejected before any network call was attempted.
pub enum ValidationError {
    PinAttemptsTooLow { actual: u32 },
    PinTimeToLiveOutOfRange { actual: u32 },
    PinLengthOutOfRange { actual: u32 },
    PlaceholderNotInMessage { placeholder: String },
    InvalidPhonebookName { name: String },
    UnsupportedContactFile { path: String },
    NoRecipients,
    TooManyRecipients { limit: usize, actual: usize },
    MediaNotAllowed { channel: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PinAttemptsTooLow { actual } => {
                write!(f, "pin attempts must be at least 1 (got {actual})")
            }
            Self::PinTimeToLiveOutOfRange { actual } => {
                write!(f, "pin time-to-live out of range: {actual} (expected 0..=60)")
            }
            Self::PinLengthOutOfRange { actual } => {
                write!(f, "pin length out of range: {actual} (expected 4..=8)")
            }
            Self::PlaceholderNotInMessage { placeholder } => {
                write!(
                    f,
                    "pin placeholder {placeholder:?} does not appear in the message text"
                )
            }
            Self::InvalidPhonebookName { name } => {
                write!(
                    f,
                    "phonebook name must contain only ASCII letters and digits: {name:?}"
                )
            }
            Self::UnsupportedContactFile { path } => {
                write!(
                    f,
                    "unsupported contact file extension: {path:?} (expected txt, xlsx, or csv)"
                )
            }
            Self::NoRecipients => write!(f, "recipient list must not be empty"),
            Self::TooManyRecipients { limit, actual } => {
                write!(f, "too many recipients: {actual} (must be fewer than {limit})")
            }
            Self::MediaNotAllowed { channel } => {
                write!(
                    f,
                    "media attachments are only allowed on the whatsapp channel (got {channel})"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::{ConfigurationError, ValidationError};

    #[test]
    fn configuration_messages_are_human_readable() {
        let err = ConfigurationError::MissingEnvironmentVariable {
            name: "TERMII_API_KEY",
        };
        assert_eq!(
            err.to_string(),
            "TERMII_API_KEY is not present in the environment."
        );

        let err = ConfigurationError::TrailingSlash {
            url: "https://api.ng.termii.com/".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "endpoint URL must not end with a trailing slash: https://api.ng.termii.com/"
        );

        let err = ConfigurationError::EmptyCredential { field: "api_key" };
        assert_eq!(err.to_string(), "api_key must not be empty");
    }

    #[test]
    fn validation_messages_are_human_readable() {
        let err = ValidationError::PinAttemptsTooLow { actual: 0 };
        assert_eq!(err.to_string(), "pin attempts must be at least 1 (got 0)");

        let err = ValidationError::PinTimeToLiveOutOfRange { actual: 70 };
        assert_eq!(
            err.to_string(),
            "pin time-to-live out of range: 70 (expected 0..=60)"
        );

        let err = ValidationError::TooManyRecipients {
            limit: 100,
            actual: 150,
        };
        assert_eq!(
            err.to_string(),
            "too many recipients: 150 (must be fewer than 100)"
        );

        let err = ValidationError::MediaNotAllowed { channel: "generic" };
        assert_eq!(
            err.to_string(),
            "media attachments are only allowed on the whatsapp channel (got generic)"
        );
    }
}
