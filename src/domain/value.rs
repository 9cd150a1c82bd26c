use std::path::{Path, PathBuf};

use serde::Serialize;
use url::Url;

use crate::domain::validation::{ConfigurationError, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Termii API key from the dashboard.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Payload field name used by Termii (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConfigurationError::EmptyCredential { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender ID the outbound message appears to originate from.
///
/// Invariant: non-empty after trimming. The value must be approved on your
/// Termii account before the API accepts it.
pub struct SenderId(String);

impl SenderId {
    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConfigurationError::EmptyCredential { field: "sender_id" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Base endpoint URL from the Termii dashboard (e.g. `https://api.ng.termii.com`).
///
/// Invariants: no trailing slash, parseable, and usable as a base for path
/// segments. Checked once here so URL assembly downstream cannot fail.
pub struct Endpoint(Url);

impl Endpoint {
    /// Create a validated [`Endpoint`].
    pub fn new(value: impl AsRef<str>) -> Result<Self, ConfigurationError> {
        let raw = value.as_ref().trim();
        if raw.is_empty() {
            return Err(ConfigurationError::EmptyCredential {
                field: "endpoint_url",
            });
        }
        if raw.ends_with('/') {
            return Err(ConfigurationError::TrailingSlash {
                url: raw.to_owned(),
            });
        }
        let url = Url::parse(raw).map_err(|source| ConfigurationError::InvalidEndpointUrl {
            url: raw.to_owned(),
            source,
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigurationError::CannotBeABase {
                url: raw.to_owned(),
            });
        }
        Ok(Self(url))
    }

    /// Build a URL under this endpoint from literal path segments.
    pub(crate) fn url_with(&self, segments: &[&str]) -> Url {
        let mut url = self.0.clone();
        // Cannot fail: cannot-be-a-base URLs are rejected at construction.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// The validated endpoint URL as a string (without trailing slash).
    pub fn as_str(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Phonebook display name.
///
/// Invariant: one or more ASCII letters or digits, nothing else.
pub struct PhonebookName(String);

impl PhonebookName {
    /// Payload field name used by Termii (`phonebook_name`).
    pub const FIELD: &'static str = "phonebook_name";

    /// Create a validated [`PhonebookName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidPhonebookName { name: value });
        }
        Ok(Self(value))
    }

    /// Borrow the validated name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// File extensions accepted for bulk contact upload.
pub const CONTACT_FILE_EXTENSIONS: [&str; 3] = ["txt", "xlsx", "csv"];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Path to a contact list for bulk upload.
///
/// Invariant: the extension is one of `txt`, `xlsx`, or `csv`
/// (case-insensitive). The file itself is only read at send time.
pub struct ContactFile(PathBuf);

impl ContactFile {
    /// Multipart field name used by Termii (`contact_file`).
    pub const FIELD: &'static str = "contact_file";

    /// Create a validated [`ContactFile`].
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ValidationError> {
        let path = path.into();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension {
            Some(ext) if CONTACT_FILE_EXTENSIONS.contains(&ext.as_str()) => Ok(Self(path)),
            _ => Err(ValidationError::UnsupportedContactFile {
                path: path.display().to_string(),
            }),
        }
    }

    /// The validated path.
    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Number of times a PIN may be attempted before it expires (`pin_attempts`).
///
/// Invariant: at least 1.
pub struct PinAttempts(u32);

impl PinAttempts {
    /// Minimum allowed number of attempts.
    pub const MIN: u32 = 1;

    /// Create a validated [`PinAttempts`].
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value < Self::MIN {
            return Err(ValidationError::PinAttemptsTooLow { actual: value });
        }
        Ok(Self(value))
    }

    /// Get the underlying attempt count.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for PinAttempts {
    fn default() -> Self {
        Self(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How long a PIN stays valid, in minutes (`pin_time_to_live`).
///
/// Invariant: `0..=60`.
pub struct PinTimeToLive(u32);

impl PinTimeToLive {
    /// Minimum allowed TTL in minutes.
    pub const MIN: u32 = 0;
    /// Maximum allowed TTL in minutes.
    pub const MAX: u32 = 60;

    /// Create a validated [`PinTimeToLive`].
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value > Self::MAX {
            return Err(ValidationError::PinTimeToLiveOutOfRange { actual: value });
        }
        Ok(Self(value))
    }

    /// Get the underlying TTL in minutes.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for PinTimeToLive {
    fn default() -> Self {
        Self(15)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Length of a generated PIN code (`pin_length`).
///
/// Invariant: `4..=8`.
pub struct PinLength(u32);

impl PinLength {
    /// Minimum allowed PIN length.
    pub const MIN: u32 = 4;
    /// Maximum allowed PIN length.
    pub const MAX: u32 = 8;

    /// Create a validated [`PinLength`].
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::PinLengthOutOfRange { actual: value });
        }
        Ok(Self(value))
    }

    /// Get the underlying length.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for PinLength {
    fn default() -> Self {
        Self(4)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Route through which a message or OTP is delivered.
pub enum MessagingChannel {
    #[default]
    Generic,
    Dnd,
    Whatsapp,
    Email,
}

impl MessagingChannel {
    /// Wire value used in payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Dnd => "dnd",
            Self::Whatsapp => "whatsapp",
            Self::Email => "email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Kind of one-time password generated by the token APIs.
pub enum TokenType {
    Numeric,
    Alphanumeric,
}

impl TokenType {
    /// Wire value used in payloads (`NUMERIC` / `ALPHANUMERIC`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "NUMERIC",
            Self::Alphanumeric => "ALPHANUMERIC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Governs the recipient-count ceiling and the send URL.
pub enum MessageDistributionType {
    #[default]
    Simple,
    Bulk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Campaign dispatch strategy (`campaign_type`).
pub enum CampaignType {
    #[default]
    Bulk,
    Personalized,
}

impl CampaignType {
    /// Wire value used in payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bulk => "bulk",
            Self::Personalized => "personalized",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
/// Media attached to a whatsapp message.
pub struct MediaAttachment {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl MediaAttachment {
    /// Attachment with no caption.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            caption: None,
        }
    }

    /// Attach a caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}
