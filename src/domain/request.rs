use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde_json::{Map, Value};
use url::Url;

use crate::domain::validation::{ConfigurationError, ValidationError};
use crate::domain::value::{
    ApiKey, CampaignType, Endpoint, MediaAttachment, MessageDistributionType, MessagingChannel,
    PinAttempts, PinLength, PinTimeToLive, TokenType,
};

/// Exclusive recipient ceiling for a simple send.
pub const SIMPLE_MAX_RECIPIENTS: usize = 100;
/// Exclusive recipient ceiling for a bulk send.
pub const BULK_MAX_RECIPIENTS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// HTTP verb carried by a [`RequestDescriptor`].
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
/// A fully assembled API request: target URL, verb, and optional JSON body.
///
/// Created fresh by an endpoint builder and consumed once by the dispatcher.
/// A payload is only ever attached to POST/PATCH requests.
pub struct RequestDescriptor {
    pub url: Url,
    pub method: Method,
    pub payload: Option<Map<String, Value>>,
}

impl RequestDescriptor {
    pub fn get(url: Url) -> Self {
        Self {
            url,
            method: Method::Get,
            payload: None,
        }
    }

    pub fn post(url: Url, payload: Map<String, Value>) -> Self {
        Self {
            url,
            method: Method::Post,
            payload: Some(payload),
        }
    }

    pub fn patch(url: Url, payload: Map<String, Value>) -> Self {
        Self {
            url,
            method: Method::Patch,
            payload: Some(payload),
        }
    }

    pub fn delete(url: Url) -> Self {
        Self {
            url,
            method: Method::Delete,
            payload: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Multipart form request for bulk contact upload.
///
/// This is the one path that bypasses the JSON dispatcher: the file is read
/// and streamed by the HTTP transport at send time.
pub struct MultipartUpload {
    pub url: Url,
    pub fields: Vec<(&'static str, String)>,
    pub file_field: &'static str,
    pub file_path: PathBuf,
}

#[derive(Debug, Clone, Default)]
/// Optional knobs for [`SendMessage`].
pub struct MessageOptions {
    pub channel: MessagingChannel,
    pub distribution: MessageDistributionType,
    pub media: Option<MediaAttachment>,
}

#[derive(Debug, Clone)]
/// A message to one or more recipients on a chosen channel.
///
/// Invariants: the recipient list is non-empty, below the ceiling for the
/// chosen distribution type, and media is only present on whatsapp.
pub struct SendMessage {
    receivers: Vec<String>,
    text: String,
    options: MessageOptions,
}

impl SendMessage {
    pub fn new(
        receivers: Vec<String>,
        text: impl Into<String>,
        options: MessageOptions,
    ) -> Result<Self, ValidationError> {
        check_recipient_count(&receivers, options.distribution)?;
        if options.media.is_some() && options.channel != MessagingChannel::Whatsapp {
            return Err(ValidationError::MediaNotAllowed {
                channel: options.channel.as_str(),
            });
        }
        Ok(Self {
            receivers,
            text: text.into(),
            options,
        })
    }

    pub fn receivers(&self) -> &[String] {
        &self.receivers
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &MessageOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// A message sent from a Termii autogenerated number.
pub struct NumberMessage {
    receivers: Vec<String>,
    text: String,
}

impl NumberMessage {
    pub fn new(receivers: Vec<String>, text: impl Into<String>) -> Result<Self, ValidationError> {
        check_recipient_count(&receivers, MessageDistributionType::Simple)?;
        Ok(Self {
            receivers,
            text: text.into(),
        })
    }

    pub fn receivers(&self) -> &[String] {
        &self.receivers
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

fn check_recipient_count(
    receivers: &[String],
    distribution: MessageDistributionType,
) -> Result<(), ValidationError> {
    if receivers.is_empty() {
        return Err(ValidationError::NoRecipients);
    }
    let limit = match distribution {
        MessageDistributionType::Simple => SIMPLE_MAX_RECIPIENTS,
        MessageDistributionType::Bulk => BULK_MAX_RECIPIENTS,
    };
    if receivers.len() >= limit {
        return Err(ValidationError::TooManyRecipients {
            limit,
            actual: receivers.len(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone)]
/// Optional knobs for [`SendCampaign`].
pub struct CampaignOptions {
    pub channel: MessagingChannel,
    pub campaign_type: CampaignType,
    pub remove_duplicate: bool,
    pub delimiter: Option<char>,
    pub schedule_time: Option<NaiveDateTime>,
}

impl Default for CampaignOptions {
    fn default() -> Self {
        Self {
            channel: MessagingChannel::default(),
            campaign_type: CampaignType::default(),
            remove_duplicate: true,
            delimiter: None,
            schedule_time: None,
        }
    }
}

#[derive(Debug, Clone)]
/// A campaign send to an entire phonebook.
pub struct SendCampaign {
    pub country_code: String,
    pub message: String,
    pub phonebook_id: String,
    pub options: CampaignOptions,
}

impl SendCampaign {
    pub fn new(
        country_code: impl Into<String>,
        message: impl Into<String>,
        phonebook_id: impl Into<String>,
    ) -> Self {
        Self {
            country_code: country_code.into(),
            message: message.into(),
            phonebook_id: phonebook_id.into(),
            options: CampaignOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Optional contact details for [`AddContact`].
pub struct ContactOptions {
    pub email_address: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
}

#[derive(Debug, Clone)]
/// A single contact added to a phonebook.
pub struct AddContact {
    pub phonebook_id: String,
    pub phone_number: String,
    pub country_code: String,
    pub options: ContactOptions,
}

impl AddContact {
    pub fn new(
        phonebook_id: impl Into<String>,
        phone_number: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            phonebook_id: phonebook_id.into(),
            phone_number: phone_number.into(),
            country_code: country_code.into(),
            options: ContactOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// PIN generation knobs shared by the token operations.
pub struct PinOptions {
    pub attempts: PinAttempts,
    pub time_to_live: PinTimeToLive,
    pub length: PinLength,
}

#[derive(Debug, Clone)]
/// Optional knobs for [`SendToken`].
pub struct TokenOptions {
    pub channel: MessagingChannel,
    pub pin: PinOptions,
    pub pin_placeholder: String,
    pub message_text: String,
}

impl Default for TokenOptions {
    fn default() -> Self {
        Self {
            channel: MessagingChannel::default(),
            pin: PinOptions::default(),
            pin_placeholder: "< 1234 >".to_owned(),
            message_text: "Your pin is < 1234 >".to_owned(),
        }
    }
}

#[derive(Debug, Clone)]
/// An OTP delivered over SMS, whatsapp, dnd, or email.
///
/// Invariant: the pin placeholder appears literally in the message text, so
/// the service has a substring to substitute the generated PIN into.
pub struct SendToken {
    message_type: TokenType,
    receiver: String,
    options: TokenOptions,
}

impl SendToken {
    pub fn new(
        message_type: TokenType,
        receiver: impl Into<String>,
        options: TokenOptions,
    ) -> Result<Self, ValidationError> {
        if !options.message_text.contains(&options.pin_placeholder) {
            return Err(ValidationError::PlaceholderNotInMessage {
                placeholder: options.pin_placeholder.clone(),
            });
        }
        Ok(Self {
            message_type,
            receiver: receiver.into(),
            options,
        })
    }

    pub fn message_type(&self) -> TokenType {
        self.message_type
    }

    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    pub fn options(&self) -> &TokenOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// An OTP delivered as a voice call, verifiable through the verify operation.
pub struct SendVoiceToken {
    pub phone_number: String,
    pub pin: PinOptions,
}

impl SendVoiceToken {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            pin: PinOptions::default(),
        }
    }
}

#[derive(Debug, Clone)]
/// A caller-supplied numeric code read out over a voice call.
///
/// Invariant: the code has 4 to 8 decimal digits. Being `u32` it is numeric
/// by construction.
pub struct VoiceCall {
    phone_number: String,
    code: u32,
}

impl VoiceCall {
    pub fn new(phone_number: impl Into<String>, code: u32) -> Result<Self, ValidationError> {
        let digits = code.to_string().len() as u32;
        PinLength::new(digits)?;
        Ok(Self {
            phone_number: phone_number.into(),
            code,
        })
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn code(&self) -> u32 {
        self.code
    }
}

#[derive(Debug, Clone)]
/// A caller-supplied OTP delivered to an email address.
///
/// Invariant: the code has 4 to 8 characters, mirroring the PIN length rule.
pub struct EmailToken {
    email_address: String,
    code: String,
    email_configuration_id: String,
}

impl EmailToken {
    pub fn new(
        email_address: impl Into<String>,
        code: impl Into<String>,
        email_configuration_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let code = code.into();
        PinLength::new(code.chars().count() as u32)?;
        Ok(Self {
            email_address: email_address.into(),
            code,
            email_configuration_id: email_configuration_id.into(),
        })
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn email_configuration_id(&self) -> &str {
        &self.email_configuration_id
    }
}

#[derive(Debug, Clone)]
/// Confirms or rejects a previously sent OTP.
pub struct VerifyToken {
    pub pin_id: String,
    pub pin: String,
}

impl VerifyToken {
    pub fn new(pin_id: impl Into<String>, pin: impl Into<String>) -> Self {
        Self {
            pin_id: pin_id.into(),
            pin: pin.into(),
        }
    }
}

#[derive(Debug, Clone)]
/// An OTP generated for in-app display rather than delivery.
pub struct InAppToken {
    pub pin_type: TokenType,
    pub phone_number: String,
    pub pin: PinOptions,
}

impl InAppToken {
    pub fn new(pin_type: TokenType, phone_number: impl Into<String>) -> Self {
        Self {
            pin_type,
            phone_number: phone_number.into(),
            pin: PinOptions::default(),
        }
    }
}

#[derive(Debug, Clone)]
/// Application for a new sender id.
///
/// The only operation that does not run against stored [`Credentials`]: the
/// key and endpoint are supplied explicitly per call.
///
/// [`Credentials`]: crate::domain::Credentials
pub struct SenderIdRequest {
    api_key: ApiKey,
    endpoint: Endpoint,
    sender_id: String,
    usecase: String,
    company: String,
}

impl SenderIdRequest {
    pub fn new(
        api_key: impl Into<String>,
        endpoint_url: impl AsRef<str>,
        sender_id: impl Into<String>,
        usecase: impl Into<String>,
        company: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            endpoint: Endpoint::new(endpoint_url)?,
            sender_id: sender_id.into(),
            usecase: usecase.into(),
            company: company.into(),
        })
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn sender_id(&self) -> &str {
        &self.sender_id
    }

    pub fn usecase(&self) -> &str {
        &self.usecase
    }

    pub fn company(&self) -> &str {
        &self.company
    }
}
