//! Domain layer: validated value types and request invariants (no I/O).

mod credentials;
mod request;
mod validation;
mod value;

pub use credentials::{API_KEY_VAR, Credentials, ENDPOINT_URL_VAR, SENDER_ID_VAR};
pub use request::{
    AddContact, BULK_MAX_RECIPIENTS, CampaignOptions, ContactOptions, EmailToken, InAppToken,
    MessageOptions, Method, MultipartUpload, NumberMessage, PinOptions, RequestDescriptor,
    SIMPLE_MAX_RECIPIENTS, SendCampaign, SendMessage, SendToken, SendVoiceToken, SenderIdRequest,
    TokenOptions, VerifyToken, VoiceCall,
};
pub use validation::{ConfigurationError, ValidationError};
pub use value::{
    ApiKey, CONTACT_FILE_EXTENSIONS, CampaignType, ContactFile, Endpoint, MediaAttachment,
    MessageDistributionType, MessagingChannel, PhonebookName, PinAttempts, PinLength,
    PinTimeToLive, SenderId, TokenType,
};
