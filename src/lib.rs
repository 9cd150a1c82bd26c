//! Typed Rust client for the Termii messaging and OTP HTTP API.
//!
//! The design follows three layers: a domain layer of validated value types
//! and request invariants, a transport layer that builds one wire request per
//! API operation, and a small client layer that performs the HTTP round trip
//! and returns the raw JSON body.
//!
//! ```rust,no_run
//! use termii::{Credentials, MessageOptions, SendMessage, TermiiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), termii::TermiiError> {
//!     let credentials = Credentials::new("api-key", "https://api.ng.termii.com", "Acme")?;
//!     let client = TermiiClient::new(credentials);
//!     let message = SendMessage::new(
//!         vec!["23490126727".to_owned()],
//!         "Hello from Acme",
//!         MessageOptions::default(),
//!     )?;
//!     let _response = client.send_message(&message).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{TermiiClient, TermiiClientBuilder, TermiiError};
pub use domain::{
    AddContact, ApiKey, CampaignOptions, CampaignType, ConfigurationError, ContactFile,
    ContactOptions, Credentials, EmailToken, Endpoint, InAppToken, MediaAttachment,
    MessageDistributionType, MessageOptions, MessagingChannel, Method, NumberMessage,
    PhonebookName, PinAttempts, PinLength, PinOptions, PinTimeToLive, RequestDescriptor,
    SendCampaign, SendMessage, SendToken, SendVoiceToken, SenderId, SenderIdRequest, TokenOptions,
    TokenType, ValidationError, VerifyToken, VoiceCall,
};
