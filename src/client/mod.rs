//! Client layer: dispatches built requests over HTTP and returns raw JSON.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::domain::{
    AddContact, ConfigurationError, ContactFile, Credentials, EmailToken, InAppToken, Method,
    MultipartUpload, NumberMessage, PhonebookName, RequestDescriptor, SendCampaign, SendMessage,
    SendToken, SendVoiceToken, SenderIdRequest, ValidationError, VerifyToken, VoiceCall,
};
use crate::transport;

type BoxError = Box<dyn StdError + Send + Sync>;
type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

trait HttpTransport: Send + Sync {
    fn send<'a>(&'a self, request: &'a RequestDescriptor) -> BoxFuture<'a, Result<String, BoxError>>;

    fn upload<'a>(&'a self, upload: &'a MultipartUpload) -> BoxFuture<'a, Result<String, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: &'a RequestDescriptor,
    ) -> BoxFuture<'a, Result<String, BoxError>> {
        Box::pin(async move {
            let url = request.url.clone();
            let mut builder = match request.method {
                Method::Get => self.client.get(url),
                Method::Post => self.client.post(url),
                Method::Patch => self.client.patch(url),
                Method::Delete => self.client.delete(url),
            };
            if let Some(payload) = &request.payload {
                builder = builder.json(payload);
            }
            let response = builder.send().await?;
            Ok(response.text().await?)
        })
    }

    fn upload<'a>(
        &'a self,
        upload: &'a MultipartUpload,
    ) -> BoxFuture<'a, Result<String, BoxError>> {
        Box::pin(async move {
            let contents = std::fs::read(&upload.file_path)?;
            let file_name = upload
                .file_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            let mut form = reqwest::multipart::Form::new();
            for (name, value) in &upload.fields {
                form = form.text(*name, value.clone());
            }
            form = form.part(
                upload.file_field,
                reqwest::multipart::Part::bytes(contents).file_name(file_name),
            );

            let response = self
                .client
                .post(upload.url.clone())
                .multipart(form)
                .send()
                .await?;
            Ok(response.text().await?)
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TermiiClient`].
///
/// Configuration and validation failures happen before any network call;
/// transport faults pass through from the HTTP client unmodified. The client
/// never interprets HTTP status codes.
pub enum TermiiError {
    /// Missing or malformed credentials.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// An input was rejected before the request was assembled.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, unreadable upload file).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Response body was not valid JSON.
    #[error("invalid JSON response: {0}")]
    Parse(#[source] serde_json::Error),
}

#[derive(Debug, Clone)]
/// Builder for [`TermiiClient`].
///
/// Use this when you need to customize the HTTP timeout or user-agent.
pub struct TermiiClientBuilder {
    credentials: Credentials,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TermiiClientBuilder {
    /// Create a builder with no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            timeout: None,
            user_agent: None,
        }
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TermiiClient`].
    pub fn build(self) -> Result<TermiiClient, TermiiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| TermiiError::Transport(Box::new(err)))?;

        Ok(TermiiClient {
            credentials: self.credentials,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Termii API client.
///
/// Holds one immutable, fully validated [`Credentials`] value; every call
/// builds a fresh request from it, dispatches a single HTTP round trip, and
/// returns the decoded response body as raw [`serde_json::Value`] without
/// reshaping it.
pub struct TermiiClient {
    credentials: Credentials,
    http: Arc<dyn HttpTransport>,
}

impl TermiiClient {
    /// Create a client from already validated credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Create a client from `TERMII_API_KEY`, `TERMII_ENDPOINT_URL`, and
    /// `TERMII_SENDER_ID`.
    pub fn from_env() -> Result<Self, TermiiError> {
        Ok(Self::new(Credentials::from_env()?))
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> TermiiClientBuilder {
        TermiiClientBuilder::new(credentials)
    }

    /// The credentials this client was built with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    async fn dispatch(&self, request: RequestDescriptor) -> Result<Value, TermiiError> {
        let body = self
            .http
            .send(&request)
            .await
            .map_err(TermiiError::Transport)?;
        serde_json::from_str(&body).map_err(TermiiError::Parse)
    }

    /// List saved phonebooks, one page at a time (pages start at 1).
    pub async fn get_phonebooks(&self, page: u32) -> Result<Value, TermiiError> {
        self.dispatch(transport::fetch_phonebooks(&self.credentials, page))
            .await
    }

    /// Create a phonebook.
    pub async fn create_phonebook(
        &self,
        name: &PhonebookName,
        description: &str,
    ) -> Result<Value, TermiiError> {
        self.dispatch(transport::create_phonebook(
            &self.credentials,
            name,
            description,
        ))
        .await
    }

    /// Rename or re-describe an existing phonebook.
    pub async fn update_phonebook(
        &self,
        phonebook_id: &str,
        name: &PhonebookName,
        description: &str,
    ) -> Result<Value, TermiiError> {
        self.dispatch(transport::update_phonebook(
            &self.credentials,
            phonebook_id,
            name,
            description,
        ))
        .await
    }

    /// Delete a phonebook.
    pub async fn delete_phonebook(&self, phonebook_id: &str) -> Result<Value, TermiiError> {
        self.dispatch(transport::delete_phonebook(&self.credentials, phonebook_id))
            .await
    }

    /// List the contacts of a phonebook, one page at a time.
    pub async fn get_contacts(
        &self,
        phonebook_id: &str,
        page: u32,
    ) -> Result<Value, TermiiError> {
        self.dispatch(transport::fetch_contacts(
            &self.credentials,
            phonebook_id,
            page,
        ))
        .await
    }

    /// Add a single contact to a phonebook.
    pub async fn add_contact(&self, contact: &AddContact) -> Result<Value, TermiiError> {
        self.dispatch(transport::add_contact(&self.credentials, contact))
            .await
    }

    /// Upload a contact list file (`txt`/`xlsx`/`csv`) into a phonebook.
    ///
    /// This posts multipart form data instead of JSON; the file is read at
    /// send time and a read failure surfaces as [`TermiiError::Transport`].
    pub async fn add_contacts(
        &self,
        phonebook_id: &str,
        file: &ContactFile,
        country_code: &str,
    ) -> Result<Value, TermiiError> {
        let upload = transport::add_contacts(&self.credentials, phonebook_id, file, country_code);
        let body = self
            .http
            .upload(&upload)
            .await
            .map_err(TermiiError::Transport)?;
        serde_json::from_str(&body).map_err(TermiiError::Parse)
    }

    /// Remove a contact.
    pub async fn delete_contact(&self, contact_id: &str) -> Result<Value, TermiiError> {
        self.dispatch(transport::delete_contact(&self.credentials, contact_id))
            .await
    }

    /// Send a campaign to an entire phonebook, immediately or scheduled.
    pub async fn send_campaign(&self, campaign: &SendCampaign) -> Result<Value, TermiiError> {
        self.dispatch(transport::send_campaign(&self.credentials, campaign))
            .await
    }

    /// List previously sent campaigns, one page at a time.
    pub async fn get_campaigns(&self, page: u32) -> Result<Value, TermiiError> {
        self.dispatch(transport::fetch_campaigns(&self.credentials, page))
            .await
    }

    /// Delivery history of a single campaign, one page at a time.
    pub async fn get_campaign_history(
        &self,
        campaign_id: &str,
        page: u32,
    ) -> Result<Value, TermiiError> {
        self.dispatch(transport::fetch_campaign_history(
            &self.credentials,
            campaign_id,
            page,
        ))
        .await
    }

    /// List sender ids registered on the account, one page at a time.
    pub async fn fetch_sender_ids(&self, page: u32) -> Result<Value, TermiiError> {
        self.dispatch(transport::fetch_sender_ids(&self.credentials, page))
            .await
    }

    /// Apply for a new sender id.
    ///
    /// Runs against the key and endpoint carried by the request itself, not
    /// this client's stored credentials.
    pub async fn request_sender_id(
        &self,
        request: &SenderIdRequest,
    ) -> Result<Value, TermiiError> {
        self.dispatch(transport::request_sender_id(request)).await
    }

    /// Send a message to up to 99 (simple) or 9999 (bulk) recipients.
    pub async fn send_message(&self, message: &SendMessage) -> Result<Value, TermiiError> {
        self.dispatch(transport::send_message(&self.credentials, message))
            .await
    }

    /// Send a message from a Termii autogenerated number.
    pub async fn send_message_from_autogenerated_number(
        &self,
        message: &NumberMessage,
    ) -> Result<Value, TermiiError> {
        self.dispatch(transport::send_number_message(&self.credentials, message))
            .await
    }

    /// Trigger a one-time password on any available channel.
    pub async fn send_token(&self, token: &SendToken) -> Result<Value, TermiiError> {
        self.dispatch(transport::send_token(&self.credentials, token))
            .await
    }

    /// Trigger a one-time password delivered as a voice call.
    pub async fn send_voice_token(&self, token: &SendVoiceToken) -> Result<Value, TermiiError> {
        self.dispatch(transport::send_voice_token(&self.credentials, token))
            .await
    }

    /// Read a caller-supplied numeric code out over a voice call.
    pub async fn voice_call(&self, call: &VoiceCall) -> Result<Value, TermiiError> {
        self.dispatch(transport::voice_call(&self.credentials, call))
            .await
    }

    /// Send a caller-supplied one-time password to an email address.
    pub async fn email_token(&self, token: &EmailToken) -> Result<Value, TermiiError> {
        self.dispatch(transport::email_token(&self.credentials, token))
            .await
    }

    /// Check a previously sent one-time password.
    pub async fn verify_token(&self, verify: &VerifyToken) -> Result<Value, TermiiError> {
        self.dispatch(transport::verify_token(&self.credentials, verify))
            .await
    }

    /// Generate a one-time password for in-app display.
    pub async fn in_app_token(&self, token: &InAppToken) -> Result<Value, TermiiError> {
        self.dispatch(transport::in_app_token(&self.credentials, token))
            .await
    }
}
