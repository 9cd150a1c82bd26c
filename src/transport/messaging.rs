use serde_json::{Map, json};

use crate::domain::{
    ApiKey, Credentials, MessageDistributionType, NumberMessage, RequestDescriptor, SendMessage,
};

pub fn send_message(credentials: &Credentials, message: &SendMessage) -> RequestDescriptor {
    let url = match message.options().distribution {
        MessageDistributionType::Simple => credentials.endpoint().url_with(&["api", "sms", "send"]),
        MessageDistributionType::Bulk => credentials
            .endpoint()
            .url_with(&["api", "sms", "send", "bulk"]),
    };

    let mut payload = Map::new();
    payload.insert(ApiKey::FIELD.to_owned(), json!(credentials.api_key().as_str()));
    payload.insert("to".to_owned(), json!(message.receivers()));
    payload.insert("from".to_owned(), json!(credentials.sender_id().as_str()));
    payload.insert("sms".to_owned(), json!(message.text()));
    payload.insert("type".to_owned(), json!("plain"));
    payload.insert(
        "channel".to_owned(),
        json!(message.options().channel.as_str()),
    );
    if let Some(media) = &message.options().media {
        payload.insert("media".to_owned(), json!(media));
    }

    RequestDescriptor::post(url, payload)
}

pub fn send_number_message(
    credentials: &Credentials,
    message: &NumberMessage,
) -> RequestDescriptor {
    let url = credentials
        .endpoint()
        .url_with(&["api", "sms", "number", "send"]);

    let mut payload = Map::new();
    payload.insert(ApiKey::FIELD.to_owned(), json!(credentials.api_key().as_str()));
    payload.insert("to".to_owned(), json!(message.receivers()));
    payload.insert("sms".to_owned(), json!(message.text()));

    RequestDescriptor::post(url, payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MediaAttachment, MessageOptions, MessagingChannel, Method};

    fn credentials() -> Credentials {
        Credentials::new("test123", "https://api.ng.termii.com", "test").unwrap()
    }

    #[test]
    fn simple_send_targets_the_plain_send_path() {
        let message = SendMessage::new(
            vec!["23490126727".to_owned(), "23490126728".to_owned()],
            "Hello all. Thanks for visiting.",
            MessageOptions::default(),
        )
        .unwrap();

        let request = send_message(&credentials(), &message);
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url.as_str(), "https://api.ng.termii.com/api/sms/send");

        let payload = request.payload.unwrap();
        assert_eq!(payload["api_key"], "test123");
        assert_eq!(payload["to"], json!(["23490126727", "23490126728"]));
        assert_eq!(payload["from"], "test");
        assert_eq!(payload["sms"], "Hello all. Thanks for visiting.");
        assert_eq!(payload["type"], "plain");
        assert_eq!(payload["channel"], "generic");
        assert!(!payload.contains_key("media"));
    }

    #[test]
    fn bulk_send_targets_the_bulk_path() {
        let message = SendMessage::new(
            vec!["23490126727".to_owned()],
            "hi",
            MessageOptions {
                distribution: MessageDistributionType::Bulk,
                ..Default::default()
            },
        )
        .unwrap();

        let request = send_message(&credentials(), &message);
        assert_eq!(
            request.url.as_str(),
            "https://api.ng.termii.com/api/sms/send/bulk"
        );
    }

    #[test]
    fn whatsapp_media_is_nested_with_optional_caption() {
        let message = SendMessage::new(
            vec!["23490126727".to_owned()],
            "hi",
            MessageOptions {
                channel: MessagingChannel::Whatsapp,
                media: Some(MediaAttachment::new("https://files.invalid/hello.jpeg")),
                ..Default::default()
            },
        )
        .unwrap();

        let payload = send_message(&credentials(), &message).payload.unwrap();
        assert_eq!(payload["channel"], "whatsapp");
        assert_eq!(
            payload["media"],
            json!({ "url": "https://files.invalid/hello.jpeg" })
        );

        let message = SendMessage::new(
            vec!["23490126727".to_owned()],
            "hi",
            MessageOptions {
                channel: MessagingChannel::Whatsapp,
                media: Some(
                    MediaAttachment::new("https://files.invalid/hello.jpeg").with_caption("hello"),
                ),
                ..Default::default()
            },
        )
        .unwrap();

        let payload = send_message(&credentials(), &message).payload.unwrap();
        assert_eq!(
            payload["media"],
            json!({ "url": "https://files.invalid/hello.jpeg", "caption": "hello" })
        );
    }

    #[test]
    fn autogenerated_number_send_has_no_sender_id() {
        let message = NumberMessage::new(vec!["23490126727".to_owned()], "hi").unwrap();
        let request = send_number_message(&credentials(), &message);
        assert_eq!(
            request.url.as_str(),
            "https://api.ng.termii.com/api/sms/number/send"
        );

        let payload = request.payload.unwrap();
        assert_eq!(payload["api_key"], "test123");
        assert_eq!(payload["to"], json!(["23490126727"]));
        assert_eq!(payload["sms"], "hi");
        assert!(!payload.contains_key("from"));
    }
}
