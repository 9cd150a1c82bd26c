use serde_json::{Map, Value, json};

use crate::domain::{
    ApiKey, Credentials, EmailToken, InAppToken, PinOptions, RequestDescriptor, SendToken,
    SendVoiceToken, VerifyToken, VoiceCall,
};

pub fn send_token(credentials: &Credentials, token: &SendToken) -> RequestDescriptor {
    let url = credentials
        .endpoint()
        .url_with(&["api", "sms", "otp", "send"]);

    let options = token.options();
    let mut payload = Map::new();
    payload.insert(ApiKey::FIELD.to_owned(), json!(credentials.api_key().as_str()));
    payload.insert(
        "message_type".to_owned(),
        json!(token.message_type().as_str()),
    );
    payload.insert("to".to_owned(), json!(token.receiver()));
    payload.insert("from".to_owned(), json!(credentials.sender_id().as_str()));
    payload.insert("channel".to_owned(), json!(options.channel.as_str()));
    push_pin_options(&mut payload, &options.pin);
    payload.insert(
        "pin_placeholder".to_owned(),
        json!(options.pin_placeholder),
    );
    payload.insert("message_text".to_owned(), json!(options.message_text));
    // The service expects the token type twice, under both names.
    payload.insert("pin_type".to_owned(), json!(token.message_type().as_str()));

    RequestDescriptor::post(url, payload)
}

pub fn send_voice_token(credentials: &Credentials, token: &SendVoiceToken) -> RequestDescriptor {
    let url = credentials
        .endpoint()
        .url_with(&["api", "sms", "otp", "send", "voice"]);

    let mut payload = Map::new();
    payload.insert(ApiKey::FIELD.to_owned(), json!(credentials.api_key().as_str()));
    payload.insert("phone_number".to_owned(), json!(token.phone_number));
    push_pin_options(&mut payload, &token.pin);

    RequestDescriptor::post(url, payload)
}

/// The upstream service routes raw voice calls through the OTP send path
/// rather than a dedicated one.
pub fn voice_call(credentials: &Credentials, call: &VoiceCall) -> RequestDescriptor {
    let url = credentials
        .endpoint()
        .url_with(&["api", "sms", "otp", "send"]);

    let mut payload = Map::new();
    payload.insert(ApiKey::FIELD.to_owned(), json!(credentials.api_key().as_str()));
    payload.insert("phone_number".to_owned(), json!(call.phone_number()));
    payload.insert("code".to_owned(), json!(call.code()));

    RequestDescriptor::post(url, payload)
}

pub fn email_token(credentials: &Credentials, token: &EmailToken) -> RequestDescriptor {
    let url = credentials
        .endpoint()
        .url_with(&["api", "email", "otp", "send"]);

    let mut payload = Map::new();
    payload.insert(ApiKey::FIELD.to_owned(), json!(credentials.api_key().as_str()));
    payload.insert("email_address".to_owned(), json!(token.email_address()));
    payload.insert("code".to_owned(), json!(token.code()));
    payload.insert(
        "email_configuration_id".to_owned(),
        json!(token.email_configuration_id()),
    );

    RequestDescriptor::post(url, payload)
}

pub fn verify_token(credentials: &Credentials, verify: &VerifyToken) -> RequestDescriptor {
    let url = credentials
        .endpoint()
        .url_with(&["api", "sms", "otp", "verify"]);

    let mut payload = Map::new();
    payload.insert(ApiKey::FIELD.to_owned(), json!(credentials.api_key().as_str()));
    payload.insert("pin_id".to_owned(), json!(verify.pin_id));
    payload.insert("pin".to_owned(), json!(verify.pin));

    RequestDescriptor::post(url, payload)
}

pub fn in_app_token(credentials: &Credentials, token: &InAppToken) -> RequestDescriptor {
    let url = credentials
        .endpoint()
        .url_with(&["api", "sms", "otp", "generate"]);

    let mut payload = Map::new();
    payload.insert(ApiKey::FIELD.to_owned(), json!(credentials.api_key().as_str()));
    push_pin_options(&mut payload, &token.pin);
    payload.insert("pin_type".to_owned(), json!(token.pin_type.as_str()));
    payload.insert("phone_number".to_owned(), json!(token.phone_number));

    RequestDescriptor::post(url, payload)
}

fn push_pin_options(payload: &mut Map<String, Value>, pin: &PinOptions) {
    payload.insert("pin_attempts".to_owned(), json!(pin.attempts.value()));
    payload.insert(
        "pin_time_to_live".to_owned(),
        json!(pin.time_to_live.value()),
    );
    payload.insert("pin_length".to_owned(), json!(pin.length.value()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Method, TokenOptions, TokenType};

    fn credentials() -> Credentials {
        Credentials::new("test123", "https://api.ng.termii.com", "test").unwrap()
    }

    #[test]
    fn send_token_carries_all_ten_otp_fields() {
        let token = SendToken::new(
            TokenType::Alphanumeric,
            "23490126727",
            TokenOptions::default(),
        )
        .unwrap();

        let request = send_token(&credentials(), &token);
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.url.as_str(),
            "https://api.ng.termii.com/api/sms/otp/send"
        );

        let payload = request.payload.unwrap();
        assert_eq!(payload["api_key"], "test123");
        assert_eq!(payload["message_type"], "ALPHANUMERIC");
        assert_eq!(payload["to"], "23490126727");
        assert_eq!(payload["from"], "test");
        assert_eq!(payload["channel"], "generic");
        assert_eq!(payload["pin_attempts"], 1);
        assert_eq!(payload["pin_time_to_live"], 15);
        assert_eq!(payload["pin_length"], 4);
        assert_eq!(payload["pin_placeholder"], "< 1234 >");
        assert_eq!(payload["message_text"], "Your pin is < 1234 >");
        assert_eq!(payload["pin_type"], "ALPHANUMERIC");
        assert_eq!(payload.len(), 11);
    }

    #[test]
    fn voice_token_has_its_own_path_and_slim_payload() {
        let token = SendVoiceToken::new("23490126727");
        let request = send_voice_token(&credentials(), &token);
        assert_eq!(
            request.url.as_str(),
            "https://api.ng.termii.com/api/sms/otp/send/voice"
        );

        let payload = request.payload.unwrap();
        assert_eq!(payload["phone_number"], "23490126727");
        assert_eq!(payload["pin_attempts"], 1);
        assert_eq!(payload["pin_time_to_live"], 15);
        assert_eq!(payload["pin_length"], 4);
        assert_eq!(payload.len(), 5);
    }

    #[test]
    fn voice_call_sends_the_literal_code_through_the_otp_path() {
        let call = VoiceCall::new("23490126727", 3344).unwrap();
        let request = voice_call(&credentials(), &call);
        assert_eq!(
            request.url.as_str(),
            "https://api.ng.termii.com/api/sms/otp/send"
        );

        let payload = request.payload.unwrap();
        assert_eq!(payload["phone_number"], "23490126727");
        assert_eq!(payload["code"], 3344);
        assert_eq!(payload.len(), 3);
    }

    #[test]
    fn email_token_targets_the_email_channel_path() {
        let token = EmailToken::new("shola@example.invalid", "195558", "cfg-1").unwrap();
        let request = email_token(&credentials(), &token);
        assert_eq!(
            request.url.as_str(),
            "https://api.ng.termii.com/api/email/otp/send"
        );

        let payload = request.payload.unwrap();
        assert_eq!(payload["email_address"], "shola@example.invalid");
        assert_eq!(payload["code"], "195558");
        assert_eq!(payload["email_configuration_id"], "cfg-1");
    }

    #[test]
    fn verify_token_posts_pin_id_and_pin() {
        let verify = VerifyToken::new("c8dcd048-5e7f-4347-8c89-4470c3af0b", "195558");
        let request = verify_token(&credentials(), &verify);
        assert_eq!(
            request.url.as_str(),
            "https://api.ng.termii.com/api/sms/otp/verify"
        );

        let payload = request.payload.unwrap();
        assert_eq!(payload["api_key"], "test123");
        assert_eq!(payload["pin_id"], "c8dcd048-5e7f-4347-8c89-4470c3af0b");
        assert_eq!(payload["pin"], "195558");
        assert_eq!(payload.len(), 3);
    }

    #[test]
    fn in_app_token_uses_the_generate_path() {
        let token = InAppToken::new(TokenType::Numeric, "23490126727");
        let request = in_app_token(&credentials(), &token);
        assert_eq!(
            request.url.as_str(),
            "https://api.ng.termii.com/api/sms/otp/generate"
        );

        let payload = request.payload.unwrap();
        assert_eq!(payload["pin_type"], "NUMERIC");
        assert_eq!(payload["phone_number"], "23490126727");
        assert_eq!(payload["pin_attempts"], 1);
    }
}
