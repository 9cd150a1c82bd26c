use serde_json::{Map, json};

use crate::domain::{ApiKey, Credentials, RequestDescriptor, SenderIdRequest};

pub fn fetch_sender_ids(credentials: &Credentials, page: u32) -> RequestDescriptor {
    let mut url = credentials.endpoint().url_with(&["api", "sender-id"]);
    url.query_pairs_mut()
        .append_pair(ApiKey::FIELD, credentials.api_key().as_str())
        .append_pair("page", &page.to_string());
    RequestDescriptor::get(url)
}

/// Built from the request's own key and endpoint, not from stored
/// [`Credentials`]: requesting a sender id predates having a usable account
/// setup.
pub fn request_sender_id(request: &SenderIdRequest) -> RequestDescriptor {
    let url = request.endpoint().url_with(&["api", "sender-id", "request"]);

    let mut payload = Map::new();
    payload.insert(ApiKey::FIELD.to_owned(), json!(request.api_key().as_str()));
    payload.insert("sender_id".to_owned(), json!(request.sender_id()));
    payload.insert("usecase".to_owned(), json!(request.usecase()));
    payload.insert("company".to_owned(), json!(request.company()));

    RequestDescriptor::post(url, payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Method;

    #[test]
    fn fetch_is_a_paged_get() {
        let credentials = Credentials::new("test123", "https://api.ng.termii.com", "test").unwrap();
        let request = fetch_sender_ids(&credentials, 1);
        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.url.as_str(),
            "https://api.ng.termii.com/api/sender-id?api_key=test123&page=1"
        );
    }

    #[test]
    fn request_uses_the_explicit_key_and_endpoint() {
        let request = SenderIdRequest::new(
            "other_key",
            "https://api.ng.termii.com",
            "Acme",
            "transactional alerts",
            "Acme Corp",
        )
        .unwrap();

        let descriptor = request_sender_id(&request);
        assert_eq!(descriptor.method, Method::Post);
        assert_eq!(
            descriptor.url.as_str(),
            "https://api.ng.termii.com/api/sender-id/request"
        );

        let payload = descriptor.payload.unwrap();
        assert_eq!(payload["api_key"], "other_key");
        assert_eq!(payload["sender_id"], "Acme");
        assert_eq!(payload["usecase"], "transactional alerts");
        assert_eq!(payload["company"], "Acme Corp");
        assert_eq!(payload.len(), 4);
    }
}
