use serde_json::{Map, Value, json};

use crate::domain::{ApiKey, Credentials, PhonebookName, RequestDescriptor};

pub fn fetch_phonebooks(credentials: &Credentials, page: u32) -> RequestDescriptor {
    let mut url = credentials.endpoint().url_with(&["api", "phonebooks"]);
    url.query_pairs_mut()
        .append_pair(ApiKey::FIELD, credentials.api_key().as_str())
        .append_pair("page", &page.to_string());
    RequestDescriptor::get(url)
}

pub fn create_phonebook(
    credentials: &Credentials,
    name: &PhonebookName,
    description: &str,
) -> RequestDescriptor {
    let url = credentials.endpoint().url_with(&["api", "phonebooks"]);
    RequestDescriptor::post(url, phonebook_payload(credentials, name, description))
}

pub fn update_phonebook(
    credentials: &Credentials,
    phonebook_id: &str,
    name: &PhonebookName,
    description: &str,
) -> RequestDescriptor {
    let url = credentials
        .endpoint()
        .url_with(&["api", "phonebooks", phonebook_id]);
    RequestDescriptor::patch(url, phonebook_payload(credentials, name, description))
}

pub fn delete_phonebook(credentials: &Credentials, phonebook_id: &str) -> RequestDescriptor {
    let mut url = credentials
        .endpoint()
        .url_with(&["api", "phonebooks", phonebook_id]);
    url.query_pairs_mut()
        .append_pair(ApiKey::FIELD, credentials.api_key().as_str());
    RequestDescriptor::delete(url)
}

fn phonebook_payload(
    credentials: &Credentials,
    name: &PhonebookName,
    description: &str,
) -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert(ApiKey::FIELD.to_owned(), json!(credentials.api_key().as_str()));
    payload.insert(PhonebookName::FIELD.to_owned(), json!(name.as_str()));
    payload.insert("description".to_owned(), json!(description));
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Method;

    fn credentials() -> Credentials {
        Credentials::new("test123", "https://api.ng.termii.com", "test").unwrap()
    }

    #[test]
    fn fetch_builds_paged_get() {
        let request = fetch_phonebooks(&credentials(), 1);
        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.url.as_str(),
            "https://api.ng.termii.com/api/phonebooks?api_key=test123&page=1"
        );
        assert!(request.payload.is_none());
    }

    #[test]
    fn create_round_trips_name_and_description() {
        let name = PhonebookName::new("Test").unwrap();
        let request = create_phonebook(&credentials(), &name, "D");
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.url.as_str(),
            "https://api.ng.termii.com/api/phonebooks"
        );

        let payload = request.payload.unwrap();
        assert_eq!(payload["api_key"], "test123");
        assert_eq!(payload["phonebook_name"], "Test");
        assert_eq!(payload["description"], "D");
        assert_eq!(payload.len(), 3);
    }

    #[test]
    fn update_targets_the_phonebook_and_uses_patch() {
        let name = PhonebookName::new("Renamed").unwrap();
        let request = update_phonebook(&credentials(), "pb-1", &name, "new description");
        assert_eq!(request.method, Method::Patch);
        assert_eq!(
            request.url.as_str(),
            "https://api.ng.termii.com/api/phonebooks/pb-1"
        );
        assert_eq!(request.payload.unwrap()["phonebook_name"], "Renamed");
    }

    #[test]
    fn delete_carries_the_key_in_the_query() {
        let request = delete_phonebook(&credentials(), "pb-1");
        assert_eq!(request.method, Method::Delete);
        assert_eq!(
            request.url.as_str(),
            "https://api.ng.termii.com/api/phonebooks/pb-1?api_key=test123"
        );
        assert!(request.payload.is_none());
    }

    #[test]
    fn path_segments_are_percent_encoded() {
        let request = delete_phonebook(&credentials(), "pb/../1");
        assert_eq!(
            request.url.as_str(),
            "https://api.ng.termii.com/api/phonebooks/pb%2F..%2F1?api_key=test123"
        );
    }
}
