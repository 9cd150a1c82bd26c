use serde_json::{Map, json};

use crate::domain::{
    AddContact, ApiKey, ContactFile, Credentials, MultipartUpload, RequestDescriptor,
};

pub fn fetch_contacts(
    credentials: &Credentials,
    phonebook_id: &str,
    page: u32,
) -> RequestDescriptor {
    let mut url = credentials
        .endpoint()
        .url_with(&["api", "phonebooks", phonebook_id, "contacts"]);
    url.query_pairs_mut()
        .append_pair(ApiKey::FIELD, credentials.api_key().as_str())
        .append_pair("page", &page.to_string());
    RequestDescriptor::get(url)
}

pub fn add_contact(credentials: &Credentials, contact: &AddContact) -> RequestDescriptor {
    let url = credentials
        .endpoint()
        .url_with(&["api", "phonebooks", &contact.phonebook_id, "contacts"]);

    let mut payload = Map::new();
    payload.insert(ApiKey::FIELD.to_owned(), json!(credentials.api_key().as_str()));
    payload.insert("phone_number".to_owned(), json!(contact.phone_number));
    payload.insert("country_code".to_owned(), json!(contact.country_code));
    if let Some(email_address) = &contact.options.email_address {
        payload.insert("email_address".to_owned(), json!(email_address));
    }
    if let Some(first_name) = &contact.options.first_name {
        payload.insert("first_name".to_owned(), json!(first_name));
    }
    if let Some(last_name) = &contact.options.last_name {
        payload.insert("last_name".to_owned(), json!(last_name));
    }
    if let Some(company) = &contact.options.company {
        payload.insert("company".to_owned(), json!(company));
    }

    RequestDescriptor::post(url, payload)
}

/// Bulk upload goes out as multipart form data rather than JSON, so it takes
/// the distinct transport path instead of a [`RequestDescriptor`].
pub fn add_contacts(
    credentials: &Credentials,
    phonebook_id: &str,
    file: &ContactFile,
    country_code: &str,
) -> MultipartUpload {
    let url = credentials
        .endpoint()
        .url_with(&["api", "phonebooks", phonebook_id, "contacts"]);
    MultipartUpload {
        url,
        fields: vec![
            (ApiKey::FIELD, credentials.api_key().as_str().to_owned()),
            ("country_code", country_code.to_owned()),
        ],
        file_field: ContactFile::FIELD,
        file_path: file.path().to_owned(),
    }
}

pub fn delete_contact(credentials: &Credentials, contact_id: &str) -> RequestDescriptor {
    // Singular "phonebook" is the path the service actually exposes here.
    let mut url = credentials
        .endpoint()
        .url_with(&["api", "phonebook", "contact", contact_id]);
    url.query_pairs_mut()
        .append_pair(ApiKey::FIELD, credentials.api_key().as_str());
    RequestDescriptor::delete(url)
}
