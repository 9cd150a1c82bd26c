use serde_json::{Map, json};

use crate::domain::{ApiKey, Credentials, RequestDescriptor, SendCampaign};

/// Literal timestamp format the campaign scheduler expects.
const SCHEDULE_TIME_FORMAT: &str = "%d-%m-%Y %I:%M %p";

pub fn send_campaign(credentials: &Credentials, campaign: &SendCampaign) -> RequestDescriptor {
    let url = credentials
        .endpoint()
        .url_with(&["api", "sms", "campaigns", "send"]);

    let mut payload = Map::new();
    payload.insert(ApiKey::FIELD.to_owned(), json!(credentials.api_key().as_str()));
    payload.insert("country_code".to_owned(), json!(campaign.country_code));
    payload.insert(
        "sender_id".to_owned(),
        json!(credentials.sender_id().as_str()),
    );
    payload.insert("message".to_owned(), json!(campaign.message));
    payload.insert("channel".to_owned(), json!(campaign.options.channel.as_str()));
    payload.insert("message_type".to_owned(), json!("plain"));
    payload.insert("phonebook_id".to_owned(), json!(campaign.phonebook_id));
    payload.insert(
        "campaign_type".to_owned(),
        json!(campaign.options.campaign_type.as_str()),
    );
    payload.insert(
        "remove_duplicate".to_owned(),
        json!(if campaign.options.remove_duplicate {
            "yes"
        } else {
            "no"
        }),
    );
    if let Some(delimiter) = campaign.options.delimiter {
        payload.insert("delimiter".to_owned(), json!(delimiter.to_string()));
    }
    if let Some(schedule_time) = campaign.options.schedule_time {
        payload.insert("schedule_sms_status".to_owned(), json!("scheduled"));
        payload.insert(
            "schedule_time".to_owned(),
            json!(schedule_time.format(SCHEDULE_TIME_FORMAT).to_string()),
        );
    }

    RequestDescriptor::post(url, payload)
}

pub fn fetch_campaigns(credentials: &Credentials, page: u32) -> RequestDescriptor {
    let mut url = credentials.endpoint().url_with(&["api", "sms", "campaigns"]);
    url.query_pairs_mut()
        .append_pair(ApiKey::FIELD, credentials.api_key().as_str())
        .append_pair("page", &page.to_string());
    RequestDescriptor::get(url)
}

pub fn fetch_campaign_history(
    credentials: &Credentials,
    campaign_id: &str,
    page: u32,
) -> RequestDescriptor {
    let mut url = credentials
        .endpoint()
        .url_with(&["api", "sms", "campaigns", campaign_id]);
    url.query_pairs_mut()
        .append_pair(ApiKey::FIELD, credentials.api_key().as_str())
        .append_pair("page", &page.to_string());
    RequestDescriptor::get(url)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::Method;

    fn credentials() -> Credentials {
        Credentials::new("test123", "https://api.ng.termii.com", "test").unwrap()
    }

    #[test]
    fn send_assembles_the_full_payload() {
        let campaign = SendCampaign::new("234", "Season opening sale", "pb-1");
        let request = send_campaign(&credentials(), &campaign);
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.url.as_str(),
            "https://api.ng.termii.com/api/sms/campaigns/send"
        );

        let payload = request.payload.unwrap();
        assert_eq!(payload["api_key"], "test123");
        assert_eq!(payload["country_code"], "234");
        assert_eq!(payload["sender_id"], "test");
        assert_eq!(payload["message"], "Season opening sale");
        assert_eq!(payload["channel"], "generic");
        assert_eq!(payload["message_type"], "plain");
        assert_eq!(payload["phonebook_id"], "pb-1");
        assert_eq!(payload["campaign_type"], "bulk");
        assert_eq!(payload["remove_duplicate"], "yes");
        assert!(!payload.contains_key("schedule_time"));
        assert!(!payload.contains_key("schedule_sms_status"));
        assert!(!payload.contains_key("delimiter"));
    }

    #[test]
    fn schedule_time_becomes_a_literal_timestamp_string() {
        let mut campaign = SendCampaign::new("234", "Reminder", "pb-1");
        campaign.options.schedule_time = Some(
            NaiveDate::from_ymd_opt(2021, 6, 30)
                .unwrap()
                .and_hms_opt(18, 0, 0)
                .unwrap(),
        );

        let payload = send_campaign(&credentials(), &campaign).payload.unwrap();
        assert_eq!(payload["schedule_sms_status"], "scheduled");
        assert_eq!(payload["schedule_time"], "30-06-2021 06:00 PM");
    }

    #[test]
    fn delimiter_is_sent_as_a_string_when_set() {
        let mut campaign = SendCampaign::new("234", "Hi {name}", "pb-1");
        campaign.options.delimiter = Some(';');
        let payload = send_campaign(&credentials(), &campaign).payload.unwrap();
        assert_eq!(payload["delimiter"], ";");
    }

    #[test]
    fn list_and_history_are_paged_gets() {
        let request = fetch_campaigns(&credentials(), 1);
        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.url.as_str(),
            "https://api.ng.termii.com/api/sms/campaigns?api_key=test123&page=1"
        );

        let request = fetch_campaign_history(&credentials(), "cmp-7", 3);
        assert_eq!(
            request.url.as_str(),
            "https://api.ng.termii.com/api/sms/campaigns/cmp-7?api_key=test123&page=3"
        );
    }
}
