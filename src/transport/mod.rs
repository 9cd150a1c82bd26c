//! Transport layer: endpoint builders mapping typed requests to wire requests.

mod campaigns;
mod contacts;
mod messaging;
mod phonebooks;
mod sender_id;
mod token;

pub use campaigns::{fetch_campaign_history, fetch_campaigns, send_campaign};
pub use contacts::{add_contact, add_contacts, delete_contact, fetch_contacts};
pub use messaging::{send_message, send_number_message};
pub use phonebooks::{create_phonebook, delete_phonebook, fetch_phonebooks, update_phonebook};
pub use sender_id::{fetch_sender_ids, request_sender_id};
pub use token::{email_token, in_app_token, send_token, send_voice_token, verify_token, voice_call};
