use serde::Deserialize;

use super::scalar::TransportCount;
use super::{TransportError, decode_reply};
use crate::domain::{CreditsResponse, Reply};

pub const CREDITS_PATH: &str = "/smsapi/get_credits";

#[derive(Debug, Clone, Deserialize)]
struct CreditsJsonResponse {
    #[serde(default)]
    sms_credits: Option<TransportCount>,
}

pub fn decode_credits_json_response(
    json: &str,
) -> Result<Reply<CreditsResponse>, TransportError> {
    decode_reply(json, |parsed: CreditsJsonResponse| CreditsResponse {
        sms_credits: parsed.sms_credits.and_then(TransportCount::into_u64),
    })
}
