use serde::Deserialize;

use super::scalar::{TransportCount, TransportDecimal, TransportText};
use super::{TransportError, decode_reply};
use crate::domain::{
    BulkMessageId, MessageId, MessageText, RawPhoneNumber, Reply, SendBulkSms,
    SendBulkSmsResponse, SendSms, SendSmsResponse, SenderId, Status,
};

pub const SEND_SMS_PATH: &str = "/smsapi/send_sms";
pub const SEND_BULK_SMS_PATH: &str = "/smsapi/bulk/send_sms";

#[derive(Debug, Clone, Deserialize)]
struct SendSmsJsonResponse {
    #[serde(default)]
    status: Option<TransportText>,
    #[serde(default)]
    message_id: Option<TransportText>,
    #[serde(default)]
    sms_credits_used: Option<TransportCount>,
}

#[derive(Debug, Clone, Deserialize)]
struct SendBulkSmsJsonResponse {
    #[serde(default)]
    status: Option<TransportText>,
    #[serde(default)]
    bulk_message_id: Option<TransportText>,
    #[serde(default)]
    request_speed: Option<TransportDecimal>,
}

pub fn encode_send_sms_form(request: &SendSms) -> Vec<(String, String)> {
    encode_payload(
        request.to().raw().to_owned(),
        request.sender(),
        request.message(),
    )
}

pub fn encode_send_bulk_sms_form(request: &SendBulkSms) -> Vec<(String, String)> {
    let to = request
        .to()
        .iter()
        .map(RawPhoneNumber::raw)
        .collect::<Vec<_>>()
        .join(",");
    encode_payload(to, request.sender(), request.message())
}

fn encode_payload(to: String, from: &SenderId, message: &MessageText) -> Vec<(String, String)> {
    vec![
        (RawPhoneNumber::FIELD.to_owned(), to),
        (SenderId::FIELD.to_owned(), from.as_str().to_owned()),
        (MessageText::FIELD.to_owned(), message.as_str().to_owned()),
    ]
}

pub fn decode_send_sms_json_response(
    json: &str,
) -> Result<Reply<SendSmsResponse>, TransportError> {
    decode_reply(json, |parsed: SendSmsJsonResponse| SendSmsResponse {
        status: parsed
            .status
            .and_then(TransportText::into_text)
            .map(Status::new),
        message_id: parsed
            .message_id
            .and_then(TransportText::into_text)
            .and_then(|id| MessageId::new(id).ok()),
        sms_credits_used: parsed.sms_credits_used.and_then(TransportCount::into_u64),
    })
}

pub fn decode_send_bulk_sms_json_response(
    json: &str,
) -> Result<Reply<SendBulkSmsResponse>, TransportError> {
    decode_reply(json, |parsed: SendBulkSmsJsonResponse| SendBulkSmsResponse {
        status: parsed
            .status
            .and_then(TransportText::into_text)
            .map(Status::new),
        bulk_message_id: parsed
            .bulk_message_id
            .and_then(TransportText::into_text)
            .and_then(|id| BulkMessageId::new(id).ok()),
        request_speed: parsed.request_speed.and_then(TransportDecimal::into_f64),
    })
}
