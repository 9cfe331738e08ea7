use serde::Deserialize;

use super::scalar::{TransportCount, TransportText};
use super::{TransportError, decode_reply};
use crate::domain::{
    BulkDeliveryStatusResponse, BulkMessageId, DeliveryStatusResponse, MessageId, Reply, Status,
};

pub const DELIVERY_STATUS_PATH: &str = "/smsapi/delivery_status";
pub const BULK_DELIVERY_STATUS_PATH: &str = "/smsapi/bulk/status";

#[derive(Debug, Clone, Deserialize)]
struct DeliveryStatusJsonResponse {
    #[serde(default)]
    message_id: Option<TransportText>,
    #[serde(default)]
    status: Option<TransportText>,
    #[serde(default)]
    date_sent: Option<TransportText>,
    #[serde(default)]
    date_delivered: Option<TransportText>,
}

#[derive(Debug, Clone, Deserialize)]
struct BulkDeliveryStatusJsonResponse {
    #[serde(default)]
    bulk_message_id: Option<TransportText>,
    #[serde(default)]
    status: Option<TransportText>,
    #[serde(default)]
    created: Option<TransportText>,
    #[serde(default)]
    processed: Option<TransportText>,
    #[serde(default)]
    total_numbers: Option<TransportCount>,
    #[serde(default)]
    total_unique_numbers: Option<TransportCount>,
    #[serde(default)]
    total_valid_numbers: Option<TransportCount>,
    #[serde(default)]
    total_invalid_numbers: Option<TransportCount>,
}

pub fn encode_delivery_status_query(message_id: &MessageId) -> Vec<(String, String)> {
    vec![(MessageId::FIELD.to_owned(), message_id.as_str().to_owned())]
}

pub fn encode_bulk_delivery_status_query(bulk_id: &BulkMessageId) -> Vec<(String, String)> {
    vec![(BulkMessageId::FIELD.to_owned(), bulk_id.as_str().to_owned())]
}

pub fn decode_delivery_status_json_response(
    json: &str,
) -> Result<Reply<DeliveryStatusResponse>, TransportError> {
    decode_reply(json, |parsed: DeliveryStatusJsonResponse| {
        DeliveryStatusResponse {
            message_id: parsed
                .message_id
                .and_then(TransportText::into_text)
                .and_then(|id| MessageId::new(id).ok()),
            status: parsed
                .status
                .and_then(TransportText::into_text)
                .map(Status::new),
            date_sent: parsed.date_sent.and_then(TransportText::into_text),
            date_delivered: parsed.date_delivered.and_then(TransportText::into_text),
        }
    })
}

pub fn decode_bulk_delivery_status_json_response(
    json: &str,
) -> Result<Reply<BulkDeliveryStatusResponse>, TransportError> {
    decode_reply(json, |parsed: BulkDeliveryStatusJsonResponse| {
        BulkDeliveryStatusResponse {
            bulk_message_id: parsed
                .bulk_message_id
                .and_then(TransportText::into_text)
                .and_then(|id| BulkMessageId::new(id).ok()),
            status: parsed
                .status
                .and_then(TransportText::into_text)
                .map(Status::new),
            created: parsed.created.and_then(TransportText::into_text),
            processed: parsed.processed.and_then(TransportText::into_text),
            total_numbers: parsed.total_numbers.and_then(TransportCount::into_u64),
            total_unique_numbers: parsed.total_unique_numbers.and_then(TransportCount::into_u64),
            total_valid_numbers: parsed.total_valid_numbers.and_then(TransportCount::into_u64),
            total_invalid_numbers: parsed
                .total_invalid_numbers
                .and_then(TransportCount::into_u64),
        }
    })
}
