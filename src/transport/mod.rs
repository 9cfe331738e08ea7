//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod account;
mod delivery_status;
mod provider_error;
mod scalar;
mod send_sms;

use serde::de::DeserializeOwned;

use crate::domain::Reply;
use provider_error::detect_provider_error;

pub use account::{CREDITS_PATH, decode_credits_json_response};
pub use delivery_status::{
    BULK_DELIVERY_STATUS_PATH, DELIVERY_STATUS_PATH, decode_bulk_delivery_status_json_response,
    decode_delivery_status_json_response, encode_bulk_delivery_status_query,
    encode_delivery_status_query,
};
pub use send_sms::{
    SEND_BULK_SMS_PATH, SEND_SMS_PATH, decode_send_bulk_sms_json_response,
    decode_send_sms_json_response, encode_send_bulk_sms_form, encode_send_sms_form,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a body into `Reply<T>`: an in-band rejection wins over the success shape.
fn decode_reply<J, T>(json: &str, map: impl FnOnce(J) -> T) -> Result<Reply<T>, TransportError>
where
    J: DeserializeOwned,
{
    let value: serde_json::Value = serde_json::from_str(json)?;
    if let Some(err) = detect_provider_error(&value) {
        return Ok(Reply::Rejected(err));
    }
    let parsed: J = serde_json::from_value(value)?;
    Ok(Reply::Success(map(parsed)))
}
