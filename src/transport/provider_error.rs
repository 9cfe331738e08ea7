use serde_json::{Map, Value};

use crate::domain::{ProviderError, ProviderErrorKind};

const ERROR_FIELD: &str = "error";
const INVALID_PREFIX: &str = "invalid_";
const INVALID_MESSAGE_ID_FIELD: &str = "invalid_message_id";

/// Look for an in-band rejection (`error` or any `invalid_*` key) in a decoded body.
pub fn detect_provider_error(body: &Value) -> Option<ProviderError> {
    let object = body.as_object()?;

    if let Some(message) = field_message(object, ERROR_FIELD) {
        let kind = if message.to_ascii_lowercase().contains("api key") {
            ProviderErrorKind::InvalidApiKey
        } else {
            ProviderErrorKind::Other
        };
        return Some(ProviderError {
            kind,
            field: ERROR_FIELD.to_owned(),
            message,
        });
    }

    object
        .keys()
        .filter(|key| key.starts_with(INVALID_PREFIX))
        .find_map(|key| {
            let message = field_message(object, key)?;
            let kind = if key == INVALID_MESSAGE_ID_FIELD {
                ProviderErrorKind::InvalidMessageId
            } else {
                ProviderErrorKind::Other
            };
            Some(ProviderError {
                kind,
                field: key.clone(),
                message,
            })
        })
}

fn field_message(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn detects_invalid_api_key() {
        let err = detect_provider_error(&json!({ "error": "Invalid API Key!" })).unwrap();
        assert_eq!(err.kind, ProviderErrorKind::InvalidApiKey);
        assert_eq!(err.field, "error");
        assert_eq!(err.message, "Invalid API Key!");
    }

    #[test]
    fn detects_invalid_message_id() {
        let err =
            detect_provider_error(&json!({ "invalid_message_id": "Invalid message ID" })).unwrap();
        assert_eq!(err.kind, ProviderErrorKind::InvalidMessageId);
        assert_eq!(err.message, "Invalid message ID");
    }

    #[test]
    fn other_invalid_fields_map_to_other() {
        let err = detect_provider_error(&json!({ "invalid_bulk_message_id": "Invalid bulk ID" }))
            .unwrap();
        assert_eq!(err.kind, ProviderErrorKind::Other);
        assert_eq!(err.field, "invalid_bulk_message_id");

        let err = detect_provider_error(&json!({ "error": "Insufficient credits" })).unwrap();
        assert_eq!(err.kind, ProviderErrorKind::Other);
    }

    #[test]
    fn success_bodies_and_null_errors_are_ignored() {
        assert!(detect_provider_error(&json!({ "sms_credits": 200 })).is_none());
        assert!(detect_provider_error(&json!({ "status": "Sent", "error": null })).is_none());
        assert!(detect_provider_error(&json!([1, 2, 3])).is_none());
    }
}
