use crate::domain::value::{BulkMessageId, MessageId, Status};

/// Outcome of a call that reached Jusibe and returned a JSON body.
///
/// Jusibe reports bad credentials or unknown ids in the response body instead of
/// failing the request, so those cases are data here rather than a [`crate::JusibeError`].
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Success(T),
    Rejected(ProviderError),
}

impl<T> Reply<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Return the success payload, dropping a rejection.
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&ProviderError> {
        match self {
            Self::Success(_) => None,
            Self::Rejected(err) => Some(err),
        }
    }

    /// Convert into a `Result`, treating a provider rejection as the error.
    pub fn into_result(self) -> Result<T, ProviderError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Rejected(err) => Err(err),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ProviderErrorKind {
    /// `{"error": "Invalid API Key!"}`
    InvalidApiKey,
    /// `{"invalid_message_id": "..."}`
    InvalidMessageId,
    /// Any other `error` or `invalid_*` field.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    /// JSON key that carried the error (`error`, `invalid_message_id`, ...).
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreditsResponse {
    pub sms_credits: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SendSmsResponse {
    pub status: Option<Status>,
    pub message_id: Option<MessageId>,
    pub sms_credits_used: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SendBulkSmsResponse {
    pub status: Option<Status>,
    pub bulk_message_id: Option<BulkMessageId>,
    /// Seconds Jusibe spent accepting the batch.
    pub request_speed: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryStatusResponse {
    pub message_id: Option<MessageId>,
    pub status: Option<Status>,
    pub date_sent: Option<String>,
    pub date_delivered: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkDeliveryStatusResponse {
    pub bulk_message_id: Option<BulkMessageId>,
    pub status: Option<Status>,
    pub created: Option<String>,
    pub processed: Option<String>,
    pub total_numbers: Option<u64>,
    pub total_unique_numbers: Option<u64>,
    pub total_valid_numbers: Option<u64>,
    pub total_invalid_numbers: Option<u64>,
}
