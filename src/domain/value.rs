use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Jusibe public key, sent as the HTTP basic-auth username.
///
/// Invariant: non-empty after trimming.
pub struct PublicKey(String);

impl PublicKey {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "public_key";

    /// Create a validated [`PublicKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidArgument { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Jusibe access token, sent as the HTTP basic-auth password.
///
/// Invariant: non-empty after trimming. `Debug` output never shows the value.
pub struct AccessToken(String);

impl AccessToken {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "access_token";

    /// Create a validated [`AccessToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidArgument { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message id (`message_id`) returned by `smsapi/send_sms`.
///
/// Invariant: non-empty after trimming.
pub struct MessageId(String);

impl MessageId {
    /// Query parameter name used by Jusibe (`message_id`).
    pub const FIELD: &'static str = "message_id";

    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidArgument { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated message id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Bulk message id (`bulk_message_id`) returned by `smsapi/bulk/send_sms`.
///
/// Invariant: non-empty after trimming.
pub struct BulkMessageId(String);

impl BulkMessageId {
    /// Query parameter name used by Jusibe (`bulk_message_id`).
    pub const FIELD: &'static str = "bulk_message_id";

    /// Create a validated [`BulkMessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidArgument { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated bulk message id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender id (`from`) shown to the recipient.
///
/// Invariant: not blank. The value is sent exactly as provided.
pub struct SenderId(String);

impl SenderId {
    /// Form field name used by Jusibe (`from`).
    pub const FIELD: &'static str = "from";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyPayload { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message body (`message`).
///
/// Invariant: not blank. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by Jusibe (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyPayload { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated destination phone number as sent to Jusibe (`to`).
///
/// Invariant: not blank. This type does not normalize; if you want E.164
/// normalization, parse into [`PhoneNumber`] and convert it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Form field name used by Jusibe (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated (non-blank) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyPayload { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Raw value as sent to Jusibe.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Form field name used by Jusibe (`to`).
    pub const FIELD: &'static str = "to";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix
    /// (Jusibe delivers to Nigerian numbers, so `country::Id::NG` is the usual choice).
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::EmptyPayload { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message or batch status reported by Jusibe (`status`).
///
/// This value is preserved as-is even when it is unknown to this crate.
pub struct Status(String);

impl Status {
    /// Wrap a status string as returned by Jusibe.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the status as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Map this status to a known variant, if one exists.
    pub fn known_kind(&self) -> Option<KnownStatus> {
        KnownStatus::from_text(&self.0)
    }

    /// Returns `true` once the message (or every message of a batch) reached a final state.
    pub fn is_final(&self) -> bool {
        matches!(
            self.known_kind(),
            Some(kind) if kind.is_final()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Status values documented by Jusibe.
pub enum KnownStatus {
    /// Single message accepted by `send_sms`.
    Sent,
    /// Batch accepted by `bulk/send_sms`.
    Submitted,
    /// Message or batch still waiting to be processed.
    Pending,
    /// Message reached the handset.
    Delivered,
    /// Batch fully processed.
    Completed,
}

impl KnownStatus {
    /// Convert a raw status string into a known variant (case-insensitive).
    pub fn from_text(value: &str) -> Option<Self> {
        let value = value.trim();
        Some(if value.eq_ignore_ascii_case("sent") {
            Self::Sent
        } else if value.eq_ignore_ascii_case("submitted") {
            Self::Submitted
        } else if value.eq_ignore_ascii_case("pending") {
            Self::Pending
        } else if value.eq_ignore_ascii_case("delivered") {
            Self::Delivered
        } else if value.eq_ignore_ascii_case("completed") {
            Self::Completed
        } else {
            return None;
        })
    }

    /// Whether no further status change is expected.
    pub fn is_final(self) -> bool {
        matches!(self, Self::Delivered | Self::Completed)
    }
}
