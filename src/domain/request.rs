use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, RawPhoneNumber, SenderId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSms {
    to: RawPhoneNumber,
    from: SenderId,
    message: MessageText,
}

impl SendSms {
    pub fn new(to: RawPhoneNumber, from: SenderId, message: MessageText) -> Self {
        Self { to, from, message }
    }

    /// Build a request from plain strings, validating every payload field.
    pub fn from_parts(
        to: impl Into<String>,
        from: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(
            RawPhoneNumber::new(to)?,
            SenderId::new(from)?,
            MessageText::new(message)?,
        ))
    }

    pub fn to(&self) -> &RawPhoneNumber {
        &self.to
    }

    pub fn sender(&self) -> &SenderId {
        &self.from
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendBulkSms {
    to: Vec<RawPhoneNumber>,
    from: SenderId,
    message: MessageText,
}

impl SendBulkSms {
    pub fn new(
        to: Vec<RawPhoneNumber>,
        from: SenderId,
        message: MessageText,
    ) -> Result<Self, ValidationError> {
        if to.is_empty() {
            return Err(ValidationError::EmptyPayload {
                field: RawPhoneNumber::FIELD,
            });
        }
        Ok(Self { to, from, message })
    }

    /// Build a request from a comma-separated destination list, as Jusibe accepts it.
    pub fn from_parts(
        to: impl Into<String>,
        from: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let to = to.into();
        let recipients = to
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(|part| RawPhoneNumber::new(part.trim()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(recipients, SenderId::new(from)?, MessageText::new(message)?)
    }

    pub fn to(&self) -> &[RawPhoneNumber] {
        &self.to
    }

    pub fn sender(&self) -> &SenderId {
        &self.from
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }
}
