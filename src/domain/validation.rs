use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidArgument { field: &'static str },
    EmptyPayload { field: &'static str },
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { field } => write!(f, "{field} must not be empty"),
            Self::EmptyPayload { field } => {
                write!(f, "message payload field {field} must not be empty")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::InvalidArgument {
            field: "message_id",
        };
        assert_eq!(err.to_string(), "message_id must not be empty");

        let err = ValidationError::EmptyPayload { field: "to" };
        assert_eq!(err.to_string(), "message payload field to must not be empty");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");
    }
}
