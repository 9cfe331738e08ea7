//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{SendBulkSms, SendSms};
pub use response::{
    BulkDeliveryStatusResponse, CreditsResponse, DeliveryStatusResponse, ProviderError,
    ProviderErrorKind, Reply, SendBulkSmsResponse, SendSmsResponse,
};
pub use validation::ValidationError;
pub use value::{
    AccessToken, BulkMessageId, KnownStatus, MessageId, MessageText, PhoneNumber, PublicKey,
    RawPhoneNumber, SenderId, Status,
};
