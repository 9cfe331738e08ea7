//! Typed Rust client for the Jusibe SMS HTTP API.
//!
//! The crate follows three layers: a domain layer of strong types, a transport
//! layer for wire-format quirks, and a small client layer orchestrating requests.
//! Requests are authenticated with the account's public key and access token
//! (HTTP basic auth). Jusibe reports bad credentials and unknown ids inside the
//! response body; those come back as [`Reply::Rejected`] rather than as errors.
//!
//! ```rust,no_run
//! use jusibe::{Credentials, JusibeClient, Reply, SendSms};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), jusibe::JusibeError> {
//!     let client = JusibeClient::new(Credentials::new("public-key", "access-token")?);
//!     let request = SendSms::from_parts("08031234567", "Jusibe", "hello")?;
//!     match client.send_sms(&request).await? {
//!         Reply::Success(sent) => println!("queued as {:?}", sent.message_id),
//!         Reply::Rejected(err) => eprintln!("rejected: {}", err.message),
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, JusibeClient, JusibeClientBuilder, JusibeError};
pub use domain::{
    AccessToken, BulkDeliveryStatusResponse, BulkMessageId, CreditsResponse,
    DeliveryStatusResponse, KnownStatus, MessageId, MessageText, PhoneNumber, ProviderError,
    ProviderErrorKind, PublicKey, RawPhoneNumber, Reply, SendBulkSms, SendBulkSmsResponse, SendSms,
    SendSmsResponse, SenderId, Status, ValidationError,
};
