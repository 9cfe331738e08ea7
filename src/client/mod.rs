//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use log::{debug, warn};

use crate::domain::{
    AccessToken, BulkDeliveryStatusResponse, BulkMessageId, CreditsResponse,
    DeliveryStatusResponse, MessageId, PublicKey, Reply, SendBulkSms, SendBulkSmsResponse,
    SendSms, SendSmsResponse, ValidationError,
};
use crate::transport::{self, TransportError};

const DEFAULT_BASE_URL: &str = "https://jusibe.com";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: String,
    query: Vec<(String, String)>,
    form: Vec<(String, String)>,
    credentials: Credentials,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = match request.method {
                HttpMethod::Get => self.client.get(&request.url),
                HttpMethod::Post => self.client.post(&request.url).form(&request.form),
            };
            if !request.query.is_empty() {
                builder = builder.query(&request.query);
            }
            let response = builder
                .basic_auth(
                    request.credentials.public_key.as_str(),
                    Some(request.credentials.access_token.as_str()),
                )
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Jusibe API credentials, sent as HTTP basic auth on every call.
///
/// The public key is the username and the access token the password. Both are
/// issued on the Jusibe dashboard.
pub struct Credentials {
    public_key: PublicKey,
    access_token: AccessToken,
}

impl Credentials {
    /// Validate both parts; a blank value fails with [`ValidationError::InvalidArgument`].
    pub fn new(
        public_key: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            public_key: PublicKey::new(public_key)?,
            access_token: AccessToken::new(access_token)?,
        })
    }

    /// Combine already validated parts.
    pub fn from_parts(public_key: PublicKey, access_token: AccessToken) -> Self {
        Self {
            public_key,
            access_token,
        }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`JusibeClient`].
///
/// Rejections reported by Jusibe in the response body (bad credentials, unknown
/// message ids) are not errors; they come back as [`Reply::Rejected`].
pub enum JusibeError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code without a recognizable Jusibe error body.
    ///
    /// A non-2xx response whose body carries a Jusibe `error` or `invalid_*`
    /// field is not reported here; it comes back as [`Reply::Rejected`].
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The configured base URL is not an absolute `http(s)` URL, or it carries a
    /// query or fragment.
    #[error("invalid base URL: {url}")]
    InvalidBaseUrl { url: String },

    /// [`JusibeClient::last_response`] was called before any request completed.
    #[error("no response recorded yet")]
    NoResponse,
}

#[derive(Debug, Clone)]
/// Builder for [`JusibeClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct JusibeClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl JusibeClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the base URL (`https://jusibe.com`) all API paths are appended to.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`JusibeClient`].
    pub fn build(self) -> Result<JusibeClient, JusibeError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| JusibeError::Transport(Box::new(err)))?;

        Ok(JusibeClient::with_transport(
            self.credentials,
            base_url,
            Arc::new(ReqwestTransport { client }),
        ))
    }
}

fn normalize_base_url(raw: &str) -> Result<String, JusibeError> {
    let invalid = || JusibeError::InvalidBaseUrl {
        url: raw.to_owned(),
    };
    let parsed = url::Url::parse(raw.trim()).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https")
        || parsed.cannot_be_a_base()
        || parsed.query().is_some()
        || parsed.fragment().is_some()
    {
        return Err(invalid());
    }
    Ok(parsed.as_str().trim_end_matches('/').to_owned())
}

/// High-level Jusibe client.
///
/// This type orchestrates request encoding, basic authentication, and response
/// parsing against `https://jusibe.com`. Every operation issues exactly one request,
/// returns the decoded [`Reply`], and records the raw response so that
/// [`JusibeClient::last_response`] can expose it as generic JSON.
pub struct JusibeClient {
    credentials: Credentials,
    base_url: String,
    http: Arc<dyn HttpTransport>,
    last_response: Mutex<Option<HttpResponse>>,
}

impl Clone for JusibeClient {
    /// The clone shares the HTTP connection pool but starts with no recorded response.
    fn clone(&self) -> Self {
        Self::with_transport(
            self.credentials.clone(),
            self.base_url.clone(),
            Arc::clone(&self.http),
        )
    }
}

impl fmt::Debug for JusibeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JusibeClient")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl JusibeClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`JusibeClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self::with_transport(
            credentials,
            DEFAULT_BASE_URL.to_owned(),
            Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        )
    }

    /// Validate a public key / access token pair and create a client from it.
    pub fn from_keys(
        public_key: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, JusibeError> {
        Ok(Self::new(Credentials::new(public_key, access_token)?))
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> JusibeClientBuilder {
        JusibeClientBuilder::new(credentials)
    }

    fn with_transport(
        credentials: Credentials,
        base_url: String,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            credentials,
            base_url,
            http,
            last_response: Mutex::new(None),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a single SMS (`POST /smsapi/send_sms`).
    ///
    /// Errors:
    /// - [`JusibeError::Transport`] for network failures,
    /// - [`JusibeError::HttpStatus`] for non-2xx HTTP responses without a Jusibe error body,
    /// - [`JusibeError::Parse`] when the body is not JSON.
    pub async fn send_sms(&self, request: &SendSms) -> Result<Reply<SendSmsResponse>, JusibeError> {
        let response = self
            .dispatch(
                HttpMethod::Post,
                transport::SEND_SMS_PATH,
                Vec::new(),
                transport::encode_send_sms_form(request),
            )
            .await?;
        finish(
            transport::SEND_SMS_PATH,
            response,
            transport::decode_send_sms_json_response,
        )
    }

    /// Send one message to several destinations (`POST /smsapi/bulk/send_sms`).
    ///
    /// Poll the returned bulk id with [`JusibeClient::check_bulk_delivery_status`].
    pub async fn send_bulk_sms(
        &self,
        request: &SendBulkSms,
    ) -> Result<Reply<SendBulkSmsResponse>, JusibeError> {
        let response = self
            .dispatch(
                HttpMethod::Post,
                transport::SEND_BULK_SMS_PATH,
                Vec::new(),
                transport::encode_send_bulk_sms_form(request),
            )
            .await?;
        finish(
            transport::SEND_BULK_SMS_PATH,
            response,
            transport::decode_send_bulk_sms_json_response,
        )
    }

    /// Check the SMS credits left on the account (`GET /smsapi/get_credits`).
    pub async fn check_available_credits(&self) -> Result<Reply<CreditsResponse>, JusibeError> {
        let response = self
            .dispatch(
                HttpMethod::Get,
                transport::CREDITS_PATH,
                Vec::new(),
                Vec::new(),
            )
            .await?;
        finish(
            transport::CREDITS_PATH,
            response,
            transport::decode_credits_json_response,
        )
    }

    /// Check the delivery status of a single message (`GET /smsapi/delivery_status`).
    pub async fn check_delivery_status(
        &self,
        message_id: &MessageId,
    ) -> Result<Reply<DeliveryStatusResponse>, JusibeError> {
        let response = self
            .dispatch(
                HttpMethod::Get,
                transport::DELIVERY_STATUS_PATH,
                transport::encode_delivery_status_query(message_id),
                Vec::new(),
            )
            .await?;
        finish(
            transport::DELIVERY_STATUS_PATH,
            response,
            transport::decode_delivery_status_json_response,
        )
    }

    /// Check the aggregate status of a bulk send (`GET /smsapi/bulk/status`).
    pub async fn check_bulk_delivery_status(
        &self,
        bulk_id: &BulkMessageId,
    ) -> Result<Reply<BulkDeliveryStatusResponse>, JusibeError> {
        let response = self
            .dispatch(
                HttpMethod::Get,
                transport::BULK_DELIVERY_STATUS_PATH,
                transport::encode_bulk_delivery_status_query(bulk_id),
                Vec::new(),
            )
            .await?;
        finish(
            transport::BULK_DELIVERY_STATUS_PATH,
            response,
            transport::decode_bulk_delivery_status_json_response,
        )
    }

    /// Decode the body of the most recent response as generic JSON.
    ///
    /// Works for every recorded response, including non-2xx ones, so callers can
    /// inspect fields the typed responses do not model.
    pub fn last_response(&self) -> Result<serde_json::Value, JusibeError> {
        let slot = self
            .last_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let response = slot.as_ref().ok_or(JusibeError::NoResponse)?;
        serde_json::from_str(&response.body).map_err(|err| JusibeError::Parse(Box::new(err)))
    }

    /// HTTP status of the most recent response, if any request completed.
    pub fn last_status(&self) -> Option<u16> {
        self.last_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|response| response.status)
    }

    async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        query: Vec<(String, String)>,
        form: Vec<(String, String)>,
    ) -> Result<HttpResponse, JusibeError> {
        debug!("jusibe request: {method} {path}");
        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            query,
            form,
            credentials: self.credentials.clone(),
        };

        let response = self
            .http
            .execute(request)
            .await
            .map_err(JusibeError::Transport)?;
        debug!("jusibe response: {path} -> HTTP {}", response.status);

        *self
            .last_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(response.clone());
        Ok(response)
    }
}

fn finish<T>(
    path: &str,
    response: HttpResponse,
    decode: fn(&str) -> Result<Reply<T>, TransportError>,
) -> Result<Reply<T>, JusibeError> {
    let success = (200..=299).contains(&response.status);

    match decode(&response.body) {
        Ok(Reply::Rejected(err)) => {
            warn!(
                "jusibe rejected {path} (HTTP {}): {}: {}",
                response.status, err.field, err.message
            );
            Ok(Reply::Rejected(err))
        }
        Ok(reply) if success => Ok(reply),
        Err(err) if success => Err(JusibeError::Parse(Box::new(err))),
        _ => {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            Err(JusibeError::HttpStatus {
                status: response.status,
                body,
            })
        }
    }
}
