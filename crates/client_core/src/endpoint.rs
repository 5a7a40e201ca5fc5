//! The booking-acceptance endpoint as a collaborator seam, plus the
//! production HTTP implementation over reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{BookingAccepted, BookingRejected, BookingRequest};
use thiserror::Error;

/// Applied when no explicit timeout is configured; expiry surfaces as a
/// transport failure.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// What the endpoint itself decided about an otherwise well-formed call.
#[derive(Debug, Clone)]
pub enum BookingDecision {
    Accepted(BookingAccepted),
    Rejected(BookingRejected),
}

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("booking endpoint unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed booking response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

#[async_trait]
pub trait BookingEndpoint: Send + Sync {
    /// Issues exactly one booking call for the given payload.
    async fn submit_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingDecision, EndpointError>;
}

pub struct HttpBookingEndpoint {
    http: Client,
    endpoint_url: String,
}

impl HttpBookingEndpoint {
    pub fn new(endpoint_url: impl Into<String>) -> Result<Self, EndpointError> {
        Self::with_timeout(endpoint_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        endpoint_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, EndpointError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint_url: endpoint_url.into(),
        })
    }
}

#[async_trait]
impl BookingEndpoint for HttpBookingEndpoint {
    async fn submit_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingDecision, EndpointError> {
        let response = self
            .http
            .post(&self.endpoint_url)
            .json(request)
            .send()
            .await?;

        // Status codes only matter as a binary ok/not-ok split.
        let ok = response.status().is_success();
        let body = response.bytes().await?;
        if ok {
            let accepted: BookingAccepted = serde_json::from_slice(&body)?;
            Ok(BookingDecision::Accepted(accepted))
        } else {
            let rejected: BookingRejected = serde_json::from_slice(&body)?;
            Ok(BookingDecision::Rejected(rejected))
        }
    }
}
