//! Resend API client.
//!
//! [`ResendClient`] sends one `POST /emails` per submission. A non-2xx
//! response or a transport failure is returned as a [`DeliveryError`]; the
//! caller decides what, if anything, the visitor sees. Nothing is retried.

use std::time::Duration;

use zbesh_core::submission::Submission;

use crate::config::{ConfigError, ResendConfig};
use crate::message::ContactEmail;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for relay failures.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// Delivery is switched off; no request was made.
    #[error(transparent)]
    NotConfigured(#[from] ConfigError),

    /// The notification body could not be rendered.
    #[error("Email render error: {0}")]
    Render(#[from] askama::Error),

    /// The HTTP request failed (network, DNS, timeout, etc.).
    #[error("Resend request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Resend answered with a non-2xx status.
    #[error("Resend returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
}

// ---------------------------------------------------------------------------
// ResendClient
// ---------------------------------------------------------------------------

/// Relays submissions to the operator mailbox through Resend.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ResendClient {
    http: reqwest::Client,
    config: ResendConfig,
}

impl ResendClient {
    /// Build a client with the configured transport timeout.
    pub fn new(config: ResendConfig) -> Result<Self, DeliveryError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ResendConfig {
        &self.config
    }

    /// Send `submission` to the operator address.
    ///
    /// Returns [`DeliveryError::NotConfigured`] without touching the
    /// network when the API key or sender address is missing.
    pub async fn send(&self, submission: &Submission) -> Result<(), DeliveryError> {
        let creds = match self.config.credentials() {
            Ok(creds) => creds,
            Err(e) => {
                tracing::error!(
                    reply_to = submission.email(),
                    error = %e,
                    "Contact submission was NOT delivered",
                );
                return Err(e.into());
            }
        };

        let email = ContactEmail::render(
            submission,
            creds.from_address,
            &self.config.contact_address,
        )?;

        let response = self
            .http
            .post(self.config.emails_endpoint())
            .bearer_auth(creds.api_key)
            .json(&email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(reply_to = submission.email(), "Contact email sent via Resend");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
