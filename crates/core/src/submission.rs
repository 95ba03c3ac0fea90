//! Contact form submissions and their validation rules.
//!
//! A [`ContactRequest`] is whatever the browser sent. It only becomes a
//! [`Submission`] once all three fields are present and the email has a
//! plausible shape; nothing downstream accepts the raw request.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Loose `local@domain.tld` shape. Deliverability is the mail provider's job.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Request body
// ---------------------------------------------------------------------------

/// Raw body of `POST /api/contact`.
///
/// Fields are optional so an absent key is reported as a missing field
/// rather than a malformed body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// A validated name / email / message triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    name: String,
    email: String,
    message: String,
}

impl Submission {
    /// Validate a raw request.
    ///
    /// Presence is checked before format, so a request with an empty name
    /// and a malformed email reports [`CoreError::MissingFields`].
    pub fn parse(request: ContactRequest) -> Result<Self, CoreError> {
        let (Some(name), Some(email), Some(message)) = (
            non_empty(request.name),
            non_empty(request.email),
            non_empty(request.message),
        ) else {
            return Err(CoreError::MissingFields);
        };

        if !is_valid_email(&email) {
            return Err(CoreError::InvalidEmail);
        }

        Ok(Self {
            name,
            email,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Whether `email` matches [`EMAIL_PATTERN`].
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
