//! Resend configuration loaded from the process environment.
//!
//! The API key and sender address are optional at load time: a server
//! without them still starts and serves pages, but every contact submission
//! is answered with a "not configured" error instead of being attempted.

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Production Resend endpoint.
pub const DEFAULT_API_URL: &str = "https://api.resend.com";

/// Operator mailbox. Also the fallback address shown to visitors when
/// delivery is unavailable.
pub const DEFAULT_CONTACT_ADDRESS: &str = "contact@zbesh.com";

/// Transport timeout for a single call to Resend.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// A required delivery setting is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("RESEND_API_KEY is not configured")]
    MissingApiKey,

    #[error("RESEND_FROM_EMAIL is not configured")]
    MissingSender,
}

// ---------------------------------------------------------------------------
// ResendConfig
// ---------------------------------------------------------------------------

/// Settings for relaying submissions through Resend.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// Bearer secret. `None` disables delivery.
    pub api_key: Option<String>,
    /// RFC 5322 "From" address. `None` disables delivery.
    pub from_address: Option<String>,
    /// Base URL of the API, without the `/emails` path.
    pub api_url: String,
    /// Operator address that receives every submission.
    pub contact_address: String,
    /// Transport timeout in seconds.
    pub timeout_secs: u64,
}

/// Credentials borrowed from a fully configured [`ResendConfig`].
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub api_key: &'a str,
    pub from_address: &'a str,
}

impl ResendConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable              | Required | Default                  |
    /// |-----------------------|----------|--------------------------|
    /// | `RESEND_API_KEY`      | no       | -                        |
    /// | `RESEND_FROM_EMAIL`   | no       | -                        |
    /// | `RESEND_API_URL`      | no       | `https://api.resend.com` |
    /// | `RESEND_TIMEOUT_SECS` | no       | `10`                     |
    /// | `CONTACT_TO_EMAIL`    | no       | `contact@zbesh.com`      |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let timeout_secs = get("RESEND_TIMEOUT_SECS")
            .map(|v| {
                v.parse()
                    .expect("RESEND_TIMEOUT_SECS must be a valid u64")
            })
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_key: get("RESEND_API_KEY"),
            from_address: get("RESEND_FROM_EMAIL"),
            api_url: get("RESEND_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            contact_address: get("CONTACT_TO_EMAIL")
                .unwrap_or_else(|| DEFAULT_CONTACT_ADDRESS.to_string()),
            timeout_secs,
        }
    }

    /// Configuration that talks to `api_url` with the given credentials.
    pub fn new(api_url: impl Into<String>, api_key: Option<&str>, from_address: Option<&str>) -> Self {
        Self {
            api_key: api_key.map(String::from),
            from_address: from_address.map(String::from),
            api_url: api_url.into(),
            contact_address: DEFAULT_CONTACT_ADDRESS.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Borrow the credentials, or report which one is missing.
    ///
    /// The API key is checked first.
    pub fn credentials(&self) -> Result<Credentials<'_>, ConfigError> {
        let api_key = self.api_key.as_deref().ok_or(ConfigError::MissingApiKey)?;
        let from_address = self
            .from_address
            .as_deref()
            .ok_or(ConfigError::MissingSender)?;
        Ok(Credentials {
            api_key,
            from_address,
        })
    }

    /// Whether both credentials are present.
    pub fn is_configured(&self) -> bool {
        self.credentials().is_ok()
    }

    /// Full URL of the send-email endpoint.
    pub fn emails_endpoint(&self) -> String {
        format!("{}/emails", self.api_url.trim_end_matches('/'))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
