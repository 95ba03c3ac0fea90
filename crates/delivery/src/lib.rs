//! Outbound delivery of contact submissions.
//!
//! Submissions are rendered into a [`message::ContactEmail`] and relayed to
//! the Resend transactional-email API by [`resend::ResendClient`]. Delivery
//! is a single attempt: no retry, no queue, no idempotency key.

pub mod config;
pub mod message;
pub mod resend;

pub use config::{ConfigError, ResendConfig};
pub use message::ContactEmail;
pub use resend::{DeliveryError, ResendClient};
