//! Domain types for the zbesh contact form.
//!
//! Holds the [`submission::Submission`] value object and the validation
//! rules a visitor's input must pass before it may be relayed anywhere.

pub mod error;
pub mod submission;
