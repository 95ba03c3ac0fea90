//! Rendering a [`Submission`] into the email the operator receives.

use askama::Template;
use serde::Serialize;
use zbesh_core::submission::Submission;

/// Request body for Resend's `POST /emails`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

/// HTML body of the operator notification.
///
/// Visitor text is auto-escaped by the template; each line of the message
/// is separated by `<br>`.
#[derive(Template)]
#[template(path = "contact_email.html")]
struct ContactEmailHtml<'a> {
    name: &'a str,
    email: &'a str,
    lines: Vec<&'a str>,
}

impl ContactEmail {
    /// Address the notification to `to`, replying to the visitor.
    pub fn render(submission: &Submission, from: &str, to: &str) -> Result<Self, askama::Error> {
        let html = ContactEmailHtml {
            name: submission.name(),
            email: submission.email(),
            lines: submission
                .message()
                .split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line))
                .collect(),
        }
        .render()?;

        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            reply_to: submission.email().to_string(),
            subject: format!("New Contact Form Submission from {}", submission.name()),
            html,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
