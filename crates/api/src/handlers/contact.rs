//! Handler for the site's contact form.
//!
//! A submission is validated, then relayed to the operator mailbox through
//! Resend in a single attempt. Resubmitting the same form sends a second
//! email.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use zbesh_core::submission::{ContactRequest, Submission};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body of a successful submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// POST /contact
// ---------------------------------------------------------------------------

/// Validate a contact submission and relay it to the operator.
///
/// The body is read as raw bytes so that any JSON payload is accepted
/// regardless of `Content-Type`. Only a JSON object is a contact request;
/// arrays, scalars and objects with non-string fields are malformed.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<ContactResponse>> {
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(&body)
        .map_err(|e| AppError::MalformedRequest(e.to_string()))?;
    let request: ContactRequest = serde_json::from_value(serde_json::Value::Object(object))
        .map_err(|e| AppError::MalformedRequest(e.to_string()))?;

    let submission = Submission::parse(request)?;

    state
        .mailer
        .send(&submission)
        .await
        .map_err(|e| AppError::from_delivery(e, &state.mailer.config().contact_address))?;

    Ok(Json(ContactResponse {
        success: true,
        message: "Message received",
    }))
}
