use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use zbesh_core::error::CoreError;
use zbesh_delivery::{ConfigError, DeliveryError};

/// Message returned for every failure whose detail is for operators only.
pub const GENERIC_FAILURE: &str = "Failed to process request";

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce `{ "error", "code" }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Visitor input failed validation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Delivery is not configured; the visitor should use `fallback` instead.
    #[error("{reason}")]
    NotConfigured {
        reason: ConfigError,
        fallback: String,
    },

    /// Resend rejected the email or could not be reached.
    #[error(transparent)]
    Delivery(DeliveryError),

    /// The request body could not be read as a contact request.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Wrap a delivery failure, pointing visitors at `fallback` when
    /// delivery is switched off.
    pub fn from_delivery(err: DeliveryError, fallback: &str) -> Self {
        match err {
            DeliveryError::NotConfigured(reason) => AppError::NotConfigured {
                reason,
                fallback: fallback.to_string(),
            },
            other => AppError::Delivery(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", core.to_string()),

            AppError::NotConfigured { reason, fallback } => {
                let what = match reason {
                    ConfigError::MissingApiKey => "Email delivery",
                    ConfigError::MissingSender => "Email sender",
                };
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "NOT_CONFIGURED",
                    format!("{what} is not configured. Please email {fallback} directly."),
                )
            }

            AppError::Delivery(err) => {
                tracing::error!(error = %err, "Resend delivery failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    GENERIC_FAILURE.to_string(),
                )
            }

            AppError::MalformedRequest(msg) => {
                tracing::error!(error = %msg, "Contact request could not be parsed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    GENERIC_FAILURE.to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
