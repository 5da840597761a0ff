use std::any::Any;

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use daily_quotes_core::error::CoreError;
use daily_quotes_core::types::Timestamp;
use daily_quotes_core::validation::{join_violations, FieldViolation};
use serde::{Deserialize, Serialize};

/// Uniform JSON error body returned by every failing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    pub time: Timestamp,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            time: chrono::Utc::now(),
        }
    }
}

/// Application-level error type for HTTP handlers.
///
/// Every handler error path funnels through [`IntoResponse`] here, which is
/// the single place mapping error kinds to a status and [`ErrorResponse`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `daily_quotes_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// No route matched the request path.
    #[error("Not supported application endpoint.")]
    RouteNotFound,

    /// The path matched but no route accepts the request method.
    #[error("Request method '{0}' is not supported.")]
    MethodNotAllowed(Method),

    /// The request body was unreadable or failed its field rules.
    #[error("Validation failed: {}", join_violations(.0))]
    ValidationFailed(Vec<FieldViolation>),

    /// A path parameter failed to parse.
    #[error("Constraint violation: {}", join_violations(.0))]
    ConstraintViolation(Vec<FieldViolation>),

    #[error("{0}")]
    Unexpected(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Status code and client-facing message for this error.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::MethodNotAllowed(_) => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),
            AppError::Core(err @ CoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            AppError::Core(CoreError::Validation(violations))
            | AppError::ValidationFailed(violations)
            | AppError::ConstraintViolation(violations) => {
                (StatusCode::BAD_REQUEST, join_violations(violations))
            }
            AppError::Core(err @ CoreError::Storage(_)) => unexpected(err),
            AppError::Unexpected(msg) => unexpected(msg),
        }
    }
}

fn unexpected(err: &dyn std::fmt::Display) -> (StatusCode, String) {
    tracing::error!(error = %err, "Unhandled error while serving request");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("An unexpected error occurred: {err}"),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, axum::Json(ErrorResponse::new(status, message))).into_response()
    }
}

/// Render a handler panic as a 500 [`ErrorResponse`].
///
/// Installed through `CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::Unexpected(detail).into_response()
}
