//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router or
//! store is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use daily_quotes_api::error::{panic_response, AppError, ErrorResponse};
use daily_quotes_core::error::CoreError;
use daily_quotes_core::validation::FieldViolation;
use http_body_util::BodyExt;
use uuid::Uuid;

/// Helper: convert a response into its status code and parsed error body.
async fn to_error_body(response: axum::response::Response) -> (StatusCode, ErrorResponse) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

async fn error_to_response(err: AppError) -> (StatusCode, ErrorResponse) {
    to_error_body(err.into_response()).await
}

#[tokio::test]
async fn route_not_found_returns_404() {
    let (status, body) = error_to_response(AppError::RouteNotFound).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.status, 404);
    assert_eq!(body.message, "Not supported application endpoint.");
}

#[tokio::test]
async fn core_not_found_returns_404_with_its_message() {
    let id = Uuid::new_v4();
    let (status, body) = error_to_response(CoreError::quote_not_found(id).into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.status, 404);
    assert_eq!(body.message, format!("Quote not found with ID: {id}"));
}

#[tokio::test]
async fn validation_failure_joins_field_errors_in_order() {
    let err = AppError::ValidationFailed(vec![
        FieldViolation::new("content", "Content cannot be blank"),
        FieldViolation::new("author", "Author cannot be blank"),
    ]);

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.status, 400);
    assert_eq!(
        body.message,
        "content: Content cannot be blank, author: Author cannot be blank"
    );
}

#[tokio::test]
async fn constraint_violation_lists_every_violation() {
    let err = AppError::ConstraintViolation(vec![
        FieldViolation::new("content", "must not be blank"),
        FieldViolation::new("author", "must not be null"),
    ]);

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.status, 400);
    assert!(body.message.contains("content: must not be blank"));
    assert!(body.message.contains("author: must not be null"));
}

#[tokio::test]
async fn empty_validation_failure_returns_400_with_empty_message() {
    let (status, body) = error_to_response(AppError::ValidationFailed(vec![])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.status, 400);
    assert_eq!(body.message, "");
}

#[tokio::test]
async fn empty_constraint_violation_returns_400_with_empty_message() {
    let (status, body) = error_to_response(AppError::ConstraintViolation(vec![])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.status, 400);
    assert_eq!(body.message, "");
}

#[tokio::test]
async fn core_validation_returns_400() {
    let err = CoreError::Validation(vec![FieldViolation::new("id", "must not be null")]);

    let (status, body) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.message, "id: must not be null");
}

#[tokio::test]
async fn unexpected_error_returns_500_with_prefixed_message() {
    let err = AppError::Unexpected("Unexpected database error".into());

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.status, 500);
    assert_eq!(
        body.message,
        "An unexpected error occurred: Unexpected database error"
    );
}

#[tokio::test]
async fn storage_error_returns_500() {
    let err = CoreError::storage("pool timed out");

    let (status, body) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body.message,
        "An unexpected error occurred: Storage error: pool timed out"
    );
}

#[tokio::test]
async fn error_body_carries_current_timestamp() {
    let before = chrono::Utc::now();
    let (_, body) = error_to_response(AppError::RouteNotFound).await;
    let after = chrono::Utc::now();

    assert!(body.time >= before && body.time <= after);
}

#[tokio::test]
async fn panic_renders_as_500_error_body() {
    let (status, body) = to_error_body(panic_response(Box::new("boom"))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.message, "An unexpected error occurred: boom");

    let (_, body) = to_error_body(panic_response(Box::new(String::from("kaboom")))).await;
    assert_eq!(body.message, "An unexpected error occurred: kaboom");
}

#[tokio::test]
async fn method_not_allowed_returns_405_naming_the_method() {
    let err = AppError::MethodNotAllowed(axum::http::Method::PATCH);

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body.status, 405);
    assert_eq!(body.message, "Request method 'PATCH' is not supported.");
}
