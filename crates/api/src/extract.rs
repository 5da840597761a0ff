//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections.

use axum::extract::path::ErrorKind;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use daily_quotes_core::validation::{violations_from_errors, FieldViolation};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// `Path<T>` whose parse failures become [`AppError::ConstraintViolation`].
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::ConstraintViolation(vec![path_violation(
                &rejection,
            )])),
        }
    }
}

fn path_violation(rejection: &PathRejection) -> FieldViolation {
    if let PathRejection::FailedToDeserializePathParams(err) = rejection {
        match err.kind() {
            ErrorKind::ParseErrorAtKey {
                key,
                value,
                expected_type,
            } => {
                return FieldViolation::new(
                    key.clone(),
                    format!("cannot parse '{value}' as {expected_type}"),
                );
            }
            ErrorKind::DeserializeError { key, message, .. } => {
                return FieldViolation::new(key.clone(), message.clone());
            }
            _ => {}
        }
    }
    FieldViolation::new("path", rejection.body_text())
}

/// `Json<T>` whose rejections become [`AppError::ValidationFailed`] on `body`.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(body_rejection(&rejection)),
        }
    }
}

fn body_rejection(rejection: &JsonRejection) -> AppError {
    AppError::ValidationFailed(vec![FieldViolation::new("body", rejection.body_text())])
}

/// [`ApiJson`] that additionally runs the body's `validator` rules.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let ApiJson(value) = ApiJson::<T>::from_request(req, state).await?;
        value
            .validate()
            .map_err(|errors| AppError::ValidationFailed(violations_from_errors(&errors)))?;
        Ok(Self(value))
    }
}
