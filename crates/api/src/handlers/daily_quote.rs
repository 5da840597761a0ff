//! Handlers for the `/daily-quotes` resource.
//!
//! GET and PUT answer 404 with an empty body when the id is unknown. DELETE
//! leaves that check to the service, so an unknown id comes back as the
//! JSON `NotFound` error body instead.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use daily_quotes_core::quote::DailyQuote;
use daily_quotes_core::types::{QuoteId, UserId};

use crate::dto::{AddDailyQuoteRequest, EditDailyQuoteRequest};
use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath, ValidatedJson};
use crate::state::AppState;

/// GET /api/v1/daily-quotes/user/{userId}
pub async fn list_by_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<UserId>,
) -> AppResult<Json<Vec<AddDailyQuoteRequest>>> {
    let quotes = state.quotes.get_quotes_by_user_id(user_id).await?;
    Ok(Json(quotes.iter().map(AddDailyQuoteRequest::from).collect()))
}

/// GET /api/v1/daily-quotes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<QuoteId>,
) -> AppResult<Response> {
    let response = match state.quotes.get_quote_by_id(id).await? {
        Some(quote) => Json(AddDailyQuoteRequest::from(&quote)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    };
    Ok(response)
}

/// POST /api/v1/daily-quotes
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<AddDailyQuoteRequest>,
) -> AppResult<(StatusCode, Json<AddDailyQuoteRequest>)> {
    let saved = state.quotes.add_daily_quote(DailyQuote::from(input)).await?;
    Ok((StatusCode::CREATED, Json(AddDailyQuoteRequest::from(&saved))))
}

/// PUT /api/v1/daily-quotes/{id}
///
/// The path id wins over any `id` in the body. A body without `userId` keeps
/// the current owner.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<QuoteId>,
    ApiJson(mut input): ApiJson<EditDailyQuoteRequest>,
) -> AppResult<Response> {
    let Some(existing) = state.quotes.get_quote_by_id(id).await? else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    input.id = Some(id);
    if input.user_id.is_none() {
        input.user_id = existing.user_id;
    }

    let updated = state
        .quotes
        .update_daily_quote(DailyQuote::from(input))
        .await?;
    Ok(Json(EditDailyQuoteRequest::from(&updated)).into_response())
}

/// DELETE /api/v1/daily-quotes/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<QuoteId>,
) -> AppResult<StatusCode> {
    state.quotes.delete_daily_quote(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
