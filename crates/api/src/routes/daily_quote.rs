//! Route definitions for the `/daily-quotes` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::daily_quote;
use crate::state::AppState;

/// Routes mounted at `/daily-quotes`.
///
/// ```text
/// POST   /                 -> create
/// GET    /user/{userId}    -> list_by_user
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(daily_quote::create))
        .route("/user/{userId}", get(daily_quote::list_by_user))
        .route(
            "/{id}",
            get(daily_quote::get_by_id)
                .put(daily_quote::update)
                .delete(daily_quote::delete),
        )
}
