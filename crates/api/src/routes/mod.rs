pub mod daily_quote;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /daily-quotes                      create
/// /daily-quotes/user/{userId}        list by owner
/// /daily-quotes/{id}                 get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/daily-quotes", daily_quote::router())
}
