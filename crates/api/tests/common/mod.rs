#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use daily_quotes_api::config::{DatabaseConfig, ServerConfig};
use daily_quotes_api::router::build_app_router;
use daily_quotes_api::state::AppState;
use daily_quotes_core::error::CoreError;
use daily_quotes_core::quote::DailyQuote;
use daily_quotes_core::store::{DailyQuoteStore, InMemoryQuoteStore};
use daily_quotes_core::types::{QuoteId, UserId};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// The database URL is never dialled; tests run against in-process stores.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
        },
    }
}

/// Build the full application router over the given store.
pub fn build_test_app(store: Arc<dyn DailyQuoteStore>) -> Router {
    build_app_router(AppState::new(store), &test_config())
}

/// Build the app over an in-memory store seeded with `quotes`, returning the
/// store too so tests can inspect it.
pub fn memory_app(quotes: Vec<DailyQuote>) -> (Router, Arc<InMemoryQuoteStore>) {
    let store = Arc::new(InMemoryQuoteStore::with_quotes(quotes));
    let app = build_test_app(Arc::clone(&store) as Arc<dyn DailyQuoteStore>);
    (app, store)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body.to_string()).await
}

pub async fn send_json(app: Router, method: Method, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// A store whose every call fails as an unreachable backend would.
pub struct FailingStore;

fn backend_down() -> CoreError {
    CoreError::storage("connection refused")
}

#[async_trait]
impl DailyQuoteStore for FailingStore {
    async fn save(&self, _quote: DailyQuote) -> Result<DailyQuote, CoreError> {
        Err(backend_down())
    }

    async fn find_by_id(&self, _id: QuoteId) -> Result<Option<DailyQuote>, CoreError> {
        Err(backend_down())
    }

    async fn find_by_user_id(&self, _user_id: UserId) -> Result<Vec<DailyQuote>, CoreError> {
        Err(backend_down())
    }

    async fn exists_by_id(&self, _id: QuoteId) -> Result<bool, CoreError> {
        Err(backend_down())
    }

    async fn delete_by_id(&self, _id: QuoteId) -> Result<(), CoreError> {
        Err(backend_down())
    }

    async fn find_all(&self) -> Result<Vec<DailyQuote>, CoreError> {
        Err(backend_down())
    }

    async fn count(&self) -> Result<i64, CoreError> {
        Err(backend_down())
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        Err(backend_down())
    }
}
