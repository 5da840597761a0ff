use std::sync::Arc;

use daily_quotes_core::service::DailyQuoteService;
use daily_quotes_core::store::DailyQuoteStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub quotes: DailyQuoteService,
}

impl AppState {
    pub fn new(store: Arc<dyn DailyQuoteStore>) -> Self {
        Self {
            quotes: DailyQuoteService::new(store),
        }
    }
}
