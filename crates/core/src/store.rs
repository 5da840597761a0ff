//! The quote store abstraction and its in-memory implementation.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::quote::DailyQuote;
use crate::types::{QuoteId, UserId};

/// Typed persistence contract for daily quotes.
///
/// Each method is one logical store interaction; nothing here spans more
/// than one row. Backend failures surface as [`CoreError::Storage`].
#[async_trait]
pub trait DailyQuoteStore: Send + Sync + 'static {
    /// Insert a quote, or fully overwrite the row with the same id.
    ///
    /// A quote without an id gets a store-generated one. Returns the row as
    /// stored.
    async fn save(&self, quote: DailyQuote) -> Result<DailyQuote, CoreError>;

    async fn find_by_id(&self, id: QuoteId) -> Result<Option<DailyQuote>, CoreError>;

    /// All quotes owned by `user_id`, oldest first. Empty when none exist.
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<DailyQuote>, CoreError>;

    async fn exists_by_id(&self, id: QuoteId) -> Result<bool, CoreError>;

    /// Remove a quote. Removing an unknown id is a no-op.
    async fn delete_by_id(&self, id: QuoteId) -> Result<(), CoreError>;

    async fn find_all(&self) -> Result<Vec<DailyQuote>, CoreError>;

    async fn count(&self) -> Result<i64, CoreError>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> Result<(), CoreError>;
}

/// Non-durable store keeping quotes in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryQuoteStore {
    rows: RwLock<Vec<DailyQuote>>,
}

impl InMemoryQuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. Quotes without an id are assigned one.
    pub fn with_quotes(quotes: impl IntoIterator<Item = DailyQuote>) -> Self {
        let rows = quotes
            .into_iter()
            .map(|q| {
                let id = q.id.unwrap_or_else(uuid::Uuid::new_v4);
                q.with_id(id)
            })
            .collect();
        Self {
            rows: RwLock::new(rows),
        }
    }
}

#[async_trait]
impl DailyQuoteStore for InMemoryQuoteStore {
    async fn save(&self, quote: DailyQuote) -> Result<DailyQuote, CoreError> {
        let id = quote.id.unwrap_or_else(uuid::Uuid::new_v4);
        let stored = quote.with_id(id);

        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|row| row.id == Some(id)) {
            Some(row) => *row = stored.clone(),
            None => rows.push(stored.clone()),
        }
        Ok(stored)
    }

    async fn find_by_id(&self, id: QuoteId) -> Result<Option<DailyQuote>, CoreError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.id == Some(id)).cloned())
    }

    async fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<DailyQuote>, CoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| row.user_id == Some(user_id))
            .cloned()
            .collect())
    }

    async fn exists_by_id(&self, id: QuoteId) -> Result<bool, CoreError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().any(|row| row.id == Some(id)))
    }

    async fn delete_by_id(&self, id: QuoteId) -> Result<(), CoreError> {
        self.rows.write().await.retain(|row| row.id != Some(id));
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<DailyQuote>, CoreError> {
        Ok(self.rows.read().await.clone())
    }

    async fn count(&self) -> Result<i64, CoreError> {
        let len = self.rows.read().await.len();
        i64::try_from(len).map_err(CoreError::storage)
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
