//! Business-facing operations on daily quotes.
//!
//! The only policy here is check-then-act on update and delete: both look the
//! id up first so an unknown id yields [`CoreError::NotFound`] instead of a
//! silent upsert or no-op. The check and the write are two separate store
//! calls and are not atomic.

use std::sync::Arc;

use crate::error::CoreError;
use crate::quote::DailyQuote;
use crate::store::DailyQuoteStore;
use crate::types::{QuoteId, UserId};
use crate::validation::FieldViolation;

#[derive(Clone)]
pub struct DailyQuoteService {
    store: Arc<dyn DailyQuoteStore>,
}

impl DailyQuoteService {
    pub fn new(store: Arc<dyn DailyQuoteStore>) -> Self {
        Self { store }
    }

    /// The underlying store, for health checks.
    pub fn store(&self) -> &Arc<dyn DailyQuoteStore> {
        &self.store
    }

    /// Persist a new quote. Returns it with the store-assigned id.
    pub async fn add_daily_quote(&self, quote: DailyQuote) -> Result<DailyQuote, CoreError> {
        let saved = self.store.save(quote).await?;
        tracing::info!(quote_id = ?saved.id, user_id = ?saved.user_id, "Daily quote added");
        Ok(saved)
    }

    pub async fn get_quotes_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Vec<DailyQuote>, CoreError> {
        self.store.find_by_user_id(user_id).await
    }

    pub async fn get_quote_by_id(&self, id: QuoteId) -> Result<Option<DailyQuote>, CoreError> {
        self.store.find_by_id(id).await
    }

    /// Overwrite an existing quote with `quote`.
    ///
    /// Fails with `NotFound` (and never saves) when no row has `quote.id`.
    pub async fn update_daily_quote(&self, quote: DailyQuote) -> Result<DailyQuote, CoreError> {
        let id = quote.id.ok_or_else(|| {
            CoreError::Validation(vec![FieldViolation::new("id", "must not be null")])
        })?;

        if !self.store.exists_by_id(id).await? {
            tracing::debug!(quote_id = %id, "Update rejected, quote does not exist");
            return Err(CoreError::quote_not_found(id));
        }

        let saved = self.store.save(quote).await?;
        tracing::info!(quote_id = %id, "Daily quote updated");
        Ok(saved)
    }

    /// Delete an existing quote.
    ///
    /// Fails with `NotFound` (and never deletes) when no row has `id`.
    pub async fn delete_daily_quote(&self, id: QuoteId) -> Result<(), CoreError> {
        if !self.store.exists_by_id(id).await? {
            tracing::debug!(quote_id = %id, "Delete rejected, quote does not exist");
            return Err(CoreError::quote_not_found(id));
        }

        self.store.delete_by_id(id).await?;
        tracing::info!(quote_id = %id, "Daily quote deleted");
        Ok(())
    }
}
