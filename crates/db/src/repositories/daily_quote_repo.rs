//! Repository for the `daily_quotes` table.

use async_trait::async_trait;
use daily_quotes_core::error::CoreError;
use daily_quotes_core::quote::DailyQuote;
use daily_quotes_core::store::DailyQuoteStore;
use daily_quotes_core::types::{QuoteId, UserId};

use crate::models::daily_quote::DailyQuoteRow;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, quote_image, user_id";

/// PostgreSQL-backed [`DailyQuoteStore`].
#[derive(Debug, Clone)]
pub struct DailyQuoteRepo {
    pool: DbPool,
}

impl DailyQuoteRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn storage_error(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Daily quote query failed");
    CoreError::storage(err)
}

#[async_trait]
impl DailyQuoteStore for DailyQuoteRepo {
    /// Upsert keyed by id. A missing id falls back to `gen_random_uuid()`.
    async fn save(&self, quote: DailyQuote) -> Result<DailyQuote, CoreError> {
        let query = format!(
            "INSERT INTO daily_quotes (id, quote_image, user_id)
             VALUES (COALESCE($1, gen_random_uuid()), $2, $3)
             ON CONFLICT (id) DO UPDATE SET
                quote_image = EXCLUDED.quote_image,
                user_id = EXCLUDED.user_id,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DailyQuoteRow>(&query)
            .bind(quote.id)
            .bind(&quote.quote_image)
            .bind(quote.user_id)
            .fetch_one(&self.pool)
            .await
            .map(DailyQuote::from)
            .map_err(storage_error)
    }

    async fn find_by_id(&self, id: QuoteId) -> Result<Option<DailyQuote>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM daily_quotes WHERE id = $1");
        let row = sqlx::query_as::<_, DailyQuoteRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(row.map(DailyQuote::from))
    }

    async fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<DailyQuote>, CoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM daily_quotes WHERE user_id = $1 ORDER BY created_at, id"
        );
        let rows = sqlx::query_as::<_, DailyQuoteRow>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(rows.into_iter().map(DailyQuote::from).collect())
    }

    async fn exists_by_id(&self, id: QuoteId) -> Result<bool, CoreError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM daily_quotes WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(storage_error)?;
        Ok(exists)
    }

    async fn delete_by_id(&self, id: QuoteId) -> Result<(), CoreError> {
        sqlx::query("DELETE FROM daily_quotes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<DailyQuote>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM daily_quotes ORDER BY created_at, id");
        let rows = sqlx::query_as::<_, DailyQuoteRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(rows.into_iter().map(DailyQuote::from).collect())
    }

    async fn count(&self) -> Result<i64, CoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM daily_quotes")
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(count)
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(storage_error)
    }
}
