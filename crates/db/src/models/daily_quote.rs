//! Row model for the `daily_quotes` table.

use daily_quotes_core::quote::DailyQuote;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from `daily_quotes`. Timestamps stay in the database.
#[derive(Debug, Clone, FromRow)]
pub struct DailyQuoteRow {
    pub id: Uuid,
    pub quote_image: String,
    pub user_id: Option<Uuid>,
}

impl From<DailyQuoteRow> for DailyQuote {
    fn from(row: DailyQuoteRow) -> Self {
        Self {
            id: Some(row.id),
            quote_image: row.quote_image,
            user_id: row.user_id,
        }
    }
}
