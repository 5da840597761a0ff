//! The daily quote entity.

use crate::types::{QuoteId, UserId};

/// A daily quote: an image reference owned by a user.
///
/// `id` is `None` until the store has assigned one. Once assigned it never
/// changes and is the only way to address the quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyQuote {
    pub id: Option<QuoteId>,
    /// URL or path of the quote image.
    pub quote_image: String,
    pub user_id: Option<UserId>,
}

impl DailyQuote {
    /// A not-yet-persisted quote.
    pub fn new(quote_image: impl Into<String>, user_id: Option<UserId>) -> Self {
        Self {
            id: None,
            quote_image: quote_image.into(),
            user_id,
        }
    }

    /// Same quote addressed by `id`.
    pub fn with_id(self, id: QuoteId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
