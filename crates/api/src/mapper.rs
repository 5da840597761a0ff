//! Conversions between the `DailyQuote` entity and its wire DTOs.
//!
//! All fields are copied verbatim in both directions.

use daily_quotes_core::quote::DailyQuote;

use crate::dto::{AddDailyQuoteRequest, EditDailyQuoteRequest};

impl From<&DailyQuote> for AddDailyQuoteRequest {
    fn from(quote: &DailyQuote) -> Self {
        Self {
            id: quote.id,
            quote_image: quote.quote_image.clone(),
            user_id: quote.user_id,
        }
    }
}

impl From<AddDailyQuoteRequest> for DailyQuote {
    fn from(dto: AddDailyQuoteRequest) -> Self {
        Self {
            id: dto.id,
            quote_image: dto.quote_image,
            user_id: dto.user_id,
        }
    }
}

impl From<&DailyQuote> for EditDailyQuoteRequest {
    fn from(quote: &DailyQuote) -> Self {
        Self {
            id: quote.id,
            quote_image: quote.quote_image.clone(),
            user_id: quote.user_id,
        }
    }
}

impl From<EditDailyQuoteRequest> for DailyQuote {
    fn from(dto: EditDailyQuoteRequest) -> Self {
        Self {
            id: dto.id,
            quote_image: dto.quote_image,
            user_id: dto.user_id,
        }
    }
}
