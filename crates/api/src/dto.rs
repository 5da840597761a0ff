//! Wire shapes for the `/daily-quotes` resource.
//!
//! Create and edit bodies are separate types so the two contracts can drift
//! apart; today they carry the same three fields.

use std::borrow::Cow;

use daily_quotes_core::types::{QuoteId, UserId};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Body of `POST /daily-quotes`, also the response shape for reads.
///
/// `id` is optional on input and always populated on output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AddDailyQuoteRequest {
    pub id: Option<QuoteId>,
    /// A missing `quoteImage` deserializes as empty and fails validation.
    #[serde(rename = "quoteImage", default)]
    #[validate(custom(function = "not_blank"))]
    pub quote_image: String,
    #[serde(rename = "userId")]
    pub user_id: Option<UserId>,
}

/// Body and response of `PUT /daily-quotes/{id}`. No validation rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDailyQuoteRequest {
    pub id: Option<QuoteId>,
    #[serde(rename = "quoteImage")]
    pub quote_image: String,
    /// When absent, the existing owner is kept.
    #[serde(rename = "userId")]
    pub user_id: Option<UserId>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some(Cow::Borrowed("Image URL cannot be blank"));
        return Err(err);
    }
    Ok(())
}
