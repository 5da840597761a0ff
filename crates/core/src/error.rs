use crate::types::QuoteId;
use crate::validation::{join_violations, FieldViolation};

/// Boxed backend error carried by [`CoreError::Storage`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found with ID: {id}")]
    NotFound { entity: &'static str, id: QuoteId },

    #[error("Validation failed: {}", join_violations(.0))]
    Validation(Vec<FieldViolation>),

    #[error("Storage error: {0}")]
    Storage(#[source] BoxError),
}

impl CoreError {
    /// The not-found error raised for an unknown daily quote id.
    pub fn quote_not_found(id: QuoteId) -> Self {
        Self::NotFound { entity: "Quote", id }
    }

    /// Wrap a backend failure reported by a store implementation.
    pub fn storage(err: impl Into<BoxError>) -> Self {
        Self::Storage(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_not_found_message() {
        let id = uuid::Uuid::nil();
        assert_eq!(
            CoreError::quote_not_found(id).to_string(),
            "Quote not found with ID: 00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn validation_message_lists_fields() {
        let err = CoreError::Validation(vec![FieldViolation::new("id", "must not be null")]);
        assert_eq!(err.to_string(), "Validation failed: id: must not be null");
    }

    #[test]
    fn storage_keeps_backend_message() {
        let err = CoreError::storage("connection refused");
        assert_eq!(err.to_string(), "Storage error: connection refused");
    }
}
