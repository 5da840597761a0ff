/// Daily quote primary keys are store-generated UUIDs.
pub type QuoteId = uuid::Uuid;

/// Owning user of a quote. No user table backs this id.
pub type UserId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
