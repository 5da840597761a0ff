//! Domain layer for the daily quotes service.
//!
//! Holds the `DailyQuote` entity, the store abstraction it is persisted
//! through, and the service that applies existence checks before mutating.
//! Nothing in here knows about HTTP or SQL.

pub mod error;
pub mod quote;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;
