//! Daily quotes HTTP API library.
//!
//! Exposes config, state, error handling, DTOs and routes so integration
//! tests and the binary entrypoint build the exact same application.

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod mapper;
pub mod router;
pub mod routes;
pub mod state;
