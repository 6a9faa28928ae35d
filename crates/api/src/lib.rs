//! Asset tracker API server library.
//!
//! Exposes config, state, services, error handling and routes so the
//! integration tests and the binary entrypoint build the same app.

pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
