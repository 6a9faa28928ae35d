//! Domain logic for the asset tracker.
//!
//! Nothing in this crate touches the database; the store and the HTTP layer
//! call into it with already-loaded data.

pub mod assets;
pub mod error;
pub mod types;
pub mod validation;
