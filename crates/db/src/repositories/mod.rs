//! PostgreSQL repositories, one per table.

pub mod asset_repo;

pub use asset_repo::AssetRepo;
