//! The asset store seam.
//!
//! Services talk to [`AssetStore`] rather than to a pool directly, so the
//! same business rules run against PostgreSQL in production and against
//! [`MemoryAssetStore`](crate::memory::MemoryAssetStore) in tests.

use assetdesk_core::types::DbId;
use async_trait::async_trait;

use crate::models::asset::{Asset, AssetFilter, NewAsset};
use crate::repositories::AssetRepo;
use crate::DbPool;

/// Failure raised by an [`AssetStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The write would break a uniqueness rule. Carries the rule name.
    #[error("Unique constraint violated: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistent collection of assets keyed by id, unique on serial number.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Store a new asset and assign its id.
    async fn insert(&self, asset: NewAsset) -> Result<Asset, StoreError>;

    /// Persist changes to an existing asset. `None` if the id is unknown.
    async fn update(&self, asset: &Asset) -> Result<Option<Asset>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Asset>, StoreError>;

    async fn find_by_serial_number(&self, serial_number: &str)
        -> Result<Option<Asset>, StoreError>;

    /// Assets matching the filter, ordered by id.
    async fn list(&self, filter: AssetFilter) -> Result<Vec<Asset>, StoreError>;

    /// Cheap liveness probe used by the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// [`AssetStore`] backed by the `assets` table.
#[derive(Clone)]
pub struct PgAssetStore {
    pool: DbPool,
}

impl PgAssetStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssetStore for PgAssetStore {
    async fn insert(&self, asset: NewAsset) -> Result<Asset, StoreError> {
        AssetRepo::create(&self.pool, &asset)
            .await
            .map_err(classify_write_error)
    }

    async fn update(&self, asset: &Asset) -> Result<Option<Asset>, StoreError> {
        AssetRepo::update(&self.pool, asset)
            .await
            .map_err(classify_write_error)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Asset>, StoreError> {
        Ok(AssetRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_by_serial_number(
        &self,
        serial_number: &str,
    ) -> Result<Option<Asset>, StoreError> {
        Ok(AssetRepo::find_by_serial_number(&self.pool, serial_number).await?)
    }

    async fn list(&self, filter: AssetFilter) -> Result<Vec<Asset>, StoreError> {
        Ok(AssetRepo::list(&self.pool, &filter).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}

/// Turn PostgreSQL unique violations (SQLSTATE 23505) on a `uq_` constraint
/// into [`StoreError::Conflict`]. Everything else stays a database error.
fn classify_write_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            if let Some(constraint) = db_err.constraint() {
                if constraint.starts_with("uq_") {
                    tracing::debug!(constraint, "Unique constraint violated");
                    return StoreError::Conflict(constraint.to_string());
                }
            }
        }
    }
    StoreError::Database(err)
}
