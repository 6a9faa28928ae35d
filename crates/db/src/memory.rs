//! In-process [`AssetStore`] used by tests and database-less runs.

use std::collections::BTreeMap;

use assetdesk_core::types::DbId;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::asset::{Asset, AssetFilter, NewAsset};
use crate::store::{AssetStore, StoreError};

/// Name reported for serial-number collisions, matching the SQL constraint.
const SERIAL_CONSTRAINT: &str = "uq_assets_serial_number";

#[derive(Default)]
struct Inner {
    next_id: DbId,
    assets: BTreeMap<DbId, Asset>,
}

impl Inner {
    fn serial_taken(&self, serial_number: &str, except: Option<DbId>) -> bool {
        self.assets
            .values()
            .any(|a| a.serial_number == serial_number && Some(a.id) != except)
    }
}

/// Asset store held in memory. Ids start at 1 and are never reused.
///
/// Uniqueness is checked and the write applied under one write lock, so
/// concurrent inserts of the same serial number cannot both succeed.
#[derive(Default)]
pub struct MemoryAssetStore {
    inner: RwLock<Inner>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn insert(&self, asset: NewAsset) -> Result<Asset, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.serial_taken(&asset.serial_number, None) {
            return Err(StoreError::Conflict(SERIAL_CONSTRAINT.to_string()));
        }
        inner.next_id += 1;
        let stored = asset.with_id(inner.next_id);
        inner.assets.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, asset: &Asset) -> Result<Option<Asset>, StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.assets.contains_key(&asset.id) {
            return Ok(None);
        }
        if inner.serial_taken(&asset.serial_number, Some(asset.id)) {
            return Err(StoreError::Conflict(SERIAL_CONSTRAINT.to_string()));
        }
        inner.assets.insert(asset.id, asset.clone());
        Ok(Some(asset.clone()))
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Asset>, StoreError> {
        Ok(self.inner.read().await.assets.get(&id).cloned())
    }

    async fn find_by_serial_number(
        &self,
        serial_number: &str,
    ) -> Result<Option<Asset>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .assets
            .values()
            .find(|a| a.serial_number == serial_number)
            .cloned())
    }

    async fn list(&self, filter: AssetFilter) -> Result<Vec<Asset>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .assets
            .values()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
