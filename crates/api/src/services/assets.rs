//! Asset lifecycle rules: creation, filtered listing and status changes.
//!
//! The store is injected as `Arc<dyn AssetStore>`, so every caller (and
//! every test) decides which backing store the rules run against.

use std::sync::Arc;

use assetdesk_core::assets::status::resolve_assignee;
use assetdesk_core::assets::{
    parse_status, parse_status_filter, parse_type_filter, ASSET_ENTITY, DUPLICATE_SERIAL_MESSAGE,
};
use assetdesk_core::error::CoreError;
use assetdesk_core::types::DbId;
use assetdesk_db::models::asset::{Asset, AssetFilter, NewAsset};
use assetdesk_db::store::{AssetStore, StoreError};

use crate::error::{AppError, AppResult};

/// Cheaply cloneable handle to the asset rules and their store.
#[derive(Clone)]
pub struct AssetService {
    store: Arc<dyn AssetStore>,
}

impl AssetService {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    /// Persist a validated asset.
    ///
    /// The serial-number lookup is a fast path; the store's own uniqueness
    /// rule still decides when two creates race past it.
    pub async fn create_asset(&self, input: NewAsset) -> AppResult<Asset> {
        if self
            .store
            .find_by_serial_number(&input.serial_number)
            .await?
            .is_some()
        {
            return Err(duplicate_serial());
        }

        let asset = self.store.insert(input).await.map_err(|e| match e {
            StoreError::Conflict(_) => duplicate_serial(),
            other => AppError::Store(other),
        })?;

        tracing::info!(
            asset_id = asset.id,
            serial_number = %asset.serial_number,
            status = %asset.status,
            "Asset created",
        );

        Ok(asset)
    }

    /// List assets, optionally narrowed by raw `type` / `status` strings.
    pub async fn get_all_assets(
        &self,
        type_filter: Option<&str>,
        status_filter: Option<&str>,
    ) -> AppResult<Vec<Asset>> {
        let filter = AssetFilter {
            asset_type: parse_type_filter(type_filter)?,
            status: parse_status_filter(status_filter)?,
        };
        Ok(self.store.list(filter).await?)
    }

    /// Move an asset to a new status.
    ///
    /// The asset must exist before the status is even parsed. Only
    /// `ASSIGNED` keeps the supplied holder; any other status clears it.
    pub async fn update_asset_status(
        &self,
        id: DbId,
        new_status: Option<&str>,
        assigned_to: Option<String>,
    ) -> AppResult<Asset> {
        let mut asset = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let status = parse_status(new_status)?;
        asset.status = status;
        asset.assigned_to = resolve_assignee(status, assigned_to);

        let updated = self.store.update(&asset).await?.ok_or_else(|| not_found(id))?;

        tracing::info!(
            asset_id = id,
            status = %updated.status,
            assigned = updated.assigned_to.is_some(),
            "Asset status updated",
        );

        Ok(updated)
    }

    /// Whether the backing store currently answers.
    pub async fn store_healthy(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Asset store health check failed");
                false
            }
        }
    }
}

fn duplicate_serial() -> AppError {
    AppError::Core(CoreError::Conflict(DUPLICATE_SERIAL_MESSAGE.to_string()))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ASSET_ENTITY,
        id,
    })
}
