//! Repository for the `assets` table.

use assetdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::asset::{Asset, AssetFilter, AssetRow, NewAsset};

/// Column list for `assets` queries.
const COLUMNS: &str = "\
    id, name, asset_type, serial_number, \
    purchase_date, assigned_to, status";

/// Provides CRUD operations for assets.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset, returning the created row.
    ///
    /// A serial number collision fails with the `uq_assets_serial_number`
    /// constraint violation.
    pub async fn create(pool: &PgPool, input: &NewAsset) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (\
                name, asset_type, serial_number, purchase_date, assigned_to, status\
             ) VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, AssetRow>(&query)
            .bind(&input.name)
            .bind(input.asset_type.as_str())
            .bind(&input.serial_number)
            .bind(input.purchase_date)
            .bind(input.assigned_to.as_deref())
            .bind(input.status.as_str())
            .fetch_one(pool)
            .await?;
        Asset::try_from(row)
    }

    /// Find an asset by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(Asset::try_from)
            .transpose()
    }

    /// Find the asset carrying the given serial number, if any.
    pub async fn find_by_serial_number(
        pool: &PgPool,
        serial_number: &str,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE serial_number = $1");
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(serial_number)
            .fetch_optional(pool)
            .await?
            .map(Asset::try_from)
            .transpose()
    }

    /// List assets matching the filter, ordered by id.
    pub async fn list(pool: &PgPool, filter: &AssetFilter) -> Result<Vec<Asset>, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.asset_type.is_some() {
            conditions.push(format!("asset_type = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.status.is_some() {
            conditions.push(format!("status = ${bind_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!("SELECT {COLUMNS} FROM assets {where_clause} ORDER BY id");
        let mut q = sqlx::query_as::<_, AssetRow>(&query);

        if let Some(asset_type) = filter.asset_type {
            q = q.bind(asset_type.as_str());
        }
        if let Some(status) = filter.status {
            q = q.bind(status.as_str());
        }

        q.fetch_all(pool)
            .await?
            .into_iter()
            .map(Asset::try_from)
            .collect()
    }

    /// Overwrite every mutable column of an existing asset.
    ///
    /// Returns `None` if no row has the given id.
    pub async fn update(pool: &PgPool, asset: &Asset) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET \
                name = $2, \
                asset_type = $3, \
                serial_number = $4, \
                purchase_date = $5, \
                assigned_to = $6, \
                status = $7 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(asset.id)
            .bind(&asset.name)
            .bind(asset.asset_type.as_str())
            .bind(&asset.serial_number)
            .bind(asset.purchase_date)
            .bind(asset.assigned_to.as_deref())
            .bind(asset.status.as_str())
            .fetch_optional(pool)
            .await?
            .map(Asset::try_from)
            .transpose()
    }
}
