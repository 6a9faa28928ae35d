//! Handlers for the asset endpoints.
//!
//! Each handler reads the request, calls [`AssetService`](crate::services::AssetService)
//! and lets [`AppError`] render failures.

use assetdesk_core::error::CoreError;
use assetdesk_core::types::DbId;
use assetdesk_db::models::asset::{CreateAsset, UpdateAssetStatus};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::query::AssetListParams;
use crate::state::AppState;

/// POST /api/assets
///
/// Create an asset. Field validation happens before the store is touched.
pub async fn create_asset(
    State(state): State<AppState>,
    payload: Result<Json<CreateAsset>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let new_asset = input
        .into_new_asset()
        .map_err(|errors| AppError::Core(CoreError::Validation(errors)))?;

    let asset = state.assets.create_asset(new_asset).await?;

    Ok((StatusCode::CREATED, Json(asset)))
}

/// GET /api/assets?type=&status=
///
/// List assets, optionally filtered by type and/or status.
pub async fn list_assets(
    State(state): State<AppState>,
    params: Result<Query<AssetListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let assets = state
        .assets
        .get_all_assets(params.asset_type.as_deref(), params.status.as_deref())
        .await?;

    Ok(Json(assets))
}

/// PATCH /api/assets/{id}/status
///
/// Change an asset's status, setting or clearing its holder.
pub async fn update_asset_status(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateAssetStatus>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let Json(input) = payload?;

    let asset = state
        .assets
        .update_asset_status(id, input.status.as_deref(), input.assigned_to)
        .await?;

    Ok(Json(asset))
}
