//! Route definitions for assets.
//!
//! All routes are mounted under `/assets`.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Asset routes mounted at `/assets`.
///
/// ```text
/// GET    /              -> list_assets
/// POST   /              -> create_asset
/// PATCH  /{id}/status   -> update_asset_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list_assets).post(assets::create_asset))
        .route("/{id}/status", patch(assets::update_asset_status))
}
