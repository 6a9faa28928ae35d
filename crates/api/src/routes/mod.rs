pub mod assets;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Every route served under the `/api` prefix.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/assets", assets::router())
}
