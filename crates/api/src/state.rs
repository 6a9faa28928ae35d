use crate::services::AssetService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the service only holds an `Arc` to the store.
#[derive(Clone)]
pub struct AppState {
    /// Asset rules bound to the configured store.
    pub assets: AssetService,
}
