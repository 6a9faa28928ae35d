//! Query parameter types for API handlers.

use serde::Deserialize;

/// Filters for `GET /assets` (`?type=&status=`).
///
/// Values stay raw strings here; they are parsed into enum variants by the
/// asset service so that unknown values become a 400 with a clear message.
#[derive(Debug, Default, Deserialize)]
pub struct AssetListParams {
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub status: Option<String>,
}
