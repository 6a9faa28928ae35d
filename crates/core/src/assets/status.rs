//! Status transition rule.
//!
//! Only `ASSIGNED` carries a holder. Moving to any other status drops the
//! holder, whatever the caller supplied.

use super::AssetStatus;

/// Assignee to store after moving an asset to `status`.
///
/// For `ASSIGNED` the requested value is kept as supplied, including `None`
/// or an empty string. Every other status clears it.
pub fn resolve_assignee(status: AssetStatus, requested: Option<String>) -> Option<String> {
    match status {
        AssetStatus::Assigned => requested,
        _ => None,
    }
}
