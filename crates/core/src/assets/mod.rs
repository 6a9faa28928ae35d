//! Asset domain vocabulary.
//!
//! Types and statuses travel over the wire as upper-case strings. They are
//! parsed here into strict enum variants at the boundary; unknown values are
//! rejected before reaching the store.

pub mod status;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Entity name used in not-found errors.
pub const ASSET_ENTITY: &str = "Asset";

/// Message returned when a create collides with an existing serial number.
pub const DUPLICATE_SERIAL_MESSAGE: &str = "Asset with the same serial number already exists";

/// Message returned for an unparseable status value.
pub const INVALID_STATUS_MESSAGE: &str = "Invalid asset status";

/// Message returned for an unparseable type value.
pub const INVALID_TYPE_MESSAGE: &str = "Invalid asset type";

/// A string that does not name any variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Kind of tracked asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    Hardware,
    Software,
    Peripheral,
}

impl AssetType {
    pub const ALL: [AssetType; 3] = [Self::Hardware, Self::Software, Self::Peripheral];

    /// Canonical wire and storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hardware => "HARDWARE",
            Self::Software => "SOFTWARE",
            Self::Peripheral => "PERIPHERAL",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "asset type",
                value: s.to_string(),
            })
    }
}

/// Lifecycle state of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    Available,
    Assigned,
    UnderMaintenance,
    Retired,
}

impl AssetStatus {
    pub const ALL: [AssetStatus; 4] = [
        Self::Available,
        Self::Assigned,
        Self::UnderMaintenance,
        Self::Retired,
    ];

    /// Canonical wire and storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Assigned => "ASSIGNED",
            Self::UnderMaintenance => "UNDER_MAINTENANCE",
            Self::Retired => "RETIRED",
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "asset status",
                value: s.to_string(),
            })
    }
}

/// Parse an optional `?type=` filter. Absent or empty means "no filter".
pub fn parse_type_filter(raw: Option<&str>) -> Result<Option<AssetType>, CoreError> {
    parse_filter(raw, INVALID_TYPE_MESSAGE)
}

/// Parse an optional `?status=` filter. Absent or empty means "no filter".
pub fn parse_status_filter(raw: Option<&str>) -> Result<Option<AssetStatus>, CoreError> {
    parse_filter(raw, INVALID_STATUS_MESSAGE)
}

/// Parse the target status of a status update. A missing value is invalid.
pub fn parse_status(raw: Option<&str>) -> Result<AssetStatus, CoreError> {
    raw.and_then(|s| s.parse().ok())
        .ok_or_else(|| CoreError::InvalidArgument(INVALID_STATUS_MESSAGE.to_string()))
}

fn parse_filter<T: FromStr>(raw: Option<&str>, message: &str) -> Result<Option<T>, CoreError> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| CoreError::InvalidArgument(message.to_string())),
    }
}
