//! Asset models and DTOs.

use assetdesk_core::assets::{AssetStatus, AssetType};
use assetdesk_core::types::DbId;
use assetdesk_core::validation::{collect_field_errors, is_blank, FieldErrors};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity structs
// ---------------------------------------------------------------------------

/// A tracked asset as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub serial_number: String,
    pub purchase_date: Option<NaiveDate>,
    pub assigned_to: Option<String>,
    pub status: AssetStatus,
}

/// A validated asset that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAsset {
    pub name: String,
    pub asset_type: AssetType,
    pub serial_number: String,
    pub purchase_date: Option<NaiveDate>,
    pub assigned_to: Option<String>,
    pub status: AssetStatus,
}

impl NewAsset {
    /// Attach a store-assigned id.
    pub fn with_id(self, id: DbId) -> Asset {
        Asset {
            id,
            name: self.name,
            asset_type: self.asset_type,
            serial_number: self.serial_number,
            purchase_date: self.purchase_date,
            assigned_to: self.assigned_to,
            status: self.status,
        }
    }
}

/// A row from the `assets` table. Enum columns are stored as text.
#[derive(Debug, Clone, FromRow)]
pub struct AssetRow {
    pub id: DbId,
    pub name: String,
    pub asset_type: String,
    pub serial_number: String,
    pub purchase_date: Option<NaiveDate>,
    pub assigned_to: Option<String>,
    pub status: String,
}

impl TryFrom<AssetRow> for Asset {
    type Error = sqlx::Error;

    fn try_from(row: AssetRow) -> Result<Self, Self::Error> {
        let asset_type = row
            .asset_type
            .parse::<AssetType>()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        let status = row
            .status
            .parse::<AssetStatus>()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        Ok(Asset {
            id: row.id,
            name: row.name,
            asset_type,
            serial_number: row.serial_number,
            purchase_date: row.purchase_date,
            assigned_to: row.assigned_to,
            status,
        })
    }
}

/// Optional predicates for listing assets. Both present means AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetFilter {
    pub asset_type: Option<AssetType>,
    pub status: Option<AssetStatus>,
}

impl AssetFilter {
    pub fn matches(&self, asset: &Asset) -> bool {
        self.asset_type.map_or(true, |t| t == asset.asset_type)
            && self.status.map_or(true, |s| s == asset.status)
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating an asset.
///
/// Every field is optional at the JSON level so that missing values surface
/// as field errors rather than a deserialization failure. Unknown enum
/// strings still fail deserialization.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAsset {
    #[validate(
        required(message = "Name is required"),
        length(min = 3, max = 100, message = "Name must be 3 to 100 characters long")
    )]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<AssetType>,
    #[validate(required(message = "Serial number is required"))]
    pub serial_number: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub assigned_to: Option<String>,
    pub status: Option<AssetStatus>,
}

impl CreateAsset {
    /// Check every field and build the insertable record.
    ///
    /// All failing fields are reported together, keyed by their JSON name.
    pub fn into_new_asset(self) -> Result<NewAsset, FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => collect_field_errors(&e),
        };

        if self.name.as_deref().is_some_and(is_blank) {
            errors.insert("name".into(), "Name is required".into());
        }
        if self.serial_number.as_deref().is_some_and(is_blank) {
            errors.insert("serialNumber".into(), "Serial number is required".into());
        }
        if self.asset_type.is_none() {
            errors.insert("type".into(), "Asset type is required".into());
        }
        if self.status.is_none() {
            errors.insert("status".into(), "Status is required".into());
        }

        match (self.name, self.asset_type, self.serial_number, self.status) {
            (Some(name), Some(asset_type), Some(serial_number), Some(status))
                if errors.is_empty() =>
            {
                Ok(NewAsset {
                    name,
                    asset_type,
                    serial_number,
                    purchase_date: self.purchase_date,
                    assigned_to: self.assigned_to,
                    status,
                })
            }
            _ => Err(errors),
        }
    }
}

/// DTO for `PATCH /assets/{id}/status`. The status stays a raw string so
/// that unknown values are reported as an invalid status, not a bad body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssetStatus {
    pub status: Option<String>,
    pub assigned_to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> CreateAsset {
        CreateAsset {
            name: Some("Dell Latitude 5420".into()),
            asset_type: Some(AssetType::Hardware),
            serial_number: Some("DL5420-2023-001".into()),
            purchase_date: NaiveDate::from_ymd_opt(2023, 1, 15),
            assigned_to: None,
            status: Some(AssetStatus::Available),
        }
    }

    #[test]
    fn valid_payload_builds_new_asset() {
        let new = laptop().into_new_asset().unwrap();
        assert_eq!(new.name, "Dell Latitude 5420");
        assert_eq!(new.asset_type, AssetType::Hardware);
        assert_eq!(new.purchase_date, NaiveDate::from_ymd_opt(2023, 1, 15));
    }

    #[test]
    fn short_name_and_missing_serial_reported_together() {
        let input = CreateAsset {
            name: Some("PC".into()),
            serial_number: None,
            ..laptop()
        };
        let errors = input.into_new_asset().unwrap_err();
        assert_eq!(errors["name"], "Name must be 3 to 100 characters long");
        assert_eq!(errors["serialNumber"], "Serial number is required");
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn name_length_bounds_are_inclusive() {
        for len in [3, 100] {
            let input = CreateAsset {
                name: Some("x".repeat(len)),
                ..laptop()
            };
            assert!(input.into_new_asset().is_ok(), "length {len} should pass");
        }
        let input = CreateAsset {
            name: Some("x".repeat(101)),
            ..laptop()
        };
        let errors = input.into_new_asset().unwrap_err();
        assert_eq!(errors["name"], "Name must be 3 to 100 characters long");
    }

    #[test]
    fn blank_values_count_as_missing() {
        let input = CreateAsset {
            name: Some("     ".into()),
            serial_number: Some("  ".into()),
            ..laptop()
        };
        let errors = input.into_new_asset().unwrap_err();
        assert_eq!(errors["name"], "Name is required");
        assert_eq!(errors["serialNumber"], "Serial number is required");
    }

    #[test]
    fn missing_enums_reported_by_json_name() {
        let input = CreateAsset {
            asset_type: None,
            status: None,
            ..laptop()
        };
        let errors = input.into_new_asset().unwrap_err();
        assert_eq!(errors["type"], "Asset type is required");
        assert_eq!(errors["status"], "Status is required");
    }

    #[test]
    fn asset_serializes_with_camel_case_keys() {
        let asset = laptop().into_new_asset().unwrap().with_id(7);
        let json = serde_json::to_value(&asset).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["type"], "HARDWARE");
        assert_eq!(json["serialNumber"], "DL5420-2023-001");
        assert_eq!(json["purchaseDate"], "2023-01-15");
        assert!(json["assignedTo"].is_null());
        assert_eq!(json["status"], "AVAILABLE");
    }

    #[test]
    fn filter_combines_predicates_with_and() {
        let asset = laptop().into_new_asset().unwrap().with_id(1);
        let both = AssetFilter {
            asset_type: Some(AssetType::Hardware),
            status: Some(AssetStatus::Available),
        };
        let wrong_status = AssetFilter {
            status: Some(AssetStatus::Assigned),
            ..both
        };
        assert!(AssetFilter::default().matches(&asset));
        assert!(both.matches(&asset));
        assert!(!wrong_status.matches(&asset));
    }
}
