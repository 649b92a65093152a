//! Normalization of asset write payloads.
//!
//! Create and update share one raw payload shape, [`AssetFields`]. Every
//! field is tri-state: absent (`None`), explicitly null (`Some(None)`) or a
//! value (`Some(Some(_))`). Create treats absent and null alike; update only
//! touches fields that are present.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

use super::status::{validate_status, StatusPolicy, DEFAULT_STATUS};
use crate::error::CoreError;
use crate::types::Timestamp;

/// Message returned when a create payload lacks a name or category.
pub const MSG_REQUIRED_FIELDS: &str = "Name and category are required";

/// Message returned when a purchase price is not numeric.
pub const MSG_INVALID_PRICE: &str = "Purchase price must be a valid number.";

/// A purchase price as submitted: JSON number or numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

/// Raw asset fields from a create or update request.
///
/// `purchaseDate` and `purchasePrice` may also arrive as `purchase_date` and
/// `purchase_price`. When both spellings are sent, a camelCase value wins.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawAssetFields")]
pub struct AssetFields {
    pub name: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub status: Option<Option<String>>,
    pub purchase_date: Option<Option<String>>,
    pub purchase_price: Option<Option<PriceInput>>,
}

/// Wire shape of [`AssetFields`], with both spellings as separate keys.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAssetFields {
    #[serde(default, deserialize_with = "present")]
    name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    category: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    status: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    purchase_date: Option<Option<String>>,
    #[serde(default, rename = "purchase_date", deserialize_with = "present")]
    purchase_date_snake: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    purchase_price: Option<Option<PriceInput>>,
    #[serde(default, rename = "purchase_price", deserialize_with = "present")]
    purchase_price_snake: Option<Option<PriceInput>>,
}

impl From<RawAssetFields> for AssetFields {
    fn from(raw: RawAssetFields) -> Self {
        Self {
            name: raw.name,
            description: raw.description,
            category: raw.category,
            status: raw.status,
            purchase_date: prefer_camel(raw.purchase_date, raw.purchase_date_snake),
            purchase_price: prefer_camel(raw.purchase_price, raw.purchase_price_snake),
        }
    }
}

/// Merge two spellings of one tri-state field: a value beats null, null
/// beats absent, and camelCase wins a tie.
fn prefer_camel<T>(camel: Option<Option<T>>, snake: Option<Option<T>>) -> Option<Option<T>> {
    match (camel, snake) {
        (Some(Some(v)), _) | (None | Some(None), Some(Some(v))) => Some(Some(v)),
        (camel, snake) => camel.or(snake),
    }
}

/// Keeps an explicit `null` distinguishable from a missing key.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A validated, normalized asset ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAsset {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub status: String,
    pub purchase_date: Option<Timestamp>,
    pub purchase_price: Option<f64>,
}

/// A normalized partial update.
///
/// `None` leaves the column untouched. For nullable columns the inner
/// `Option` is the new value, `None` clearing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub purchase_date: Option<Option<Timestamp>>,
    pub purchase_price: Option<Option<f64>>,
}

impl AssetChanges {
    /// True when no column besides `updated_at` would change.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Validate and normalize a create payload.
///
/// `name` and `category` must be non-empty after trimming. Missing optional
/// fields become null and a missing status becomes [`DEFAULT_STATUS`].
pub fn normalize_create(fields: &AssetFields, policy: StatusPolicy) -> Result<NewAsset, CoreError> {
    let name = trimmed(flatten(&fields.name));
    let category = trimmed(flatten(&fields.category));

    let (Some(name), Some(category)) = (name, category) else {
        return Err(CoreError::Validation(MSG_REQUIRED_FIELDS.to_string()));
    };

    let status = normalize_status(flatten(&fields.status), policy)?;

    let purchase_date = match flatten(&fields.purchase_date) {
        Some(raw) => parse_purchase_date(raw)?,
        None => None,
    };

    let purchase_price = match fields.purchase_price.as_ref().and_then(Option::as_ref) {
        Some(price) => parse_price(price)?,
        None => None,
    };

    Ok(NewAsset {
        name,
        description: trimmed(flatten(&fields.description)),
        category,
        status,
        purchase_date,
        purchase_price,
    })
}

/// Normalize a partial update payload.
///
/// Present string fields are trimmed. An explicit null or empty value clears
/// the column: nullable columns become NULL, `name`/`category` become the
/// empty string and `status` resets to [`DEFAULT_STATUS`]. Name and category
/// are not re-checked for emptiness here.
pub fn normalize_update(
    fields: &AssetFields,
    policy: StatusPolicy,
) -> Result<AssetChanges, CoreError> {
    let name = fields
        .name
        .as_ref()
        .map(|v| v.as_deref().map(str::trim).unwrap_or_default().to_string());
    let category = fields
        .category
        .as_ref()
        .map(|v| v.as_deref().map(str::trim).unwrap_or_default().to_string());
    let description = fields
        .description
        .as_ref()
        .map(|v| trimmed(v.as_deref()));

    let status = match &fields.status {
        Some(v) => Some(normalize_status(v.as_deref(), policy)?),
        None => None,
    };

    let purchase_date = match &fields.purchase_date {
        Some(Some(raw)) => Some(parse_purchase_date(raw)?),
        Some(None) => Some(None),
        None => None,
    };

    let purchase_price = match &fields.purchase_price {
        Some(Some(price)) => Some(parse_price(price)?),
        Some(None) => Some(None),
        None => None,
    };

    Ok(AssetChanges {
        name,
        description,
        category,
        status,
        purchase_date,
        purchase_price,
    })
}

/// Parse a purchase price. Empty strings mean "no price".
pub fn parse_price(price: &PriceInput) -> Result<Option<f64>, CoreError> {
    let value = match price {
        PriceInput::Number(n) => *n,
        PriceInput::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<f64>()
                .map_err(|_| CoreError::Validation(MSG_INVALID_PRICE.to_string()))?
        }
    };

    if !value.is_finite() {
        return Err(CoreError::Validation(MSG_INVALID_PRICE.to_string()));
    }
    Ok(Some(value))
}

/// Parse a purchase date. Empty strings mean "no date".
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_purchase_date(raw: &str) -> Result<Option<Timestamp>, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    parse_timestamp(raw)
        .map(Some)
        .ok_or_else(|| CoreError::Validation(format!("Invalid purchase date '{raw}'")))
}

/// Lenient timestamp parser shared with the presentation adapter.
pub(crate) fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn normalize_status(raw: Option<&str>, policy: StatusPolicy) -> Result<String, CoreError> {
    match trimmed(raw) {
        Some(status) => {
            validate_status(&status, policy)?;
            Ok(status)
        }
        None => Ok(DEFAULT_STATUS.to_string()),
    }
}

fn flatten(field: &Option<Option<String>>) -> Option<&str> {
    field.as_ref().and_then(|v| v.as_deref())
}

/// Trim, mapping empty results to `None`.
fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn fields(value: serde_json::Value) -> AssetFields {
        serde_json::from_value(value).unwrap()
    }

    // -- deserialization --

    #[test]
    fn missing_and_null_fields_are_distinguished() {
        let f = fields(json!({"name": "Laptop", "description": null}));
        assert_eq!(f.name, Some(Some("Laptop".to_string())));
        assert_eq!(f.description, Some(None));
        assert_eq!(f.category, None);
    }

    #[test]
    fn both_spellings_in_one_payload_prefer_camel_case() {
        let f = fields(json!({
            "name": "A",
            "category": "B",
            "purchasePrice": 10,
            "purchase_price": 99,
            "purchaseDate": null,
            "purchase_date": "2024-01-15",
        }));
        assert_eq!(f.purchase_price, Some(Some(PriceInput::Number(10.0))));
        assert_eq!(f.purchase_date, Some(Some("2024-01-15".to_string())));

        let asset = normalize_create(&f, StatusPolicy::Permissive).unwrap();
        assert_eq!(asset.purchase_price, Some(10.0));
    }

    #[test]
    fn explicit_null_in_either_spelling_clears() {
        let f = fields(json!({"purchase_price": null}));
        assert_eq!(f.purchase_price, Some(None));
        let changes = normalize_update(&f, StatusPolicy::Permissive).unwrap();
        assert_eq!(changes.purchase_price, Some(None));
    }

    #[test]
    fn snake_case_aliases_are_accepted() {
        let f = fields(json!({"purchase_date": "2024-01-15", "purchase_price": 900}));
        assert_eq!(f.purchase_date, Some(Some("2024-01-15".to_string())));
        assert_eq!(f.purchase_price, Some(Some(PriceInput::Number(900.0))));
    }

    // -- create --

    #[test]
    fn create_applies_defaults() {
        let f = fields(json!({"name": "Dell Latitude 5520", "category": "Laptop"}));
        let asset = normalize_create(&f, StatusPolicy::Permissive).unwrap();

        assert_eq!(asset.name, "Dell Latitude 5520");
        assert_eq!(asset.category, "Laptop");
        assert_eq!(asset.status, "available");
        assert_eq!(asset.description, None);
        assert_eq!(asset.purchase_date, None);
        assert_eq!(asset.purchase_price, None);
    }

    #[test]
    fn create_trims_strings() {
        let f = fields(json!({
            "name": "  Monitor ",
            "category": " Display\t",
            "description": "  27 inch ",
            "status": " assigned ",
        }));
        let asset = normalize_create(&f, StatusPolicy::Permissive).unwrap();

        assert_eq!(asset.name, "Monitor");
        assert_eq!(asset.category, "Display");
        assert_eq!(asset.description.as_deref(), Some("27 inch"));
        assert_eq!(asset.status, "assigned");
    }

    #[test]
    fn create_requires_name() {
        let f = fields(json!({"category": "Laptop"}));
        let err = normalize_create(&f, StatusPolicy::Permissive).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == MSG_REQUIRED_FIELDS);
    }

    #[test]
    fn create_requires_category() {
        let f = fields(json!({"name": "Laptop", "category": null}));
        assert_matches!(
            normalize_create(&f, StatusPolicy::Permissive),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn create_rejects_whitespace_only_name() {
        let f = fields(json!({"name": "   ", "category": "Laptop"}));
        assert_matches!(
            normalize_create(&f, StatusPolicy::Permissive),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn create_maps_empty_description_to_null() {
        let f = fields(json!({"name": "A", "category": "B", "description": "   "}));
        let asset = normalize_create(&f, StatusPolicy::Permissive).unwrap();
        assert_eq!(asset.description, None);
    }

    #[test]
    fn create_parses_numeric_string_price() {
        let f = fields(json!({"name": "A", "category": "B", "purchasePrice": " 1299.99 "}));
        let asset = normalize_create(&f, StatusPolicy::Permissive).unwrap();
        assert_eq!(asset.purchase_price, Some(1299.99));
    }

    #[test]
    fn create_maps_empty_price_to_null() {
        let f = fields(json!({"name": "A", "category": "B", "purchasePrice": ""}));
        let asset = normalize_create(&f, StatusPolicy::Permissive).unwrap();
        assert_eq!(asset.purchase_price, None);
    }

    #[test]
    fn create_rejects_non_numeric_price() {
        let f = fields(json!({"name": "A", "category": "B", "purchasePrice": "cheap"}));
        let err = normalize_create(&f, StatusPolicy::Permissive).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == MSG_INVALID_PRICE);
    }

    #[test]
    fn create_parses_bare_and_iso_dates() {
        let f = fields(json!({"name": "A", "category": "B", "purchaseDate": "2024-01-15"}));
        let asset = normalize_create(&f, StatusPolicy::Permissive).unwrap();
        assert_eq!(
            asset.purchase_date,
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
        );

        let f = fields(json!({
            "name": "A",
            "category": "B",
            "purchaseDate": "2024-03-01T12:30:00.000Z",
        }));
        let asset = normalize_create(&f, StatusPolicy::Permissive).unwrap();
        assert_eq!(
            asset.purchase_date,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap())
        );
    }

    #[test]
    fn create_rejects_garbage_date() {
        let f = fields(json!({"name": "A", "category": "B", "purchaseDate": "next tuesday"}));
        assert_matches!(
            normalize_create(&f, StatusPolicy::Permissive),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn create_passes_unknown_status_when_permissive() {
        let f = fields(json!({"name": "A", "category": "B", "status": "retired"}));
        let asset = normalize_create(&f, StatusPolicy::Permissive).unwrap();
        assert_eq!(asset.status, "retired");
    }

    #[test]
    fn create_rejects_unknown_status_when_strict() {
        let f = fields(json!({"name": "A", "category": "B", "status": "retired"}));
        assert_matches!(
            normalize_create(&f, StatusPolicy::Strict),
            Err(CoreError::Validation(_))
        );
    }

    // -- update --

    #[test]
    fn update_touches_only_present_fields() {
        let f = fields(json!({"status": "maintenance"}));
        let changes = normalize_update(&f, StatusPolicy::Permissive).unwrap();

        assert_eq!(
            changes,
            AssetChanges {
                status: Some("maintenance".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn update_empty_price_clears_it() {
        let f = fields(json!({"purchasePrice": ""}));
        let changes = normalize_update(&f, StatusPolicy::Permissive).unwrap();
        assert_eq!(changes.purchase_price, Some(None));
        assert_eq!(changes.name, None);
    }

    #[test]
    fn update_null_clears_nullable_columns() {
        let f = fields(json!({"description": null, "purchaseDate": null, "purchasePrice": null}));
        let changes = normalize_update(&f, StatusPolicy::Permissive).unwrap();
        assert_eq!(changes.description, Some(None));
        assert_eq!(changes.purchase_date, Some(None));
        assert_eq!(changes.purchase_price, Some(None));
    }

    #[test]
    fn update_allows_clearing_name_and_category() {
        let f = fields(json!({"name": "  ", "category": null}));
        let changes = normalize_update(&f, StatusPolicy::Permissive).unwrap();
        assert_eq!(changes.name.as_deref(), Some(""));
        assert_eq!(changes.category.as_deref(), Some(""));
    }

    #[test]
    fn update_null_status_resets_to_default() {
        let f = fields(json!({"status": null}));
        let changes = normalize_update(&f, StatusPolicy::Strict).unwrap();
        assert_eq!(changes.status.as_deref(), Some("available"));
    }

    #[test]
    fn update_rejects_bad_price() {
        let f = fields(json!({"purchasePrice": "12,50"}));
        assert_matches!(
            normalize_update(&f, StatusPolicy::Permissive),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn empty_update_has_no_changes() {
        let changes = normalize_update(&AssetFields::default(), StatusPolicy::Strict).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn price_must_be_finite() {
        assert_matches!(
            parse_price(&PriceInput::Text("inf".into())),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            parse_price(&PriceInput::Text("NaN".into())),
            Err(CoreError::Validation(_))
        );
    }
}
