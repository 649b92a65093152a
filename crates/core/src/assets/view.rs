//! Presentation adapter for the inventory screens.
//!
//! Turns stored asset records into display rows ([`AssetView`]), edit forms
//! into write payloads ([`AssetForm`] -> [`AssetFields`]), and reconciles the
//! snake_case/camelCase field spellings seen from different upstream sources.

use std::cmp::Reverse;

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use super::input::{parse_price, parse_timestamp, AssetFields, PriceInput};
use super::status::{status_class, status_label, DEFAULT_STATUS};
use crate::error::CoreError;
use crate::types::DbId;

/// Shown in place of a missing or unparseable value.
pub const PLACEHOLDER: &str = "-";

/// An asset record as delivered by an upstream source.
///
/// Timestamps are kept as strings so a malformed value degrades to the
/// placeholder instead of rejecting the whole record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawUpstreamAsset")]
pub struct UpstreamAsset {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub status: String,
    pub purchase_date: Option<String>,
    pub purchase_price: Option<f64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Wire shape carrying both spellings of the multi-word fields.
#[derive(Deserialize)]
struct RawUpstreamAsset {
    id: DbId,
    name: String,
    #[serde(default)]
    description: Option<String>,
    category: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default, rename = "purchaseDate")]
    purchase_date_camel: Option<String>,
    #[serde(default)]
    purchase_date: Option<String>,
    #[serde(default, rename = "purchasePrice")]
    purchase_price_camel: Option<f64>,
    #[serde(default)]
    purchase_price: Option<f64>,
    #[serde(default, rename = "createdAt")]
    created_at_camel: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default, rename = "updatedAt")]
    updated_at_camel: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

impl From<RawUpstreamAsset> for UpstreamAsset {
    fn from(raw: RawUpstreamAsset) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            category: raw.category,
            status: raw.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            purchase_date: raw.purchase_date_camel.or(raw.purchase_date),
            purchase_price: raw.purchase_price_camel.or(raw.purchase_price),
            created_at: raw.created_at_camel.or(raw.created_at),
            updated_at: raw.updated_at_camel.or(raw.updated_at),
        }
    }
}

/// One row of the inventory table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetView {
    pub id: DbId,
    pub name: String,
    /// The description, labelled "Department" on screen.
    pub department: String,
    pub category: String,
    pub status: String,
    pub status_label: String,
    pub status_class: &'static str,
    pub purchase_date: String,
    pub purchase_price: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// The add/edit form, with every input as the string the user typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetForm {
    pub name: String,
    pub department: String,
    pub category: String,
    pub status: String,
    pub purchase_date: String,
    pub purchase_price: String,
}

impl AssetForm {
    /// Prefill the edit form from a stored record.
    pub fn from_upstream(asset: &UpstreamAsset) -> Self {
        Self {
            name: asset.name.clone(),
            department: asset.description.clone().unwrap_or_default(),
            category: asset.category.clone(),
            status: asset.status.clone(),
            purchase_date: asset
                .purchase_date
                .as_deref()
                .and_then(parse_timestamp)
                .map(|ts| ts.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            purchase_price: asset
                .purchase_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Project a record into its display row.
pub fn to_view_model(asset: &UpstreamAsset) -> AssetView {
    AssetView {
        id: asset.id,
        name: asset.name.clone(),
        department: asset
            .description
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        category: asset.category.clone(),
        status: asset.status.clone(),
        status_label: status_label(&asset.status).to_string(),
        status_class: status_class(&asset.status),
        purchase_date: format_date(asset.purchase_date.as_deref()),
        purchase_price: format_price(asset.purchase_price),
        created_at: asset.created_at.clone(),
        updated_at: asset.updated_at.clone(),
    }
}

/// Convert a submitted form into a full write payload.
///
/// Every field is present in the result, so applying it as an update
/// replaces the whole record.
pub fn from_view_model(form: &AssetForm) -> Result<AssetFields, CoreError> {
    let name = form.name.trim();
    let category = form.category.trim();
    if name.is_empty() || category.is_empty() {
        return Err(CoreError::Validation(
            "Please provide at least a name and category before saving.".to_string(),
        ));
    }

    let department = form.department.trim();
    let description = (!department.is_empty()).then(|| department.to_string());

    let status = form.status.trim();
    let status = (!status.is_empty()).then(|| status.to_string());

    let purchase_date = match form.purchase_date.trim() {
        "" => None,
        raw => {
            let ts = parse_timestamp(raw).ok_or_else(|| {
                CoreError::Validation(format!("Invalid purchase date '{raw}'"))
            })?;
            Some(ts.to_rfc3339_opts(SecondsFormat::Millis, true))
        }
    };

    let purchase_price =
        parse_price(&PriceInput::Text(form.purchase_price.clone()))?.map(PriceInput::Number);

    Ok(AssetFields {
        name: Some(Some(name.to_string())),
        description: Some(description),
        category: Some(Some(category.to_string())),
        status: Some(status),
        purchase_date: Some(purchase_date),
        purchase_price: Some(purchase_price),
    })
}

/// Order rows most recently touched first.
///
/// A row's time is `updatedAt`, or `createdAt` when `updatedAt` is missing or
/// empty. Rows whose time does not parse go after every dated row, highest
/// id first; the id also breaks ties between equal times.
pub fn sort_by_recency(views: &mut [AssetView]) {
    views.sort_by_key(|v| Reverse((recency_millis(v), v.id)));
}

fn recency_millis(view: &AssetView) -> Option<i64> {
    view.updated_at
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(view.created_at.as_deref())
        .and_then(parse_timestamp)
        .map(|ts| ts.timestamp_millis())
}

/// Two decimals with thousands separators, e.g. `1,234.50`.
pub fn format_price(price: Option<f64>) -> String {
    let Some(price) = price.filter(|p| p.is_finite()) else {
        return PLACEHOLDER.to_string();
    };

    let fixed = format!("{:.2}", price.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if price < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// US-style calendar date (`M/D/YYYY`) in UTC.
pub fn format_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|ts| ts.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}
