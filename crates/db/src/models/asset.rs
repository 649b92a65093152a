//! Asset row model.

use chrono::SecondsFormat;
use inventory_core::assets::view::UpstreamAsset;
use inventory_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `assets` table, serialized with camelCase keys.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub status: String,
    pub purchase_date: Option<Timestamp>,
    pub purchase_price: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Asset> for UpstreamAsset {
    fn from(asset: &Asset) -> Self {
        let iso = |ts: &Timestamp| ts.to_rfc3339_opts(SecondsFormat::Millis, true);
        Self {
            id: asset.id,
            name: asset.name.clone(),
            description: asset.description.clone(),
            category: asset.category.clone(),
            status: asset.status.clone(),
            purchase_date: asset.purchase_date.as_ref().map(iso),
            purchase_price: asset.purchase_price,
            created_at: Some(iso(&asset.created_at)),
            updated_at: Some(iso(&asset.updated_at)),
        }
    }
}
