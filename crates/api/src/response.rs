//! Response bodies that are more than a bare record.

use inventory_db::models::asset::Asset;
use serde::Serialize;

/// Confirmation message returned by a successful delete.
pub const MSG_ASSET_DELETED: &str = "Asset deleted successfully";

/// `DELETE /api/assets/{id}` response: a message plus the removed record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAssetResponse {
    pub message: &'static str,
    pub deleted_asset: Asset,
}

/// Body of the root banner and the API smoke-test endpoint.
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    pub message: &'static str,
}
