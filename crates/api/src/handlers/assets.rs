//! Handlers for the asset inventory.
//!
//! Request bodies are normalized by `inventory_core::assets` before any SQL
//! runs, so a validation failure never reaches storage. Path ids are parsed
//! the same way.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use inventory_core::assets::input::{normalize_create, normalize_update, AssetFields};
use inventory_core::assets::view::{
    from_view_model, sort_by_recency, to_view_model, AssetForm, UpstreamAsset,
};
use inventory_core::assets::{parse_asset_id, ASSET_ENTITY};
use inventory_core::error::CoreError;
use inventory_core::types::DbId;
use inventory_db::models::asset::Asset;
use inventory_db::repositories::AssetRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::{DeleteAssetResponse, MSG_ASSET_DELETED};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ASSET_ENTITY,
        id,
    })
}

async fn fetch_asset(state: &AppState, id: DbId) -> AppResult<Asset> {
    AssetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

async fn insert_asset(state: &AppState, fields: &AssetFields) -> AppResult<Asset> {
    let input = normalize_create(fields, state.config.status_policy)?;
    let asset = AssetRepo::create(&state.pool, &input).await?;

    tracing::info!(
        asset_id = asset.id,
        name = %asset.name,
        category = %asset.category,
        "Asset created",
    );

    Ok(asset)
}

async fn apply_update(state: &AppState, id: DbId, fields: &AssetFields) -> AppResult<Asset> {
    let changes = normalize_update(fields, state.config.status_policy)?;
    let asset = AssetRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(asset_id = id, touched = !changes.is_empty(), "Asset updated");

    Ok(asset)
}

// ---------------------------------------------------------------------------
// Asset CRUD
// ---------------------------------------------------------------------------

/// GET /api/assets
///
/// All assets, ordered by id.
pub async fn list_assets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let assets = AssetRepo::list_all(&state.pool).await?;

    tracing::debug!(count = assets.len(), "Assets listed");

    Ok(Json(assets))
}

/// GET /api/assets/{id}
pub async fn get_asset(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_asset_id(&raw_id)?;
    let asset = fetch_asset(&state, id).await?;

    Ok(Json(asset))
}

/// POST /api/assets
///
/// Requires `name` and `category`; everything else is optional.
pub async fn create_asset(
    State(state): State<AppState>,
    AppJson(fields): AppJson<AssetFields>,
) -> AppResult<impl IntoResponse> {
    let asset = insert_asset(&state, &fields).await?;

    Ok((StatusCode::CREATED, Json(asset)))
}

/// PUT /api/assets/{id}
///
/// Partial update: keys missing from the body are left untouched.
pub async fn update_asset(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    AppJson(fields): AppJson<AssetFields>,
) -> AppResult<impl IntoResponse> {
    let id = parse_asset_id(&raw_id)?;
    let asset = apply_update(&state, id, &fields).await?;

    Ok(Json(asset))
}

/// DELETE /api/assets/{id}
///
/// Hard delete. Responds with the removed record.
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_asset_id(&raw_id)?;
    let deleted = AssetRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(asset_id = id, "Asset deleted");

    Ok(Json(DeleteAssetResponse {
        message: MSG_ASSET_DELETED,
        deleted_asset: deleted,
    }))
}

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

/// GET /api/assets/view
///
/// Display rows for the inventory table, most recently updated first.
pub async fn list_asset_views(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let assets = AssetRepo::list_all(&state.pool).await?;

    let mut views: Vec<_> = assets
        .iter()
        .map(|a| to_view_model(&UpstreamAsset::from(a)))
        .collect();
    sort_by_recency(&mut views);

    Ok(Json(views))
}

/// GET /api/assets/{id}/form
///
/// Edit-form values for an existing asset.
pub async fn get_asset_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_asset_id(&raw_id)?;
    let asset = fetch_asset(&state, id).await?;

    Ok(Json(AssetForm::from_upstream(&UpstreamAsset::from(&asset))))
}

/// POST /api/assets/form
pub async fn create_asset_from_form(
    State(state): State<AppState>,
    AppJson(form): AppJson<AssetForm>,
) -> AppResult<impl IntoResponse> {
    let fields = from_view_model(&form)?;
    let asset = insert_asset(&state, &fields).await?;

    Ok((StatusCode::CREATED, Json(asset)))
}

/// PUT /api/assets/{id}/form
///
/// Every form field is written, so blank inputs clear their columns.
pub async fn update_asset_from_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    AppJson(form): AppJson<AssetForm>,
) -> AppResult<impl IntoResponse> {
    let id = parse_asset_id(&raw_id)?;
    let fields = from_view_model(&form)?;
    let asset = apply_update(&state, id, &fields).await?;

    Ok(Json(asset))
}
