//! Route definitions for the asset inventory.
//!
//! All routes are mounted under `/assets`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Asset routes mounted at `/assets`.
///
/// ```text
/// GET    /            -> list_assets
/// POST   /            -> create_asset
/// GET    /view        -> list_asset_views
/// POST   /form        -> create_asset_from_form
/// GET    /{id}        -> get_asset
/// PUT    /{id}        -> update_asset
/// DELETE /{id}        -> delete_asset
/// GET    /{id}/form   -> get_asset_form
/// PUT    /{id}/form   -> update_asset_from_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list_assets).post(assets::create_asset))
        .route("/view", get(assets::list_asset_views))
        .route("/form", post(assets::create_asset_from_form))
        .route(
            "/{id}",
            get(assets::get_asset)
                .put(assets::update_asset)
                .delete(assets::delete_asset),
        )
        .route(
            "/{id}/form",
            get(assets::get_asset_form).put(assets::update_asset_from_form),
        )
}
