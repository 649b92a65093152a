pub mod assets;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /test                      smoke-test endpoint
///
/// /assets                    list, create
/// /assets/view               display rows
/// /assets/form               create from form
/// /assets/{id}               get, update, delete
/// /assets/{id}/form          edit-form prefill, update from form
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/test", get(handlers::health::api_test))
        .nest("/assets", assets::router())
}
