use std::sync::Arc;

use crate::config::ServerConfig;

/// Handed to every handler through `State<AppState>`; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub pool: inventory_db::DbPool,
    pub config: Arc<ServerConfig>,
}
