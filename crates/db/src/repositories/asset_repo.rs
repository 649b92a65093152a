//! Repository for the `assets` table.
//!
//! Inputs arrive already normalized by `inventory_core::assets::input`; this
//! layer only maps them onto single-statement SQL.

use inventory_core::assets::input::{AssetChanges, NewAsset};
use inventory_core::types::DbId;
use sqlx::PgPool;

use crate::models::asset::Asset;

/// Column list for `assets` queries.
const COLUMNS: &str = "\
    id, name, description, category, status, \
    purchase_date, purchase_price, created_at, updated_at";

/// Provides CRUD operations for assets.
pub struct AssetRepo;

impl AssetRepo {
    /// List every asset, ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets ORDER BY id ASC");
        sqlx::query_as::<_, Asset>(&query).fetch_all(pool).await
    }

    /// Find an asset by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new asset. The database assigns the id and both timestamps.
    pub async fn create(pool: &PgPool, input: &NewAsset) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets \
                (name, description, category, status, purchase_date, purchase_price) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&input.name)
            .bind(input.description.as_deref())
            .bind(&input.category)
            .bind(&input.status)
            .bind(input.purchase_date)
            .bind(input.purchase_price)
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update. `updated_at` is refreshed even when no other
    /// column changes.
    ///
    /// Non-nullable columns use `COALESCE`. Nullable columns take a
    /// "provided" flag plus a value so that an explicit clear can be told
    /// apart from "leave as is".
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &AssetChanges,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET \
                name           = COALESCE($2, name), \
                description    = CASE WHEN $3 THEN $4 ELSE description END, \
                category       = COALESCE($5, category), \
                status         = COALESCE($6, status), \
                purchase_date  = CASE WHEN $7 THEN $8 ELSE purchase_date END, \
                purchase_price = CASE WHEN $9 THEN $10 ELSE purchase_price END, \
                updated_at     = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(changes.name.as_deref())
            .bind(changes.description.is_some())
            .bind(changes.description.as_ref().and_then(|v| v.as_deref()))
            .bind(changes.category.as_deref())
            .bind(changes.status.as_deref())
            .bind(changes.purchase_date.is_some())
            .bind(changes.purchase_date.flatten())
            .bind(changes.purchase_price.is_some())
            .bind(changes.purchase_price.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete an asset, returning the removed row if there was one.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("DELETE FROM assets WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count all assets.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM assets")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
