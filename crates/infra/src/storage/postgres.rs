//! Postgres-backed storage.

use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use barstock_core::StockItemId;
use barstock_stock_items::{NewStockItem, StockItem};

use super::{Storage, StorageError};
use crate::config::StorageConfig;

/// Postgres-backed store over a shared connection pool.
///
/// Each operation is a single statement; the pool hands out a
/// connection for the statement's duration and takes it back on every
/// exit path, success or failure.
pub struct PostgresStorage {
    pool: PgPool,
}

impl PostgresStorage {
    /// Open a connection pool using the given configuration.
    pub async fn connect(config: &StorageConfig) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
            .map_err(backend_error)?;

        Ok(Self { pool })
    }

    /// Create the `stock_items` table when it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS stock_items (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(backend_error)?;

        Ok(())
    }
}

fn backend_error(err: sqlx::Error) -> StorageError {
    StorageError::backend(err.to_string())
}

fn row_to_item(row: &PgRow) -> Result<StockItem, StorageError> {
    let id: Uuid = row.try_get("id").map_err(backend_error)?;
    let name: String = row.try_get("name").map_err(backend_error)?;
    let description: String = row.try_get("description").map_err(backend_error)?;

    Ok(StockItem {
        id: StockItemId::from_uuid(id),
        name,
        description,
    })
}

#[async_trait]
impl Storage for PostgresStorage {
    async fn insert(&self, item: NewStockItem) -> Result<StockItem, StorageError> {
        let id = StockItemId::new();

        let row = sqlx::query(
            "INSERT INTO stock_items (id, name, description) VALUES ($1, $2, $3) \
             RETURNING id, name, description",
        )
        .bind(Uuid::from(id))
        .bind(&item.name)
        .bind(&item.description)
        .fetch_one(&self.pool)
        .await
        .map_err(backend_error)?;

        row_to_item(&row)
    }

    async fn find_all(&self) -> Result<Vec<StockItem>, StorageError> {
        let rows = sqlx::query("SELECT id, name, description FROM stock_items")
            .fetch_all(&self.pool)
            .await
            .map_err(backend_error)?;

        rows.iter().map(row_to_item).collect()
    }

    async fn find_by_id(&self, id: StockItemId) -> Result<Option<StockItem>, StorageError> {
        let row = sqlx::query("SELECT id, name, description FROM stock_items WHERE id = $1")
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(backend_error)?;

        row.as_ref().map(row_to_item).transpose()
    }

    async fn update_by_id(
        &self,
        id: StockItemId,
        fields: NewStockItem,
    ) -> Result<Option<StockItem>, StorageError> {
        let row = sqlx::query(
            "UPDATE stock_items SET name = $2, description = $3 WHERE id = $1 \
             RETURNING id, name, description",
        )
        .bind(Uuid::from(id))
        .bind(&fields.name)
        .bind(&fields.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend_error)?;

        row.as_ref().map(row_to_item).transpose()
    }

    async fn delete_by_id(&self, id: StockItemId) -> Result<Option<StockItem>, StorageError> {
        let row = sqlx::query(
            "DELETE FROM stock_items WHERE id = $1 RETURNING id, name, description",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(backend_error)?;

        row.as_ref().map(row_to_item).transpose()
    }
}
