//! Storage backends for stock items.

use async_trait::async_trait;
use thiserror::Error;

use barstock_core::StockItemId;
use barstock_stock_items::{NewStockItem, StockItem};

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryStorage;
pub use postgres::PostgresStorage;

/// Storage operation error.
///
/// Infrastructure failures only. Absent records are not errors at this
/// layer; lookups return `Ok(None)`.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend reported a failure; the payload is its message.
    #[error("{0}")]
    Backend(String),

    /// The backend did not answer within the configured deadline.
    #[error("storage operation timed out")]
    Timeout,
}

impl StorageError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Record store addressed by stock item identifier.
///
/// The backend is the sole owner of persisted state. Identifiers are
/// assigned during `insert`; the mutating operations return the
/// affected record, or `None` when no record matches.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Persist a new record and return it with its assigned id.
    async fn insert(&self, item: NewStockItem) -> Result<StockItem, StorageError>;

    /// Every persisted record, in the backend's natural order.
    async fn find_all(&self) -> Result<Vec<StockItem>, StorageError>;

    async fn find_by_id(&self, id: StockItemId) -> Result<Option<StockItem>, StorageError>;

    /// Replace `name` and `description` of the matching record and
    /// return the updated record.
    async fn update_by_id(
        &self,
        id: StockItemId,
        fields: NewStockItem,
    ) -> Result<Option<StockItem>, StorageError>;

    /// Remove the matching record and return it.
    async fn delete_by_id(&self, id: StockItemId) -> Result<Option<StockItem>, StorageError>;
}
