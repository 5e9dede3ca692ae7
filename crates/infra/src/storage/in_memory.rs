//! In-memory storage for tests and database-less dev runs.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use barstock_core::StockItemId;
use barstock_stock_items::{NewStockItem, StockItem};

use super::{Storage, StorageError};

type ItemMap = HashMap<StockItemId, StockItem>;

/// In-memory store backed by a `HashMap`.
///
/// `find_all` iterates the map, so its order is arbitrary — the
/// contract leaves list order unspecified.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    inner: RwLock<ItemMap>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, ItemMap>, StorageError> {
        self.inner
            .read()
            .map_err(|_| StorageError::backend("storage lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, ItemMap>, StorageError> {
        self.inner
            .write()
            .map_err(|_| StorageError::backend("storage lock poisoned"))
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn insert(&self, item: NewStockItem) -> Result<StockItem, StorageError> {
        let stored = StockItem {
            id: StockItemId::new(),
            name: item.name,
            description: item.description,
        };

        self.write()?.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<StockItem>, StorageError> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn find_by_id(&self, id: StockItemId) -> Result<Option<StockItem>, StorageError> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn update_by_id(
        &self,
        id: StockItemId,
        fields: NewStockItem,
    ) -> Result<Option<StockItem>, StorageError> {
        let mut map = self.write()?;
        match map.get_mut(&id) {
            Some(item) => {
                item.name = fields.name;
                item.description = fields.description;
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: StockItemId) -> Result<Option<StockItem>, StorageError> {
        Ok(self.write()?.remove(&id))
    }
}
