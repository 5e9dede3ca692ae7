//! The stock item service: validation, identifier translation, and
//! outcome mapping over a storage backend.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use barstock_core::{DomainError, StockItemId};
use barstock_stock_items::{StockItem, StockItemInput};

use crate::storage::{Storage, StorageError};

/// Default deadline for a single storage call.
const DEFAULT_STORAGE_TIMEOUT: Duration = Duration::from_secs(10);

/// Request-facing error taxonomy.
///
/// `Display` renders the exact client-facing message for each variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Client input was missing a required field.
    #[error("{0}")]
    Validation(String),

    /// The identifier was malformed or matched no record. Carries the
    /// raw identifier string as the client sent it.
    #[error("Item not found with id {0}")]
    NotFound(String),

    /// The storage backend failed.
    #[error("{0}")]
    Storage(String),
}

impl ServiceError {
    fn not_found(raw_id: &str) -> Self {
        Self::NotFound(raw_id.to_string())
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::InvalidId(msg) => Self::Storage(msg),
        }
    }
}

/// CRUD operations for stock items over a [`Storage`] backend.
///
/// Every operation is a single step from the caller's perspective:
/// validate, translate the identifier, make one storage call under a
/// deadline, map the outcome. A malformed identifier produces the same
/// outcome as a valid-but-absent one.
#[derive(Clone)]
pub struct StockItemService {
    storage: Arc<dyn Storage>,
    storage_timeout: Duration,
}

impl StockItemService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            storage_timeout: DEFAULT_STORAGE_TIMEOUT,
        }
    }

    /// Override the per-call storage deadline.
    pub fn with_storage_timeout(mut self, timeout: Duration) -> Self {
        self.storage_timeout = timeout;
        self
    }

    pub async fn create(&self, input: StockItemInput) -> Result<StockItem, ServiceError> {
        let fields = input.validate()?;

        self.storage_call(
            self.storage.insert(fields),
            "Some error occurred while creating the Item.",
        )
        .await
    }

    pub async fn list(&self) -> Result<Vec<StockItem>, ServiceError> {
        self.storage_call(
            self.storage.find_all(),
            "Some error occurred while retrieving items.",
        )
        .await
    }

    pub async fn get(&self, raw_id: &str) -> Result<StockItem, ServiceError> {
        let Ok(id) = raw_id.parse::<StockItemId>() else {
            return Err(ServiceError::not_found(raw_id));
        };

        let found = self
            .storage_call(
                self.storage.find_by_id(id),
                &format!("Error retrieving item with id {raw_id}"),
            )
            .await?;

        found.ok_or_else(|| ServiceError::not_found(raw_id))
    }

    pub async fn update(
        &self,
        raw_id: &str,
        input: StockItemInput,
    ) -> Result<StockItem, ServiceError> {
        let fields = input.validate()?;

        let Ok(id) = raw_id.parse::<StockItemId>() else {
            return Err(ServiceError::not_found(raw_id));
        };

        let updated = self
            .storage_call(
                self.storage.update_by_id(id, fields),
                &format!("Error updating item with id {raw_id}"),
            )
            .await?;

        updated.ok_or_else(|| ServiceError::not_found(raw_id))
    }

    pub async fn delete(&self, raw_id: &str) -> Result<(), ServiceError> {
        let Ok(id) = raw_id.parse::<StockItemId>() else {
            return Err(ServiceError::not_found(raw_id));
        };

        let removed = self
            .storage_call(
                self.storage.delete_by_id(id),
                &format!("Could not delete item with id {raw_id}"),
            )
            .await?;

        match removed {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found(raw_id)),
        }
    }

    /// Run one storage call under the configured deadline.
    ///
    /// A failure keeps the backend's own message when it has one and
    /// falls back to the per-operation `fallback` otherwise.
    async fn storage_call<T>(
        &self,
        op: impl Future<Output = Result<T, StorageError>>,
        fallback: &str,
    ) -> Result<T, ServiceError> {
        let outcome = match tokio::time::timeout(self.storage_timeout, op).await {
            Ok(outcome) => outcome,
            Err(_) => Err(StorageError::Timeout),
        };

        outcome.map_err(|err| {
            tracing::error!(error = %err, "storage call failed");

            let message = err.to_string();
            if message.is_empty() {
                ServiceError::Storage(fallback.to_string())
            } else {
                ServiceError::Storage(message)
            }
        })
    }
}
