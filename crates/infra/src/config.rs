//! Explicit storage configuration.

/// Connection settings for the Postgres backend.
///
/// Constructed once at process start and passed into
/// `PostgresStorage::connect`; nothing in the storage layer reads
/// ambient configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Connection string, including the database name.
    pub url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl StorageConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
        }
    }
}
