use std::sync::Arc;

use barstock_infra::{InMemoryStorage, PostgresStorage, Storage, StorageConfig};

#[tokio::main]
async fn main() {
    barstock_observability::init();

    let storage: Arc<dyn Storage> = match std::env::var("DATABASE_URL") {
        Ok(url) => {
            let config = StorageConfig::new(url);
            let storage = PostgresStorage::connect(&config)
                .await
                .expect("failed to connect to postgres");
            storage
                .ensure_schema()
                .await
                .expect("failed to prepare the stock_items table");
            Arc::new(storage)
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; using in-memory storage");
            Arc::new(InMemoryStorage::new())
        }
    };

    let app = barstock_api::app::build_app(storage);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(8000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("failed to bind listen port");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
