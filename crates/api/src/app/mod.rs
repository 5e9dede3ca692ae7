//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: service construction over the chosen storage backend
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use barstock_infra::Storage;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router over the given storage backend (public
/// entrypoint used by `main.rs` and the black-box tests).
pub fn build_app(storage: Arc<dyn Storage>) -> Router {
    let services = Arc::new(services::AppServices::new(storage));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api/stock_items", routes::stock_items::router())
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
