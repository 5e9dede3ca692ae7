use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_item).get(list_items))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::StockItemBody>,
) -> axum::response::Response {
    match services.stock_items().create(body.into_input()).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(err) => errors::service_error_to_response(err),
    }
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.stock_items().list().await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(err) => errors::service_error_to_response(err),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.stock_items().get(&id).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(err) => errors::service_error_to_response(err),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::StockItemBody>,
) -> axum::response::Response {
    match services.stock_items().update(&id, body.into_input()).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(err) => errors::service_error_to_response(err),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.stock_items().delete(&id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Item deleted successfully!" })),
        )
            .into_response(),
        Err(err) => errors::service_error_to_response(err),
    }
}
