use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use mercadofacil_core::ProductId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(alter_product).delete(delete_product),
        )
}

fn parse_id(raw: &str) -> Result<ProductId, axum::response::Response> {
    raw.parse().map_err(errors::domain_error_to_response)
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.repository().find_all() {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// Store a new product under a fresh id. Not validated; only alterations are.
pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    match services.repository().save(body.into_product(ProductId::new(0))) {
        Ok(created) => {
            tracing::info!(product_id = %created.id, "product created");
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    match services.repository().find(id) {
        Some(product) => (StatusCode::OK, Json(product)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}

/// Replace product `id` with the request body, if it passes validation.
pub async fn alter_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    match services.products().alter(body.into_product(id)) {
        Ok(committed) => (StatusCode::OK, Json(committed)).into_response(),
        Err(e) => errors::alter_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    let Some(product) = services.repository().find(id) else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found");
    };
    match services.repository().delete(&product) {
        Ok(()) => {
            tracing::info!(product_id = %id, "product deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
