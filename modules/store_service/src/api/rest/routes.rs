//! Route registration for the store REST API

use super::{dto::*, error::Problem, handlers};
use crate::domain::Service;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Json, Path, Query,
    },
    routing::get,
    Extension, Router,
};
use std::sync::Arc;

/// Register all REST routes under `/api`
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let api = Router::new()
        // Product endpoints
        .route(
            "/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route("/products/{id}", get(get_product_handler))
        .route(
            "/products/category/{category}",
            get(list_products_by_category_handler),
        )
        // Order endpoints
        .route("/orders", get(list_orders_handler).post(create_order_handler))
        .route("/orders/{id}", get(get_order_handler))
        // Add service as extension for handlers
        .layer(Extension(service));

    router.nest("/api", api)
}

// ===== Handler wrappers that extract service from Extension =====
//
// Extractor rejections are turned into Problem documents before the
// handlers run.

async fn list_products_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<ProductDto>>, Problem> {
    handlers::list_products(service).await
}

async fn get_product_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<ProductDto>, Problem> {
    handlers::get_product(service, path?).await
}

async fn list_products_by_category_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<ProductDto>>, Problem> {
    handlers::list_products_by_category(service, path?).await
}

async fn create_product_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<handlers::Created<ProductDto>, Problem> {
    handlers::create_product(service, json?).await
}

async fn list_orders_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Result<Query<handlers::ListOrdersQuery>, QueryRejection>,
) -> Result<Json<Vec<OrderDto>>, Problem> {
    handlers::list_orders(service, query?).await
}

async fn get_order_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<OrderDto>, Problem> {
    handlers::get_order(service, path?).await
}

async fn create_order_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<handlers::Created<OrderDto>, Problem> {
    handlers::create_order(service, json?).await
}
