//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    http::{header, StatusCode},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// 201 response carrying the new resource's location
pub type Created<T> = (StatusCode, [(header::HeaderName, String); 1], Json<T>);

fn created<T>(location: String, body: T) -> Created<T> {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(body))
}

// ===== Product Handlers =====

/// List all products ordered by title
pub async fn list_products(service: Arc<Service>) -> Result<Json<Vec<ProductDto>>, Problem> {
    let products = service.get_all_products().await.ok_or_else(|| {
        Problem::new(StatusCode::BAD_REQUEST, "Bad Request").with_detail("Failed to get products")
    })?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// Get a specific product
pub async fn get_product(
    service: Arc<Service>,
    Path(id): Path<i32>,
) -> Result<Json<ProductDto>, Problem> {
    let product = service.get_product(id).await.map_err(map_domain_error)?;

    Ok(Json(product.into()))
}

/// List the products of one category
pub async fn list_products_by_category(
    service: Arc<Service>,
    Path(category): Path<String>,
) -> Result<Json<Vec<ProductDto>>, Problem> {
    let products = service
        .get_products_by_category(&category)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// Create a product
pub async fn create_product(
    service: Arc<Service>,
    Json(req): Json<CreateProductRequest>,
) -> Result<Created<ProductDto>, Problem> {
    let product = service
        .create_product(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(created(format!("/api/products/{}", product.id), product.into()))
}

// ===== Order Handlers =====

/// Query parameters for listing orders
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOrdersQuery {
    /// Load items and their products (default: true)
    #[serde(default = "default_include_items")]
    pub include_items: bool,
}

fn default_include_items() -> bool {
    true
}

/// List all orders
pub async fn list_orders(
    service: Arc<Service>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<Vec<OrderDto>>, Problem> {
    let orders = service
        .get_all_orders(query.include_items)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

/// Get a specific order with its items
pub async fn get_order(
    service: Arc<Service>,
    Path(id): Path<i32>,
) -> Result<Json<OrderDto>, Problem> {
    let order = service.get_order(id).await.map_err(map_domain_error)?;

    Ok(Json(order.into()))
}

/// Place a new order
pub async fn create_order(
    service: Arc<Service>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Created<OrderDto>, Problem> {
    let order = service
        .create_order(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(created(format!("/api/orders/{}", order.id), order.into()))
}
