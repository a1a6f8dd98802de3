//! REST DTOs with serde derives for HTTP API

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Product DTOs =====

/// Product response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i32,

    #[schema(example = "Print")]
    pub category: String,

    #[schema(example = "11x17")]
    pub size: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 19.99)]
    pub price: Decimal,

    pub title: String,
    pub art_description: String,
    pub art_dating: String,
    pub art_id: String,
    pub artist: String,
    pub artist_birth_date: String,
    pub artist_death_date: String,
    pub artist_nationality: String,
}

/// Create product request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub category: String,

    #[serde(default)]
    pub size: String,

    #[schema(value_type = f64)]
    pub price: Decimal,

    pub title: String,

    #[serde(default)]
    pub art_description: String,
    #[serde(default)]
    pub art_dating: String,
    #[serde(default)]
    pub art_id: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub artist_birth_date: String,
    #[serde(default)]
    pub artist_death_date: String,
    #[serde(default)]
    pub artist_nationality: String,
}

// ===== Order DTOs =====

/// Order response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub order_id: i32,

    pub order_date: DateTime<Utc>,

    #[schema(example = "10000")]
    pub order_number: String,

    pub items: Vec<OrderItemDto>,
}

/// Order item response DTO, flattened with its product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub id: i32,
    pub quantity: i32,

    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub unit_price: Decimal,

    pub product_id: i32,
    pub product_category: String,
    pub product_size: String,
    pub product_title: String,
    pub product_artist: String,
    pub product_art_id: String,
}

/// Create order request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Defaults to the current time
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,

    #[schema(example = "10001")]
    pub order_number: String,

    #[serde(default)]
    pub items: Vec<CreateOrderItemRequest>,
}

/// Line item of a create order request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItemRequest {
    pub product_id: i32,
    pub quantity: i32,

    #[schema(value_type = f64)]
    pub unit_price: Decimal,
}

// Note: Conversion implementations live in mapper.rs
