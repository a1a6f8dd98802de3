//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains all From/Into implementations for bidirectional
//! conversion between REST DTOs and transport-agnostic contract models.

use super::dto::*;
use crate::contract;

// ===== Product conversions =====

impl From<contract::Product> for ProductDto {
    fn from(product: contract::Product) -> Self {
        Self {
            id: product.id,
            category: product.category,
            size: product.size,
            price: product.price,
            title: product.title,
            art_description: product.art_description,
            art_dating: product.art_dating,
            art_id: product.art_id,
            artist: product.artist,
            artist_birth_date: product.artist_birth_date,
            artist_death_date: product.artist_death_date,
            artist_nationality: product.artist_nationality,
        }
    }
}

impl From<CreateProductRequest> for contract::NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            category: req.category,
            size: req.size,
            price: req.price,
            title: req.title,
            art_description: req.art_description,
            art_dating: req.art_dating,
            art_id: req.art_id,
            artist: req.artist,
            artist_birth_date: req.artist_birth_date,
            artist_death_date: req.artist_death_date,
            artist_nationality: req.artist_nationality,
        }
    }
}

// ===== Order conversions =====

impl From<contract::Order> for OrderDto {
    fn from(order: contract::Order) -> Self {
        Self {
            order_id: order.id,
            order_date: order.order_date,
            order_number: order.order_number,
            items: order.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<contract::OrderItem> for OrderItemDto {
    fn from(item: contract::OrderItem) -> Self {
        Self {
            id: item.id,
            quantity: item.quantity,
            unit_price: item.unit_price,
            product_id: item.product.id,
            product_category: item.product.category,
            product_size: item.product.size,
            product_title: item.product.title,
            product_artist: item.product.artist,
            product_art_id: item.product.art_id,
        }
    }
}

impl From<CreateOrderRequest> for contract::NewOrder {
    fn from(req: CreateOrderRequest) -> Self {
        Self {
            order_date: req.order_date,
            order_number: req.order_number,
            items: req.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CreateOrderItemRequest> for contract::NewOrderItem {
    fn from(req: CreateOrderItemRequest) -> Self {
        Self {
            product: contract::ProductRef::Existing(req.product_id),
            quantity: req.quantity,
            unit_price: req.unit_price,
        }
    }
}
