//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{order, order_item, product};
use crate::contract::{NewOrder, NewOrderItem, NewProduct, Order, OrderItem, Product};
use sea_orm::ActiveValue::{NotSet, Set};

// ===== Product Conversions =====

impl From<product::Model> for Product {
    fn from(entity: product::Model) -> Self {
        Self {
            id: entity.id,
            category: entity.category,
            size: entity.size,
            price: entity.price,
            title: entity.title,
            art_description: entity.art_description,
            art_dating: entity.art_dating,
            art_id: entity.art_id,
            artist: entity.artist,
            artist_birth_date: entity.artist_birth_date,
            artist_death_date: entity.artist_death_date,
            artist_nationality: entity.artist_nationality,
        }
    }
}

impl From<&NewProduct> for product::ActiveModel {
    fn from(model: &NewProduct) -> Self {
        Self {
            id: NotSet,
            category: Set(model.category.clone()),
            size: Set(model.size.clone()),
            price: Set(model.price),
            title: Set(model.title.clone()),
            art_description: Set(model.art_description.clone()),
            art_dating: Set(model.art_dating.clone()),
            art_id: Set(model.art_id.clone()),
            artist: Set(model.artist.clone()),
            artist_birth_date: Set(model.artist_birth_date.clone()),
            artist_death_date: Set(model.artist_death_date.clone()),
            artist_nationality: Set(model.artist_nationality.clone()),
        }
    }
}

// ===== Order Conversions =====

/// Build an order from its row and already mapped items
pub fn order_from_parts(entity: order::Model, items: Vec<OrderItem>) -> Order {
    Order {
        id: entity.id,
        order_date: entity.order_date,
        order_number: entity.order_number,
        items,
    }
}

/// Build an order item from its row and its product
pub fn order_item_from_parts(entity: order_item::Model, product: Product) -> OrderItem {
    OrderItem {
        id: entity.id,
        product,
        quantity: entity.quantity,
        unit_price: entity.unit_price,
    }
}

impl From<&NewOrder> for order::ActiveModel {
    fn from(model: &NewOrder) -> Self {
        Self {
            id: NotSet,
            order_date: Set(model.order_date.unwrap_or_else(chrono::Utc::now)),
            order_number: Set(model.order_number.clone()),
        }
    }
}

/// Build an order item row once both foreign keys are known
pub fn order_item_active_model(
    item: &NewOrderItem,
    order_id: i32,
    product_id: i32,
) -> order_item::ActiveModel {
    order_item::ActiveModel {
        id: NotSet,
        order_id: Set(order_id),
        product_id: Set(product_id),
        quantity: Set(item.quantity),
        unit_price: Set(item.unit_price),
    }
}
