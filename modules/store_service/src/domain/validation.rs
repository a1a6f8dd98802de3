//! Input validation for new products and orders

use crate::contract::{NewOrder, NewProduct, StoreError};
use rust_decimal::Decimal;

/// Minimum length of an order number after trimming
pub const MIN_ORDER_NUMBER_LEN: usize = 4;

/// Validate a new order before it is staged
///
/// Rules:
/// - order number has at least [`MIN_ORDER_NUMBER_LEN`] characters
/// - at least one item
/// - every item has a positive quantity and a non-negative unit price
pub fn validate_new_order(order: &NewOrder) -> Result<(), StoreError> {
    let order_number = order.order_number.trim();
    if order_number.chars().count() < MIN_ORDER_NUMBER_LEN {
        return Err(StoreError::validation(format!(
            "orderNumber must be at least {MIN_ORDER_NUMBER_LEN} characters"
        )));
    }

    if order.items.is_empty() {
        return Err(StoreError::validation("order must contain at least one item"));
    }

    for (index, item) in order.items.iter().enumerate() {
        if item.quantity < 1 {
            return Err(StoreError::validation(format!(
                "items[{index}].quantity must be at least 1"
            )));
        }
        if item.unit_price < Decimal::ZERO {
            return Err(StoreError::validation(format!(
                "items[{index}].unitPrice cannot be negative"
            )));
        }
    }

    Ok(())
}

/// Validate a new product before it is staged
pub fn validate_new_product(product: &NewProduct) -> Result<(), StoreError> {
    if product.title.trim().is_empty() {
        return Err(StoreError::validation("title cannot be empty"));
    }

    if product.category.trim().is_empty() {
        return Err(StoreError::validation("category cannot be empty"));
    }

    if product.price < Decimal::ZERO {
        return Err(StoreError::validation("price cannot be negative"));
    }

    Ok(())
}
