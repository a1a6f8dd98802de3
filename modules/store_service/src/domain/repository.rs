//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{ChangeSet, Order, Product, SaveSummary};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for products and orders
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// List all orders ordered by id, optionally with items and their products
    async fn get_all_orders(&self, include_items: bool) -> Result<Vec<Order>>;

    /// List all products ordered by title
    async fn get_all_products(&self) -> Result<Vec<Product>>;

    /// Find an order by id, with items and their products
    async fn get_order_by_id(&self, id: i32) -> Result<Option<Order>>;

    /// List products in a category, ordered by title
    async fn get_products_by_category(&self, category: &str) -> Result<Vec<Product>>;

    /// Find a product by id
    async fn get_product_by_id(&self, id: i32) -> Result<Option<Product>>;

    /// Check whether any product is stored
    async fn any_products(&self) -> Result<bool>;

    /// Apply a change set atomically
    async fn save_all(&self, changes: ChangeSet) -> Result<SaveSummary>;
}
