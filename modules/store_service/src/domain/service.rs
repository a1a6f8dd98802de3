//! Domain service - business logic orchestration

use super::repository::StoreRepository;
use super::validation::{validate_new_order, validate_new_product};
use crate::contract::{
    ChangeSet, NewOrder, NewProduct, Order, Product, ProductRef, SaveSummary, StoreError,
};
use std::sync::Arc;

/// Domain service for the product catalogue and orders
pub struct Service {
    repo: Arc<dyn StoreRepository>,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn StoreRepository>) -> Self {
        Self { repo }
    }

    // ===== Product Operations =====

    /// Get all products ordered by title
    ///
    /// Storage failures are logged and reported as `None` rather than as an
    /// error, so callers only learn that the listing is unavailable.
    pub async fn get_all_products(&self) -> Option<Vec<Product>> {
        tracing::info!("get_all_products was called");

        match self.repo.get_all_products().await {
            Ok(products) => Some(products),
            Err(e) => {
                tracing::error!(error = %format!("{e:#}"), "Failed to get all products");
                None
            }
        }
    }

    /// Get all products in a category
    pub async fn get_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, StoreError> {
        self.repo
            .get_products_by_category(category)
            .await
            .map_err(|e| StoreError::internal(&e))
    }

    /// Get a product by id
    pub async fn get_product(&self, id: i32) -> Result<Product, StoreError> {
        self.repo
            .get_product_by_id(id)
            .await
            .map_err(|e| StoreError::internal(&e))?
            .ok_or_else(|| StoreError::not_found("product", id))
    }

    /// Validate and store a new product
    pub async fn create_product(&self, product: NewProduct) -> Result<Product, StoreError> {
        validate_new_product(&product)?;

        let mut changes = ChangeSet::new();
        changes.add_entity(product);

        let summary = self.commit(changes).await?;
        let id = summary
            .product_ids
            .first()
            .copied()
            .ok_or_else(|| StoreError::Conflict {
                reason: "product was not saved".to_string(),
            })?;

        tracing::info!(product_id = id, "Product created");
        self.get_product(id).await
    }

    // ===== Order Operations =====

    /// Get all orders, optionally with their items
    pub async fn get_all_orders(&self, include_items: bool) -> Result<Vec<Order>, StoreError> {
        self.repo
            .get_all_orders(include_items)
            .await
            .map_err(|e| StoreError::internal(&e))
    }

    /// Get an order by id with its items
    pub async fn get_order(&self, id: i32) -> Result<Order, StoreError> {
        self.repo
            .get_order_by_id(id)
            .await
            .map_err(|e| StoreError::internal(&e))?
            .ok_or_else(|| StoreError::not_found("order", id))
    }

    /// Validate and store a new order, returning it as stored
    pub async fn create_order(&self, order: NewOrder) -> Result<Order, StoreError> {
        validate_new_order(&order)?;

        for item in &order.items {
            if let ProductRef::Existing(product_id) = item.product {
                let exists = self
                    .repo
                    .get_product_by_id(product_id)
                    .await
                    .map_err(|e| StoreError::internal(&e))?
                    .is_some();
                if !exists {
                    return Err(StoreError::validation(format!(
                        "product {product_id} does not exist"
                    )));
                }
            }
        }

        let order = NewOrder {
            order_date: Some(order.order_date.unwrap_or_else(chrono::Utc::now)),
            ..order
        };

        let mut changes = ChangeSet::new();
        changes.add_entity(order);

        let summary = self.commit(changes).await?;
        let id = summary
            .order_ids
            .first()
            .copied()
            .ok_or_else(|| StoreError::Conflict {
                reason: "order was not saved".to_string(),
            })?;

        tracing::info!(order_id = id, rows = summary.rows_affected, "Order created");
        self.get_order(id).await
    }

    // ===== Unit of Work =====

    /// Save a change set; true when at least one row was written
    pub async fn save_all(&self, changes: ChangeSet) -> Result<bool, StoreError> {
        self.repo
            .save_all(changes)
            .await
            .map(|summary| summary.saved())
            .map_err(|e| StoreError::internal(&e))
    }

    /// Check whether the catalogue has any product
    pub async fn any_products(&self) -> Result<bool, StoreError> {
        self.repo
            .any_products()
            .await
            .map_err(|e| StoreError::internal(&e))
    }

    async fn commit(&self, changes: ChangeSet) -> Result<SaveSummary, StoreError> {
        let summary = self
            .repo
            .save_all(changes)
            .await
            .map_err(|e| StoreError::internal(&e))?;

        if !summary.saved() {
            return Err(StoreError::Conflict {
                reason: "no rows were written".to_string(),
            });
        }
        Ok(summary)
    }
}
