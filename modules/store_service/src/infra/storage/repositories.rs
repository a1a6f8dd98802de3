//! SeaORM repository implementations

use crate::contract::{ChangeSet, NewEntity, Order, Product, ProductRef, SaveSummary};
use crate::domain::repository::StoreRepository;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use super::entity::{order, order_item, product};
use super::mapper::{order_from_parts, order_item_active_model, order_item_from_parts};

pub struct SeaOrmStoreRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmStoreRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Load the items of `orders` together with their products
async fn with_items<C: ConnectionTrait>(db: &C, orders: Vec<order::Model>) -> Result<Vec<Order>> {
    if orders.is_empty() {
        return Ok(Vec::new());
    }

    let order_ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
    let items = order_item::Entity::find()
        .filter(order_item::Column::OrderId.is_in(order_ids))
        .order_by_asc(order_item::Column::Id)
        .all(db)
        .await?;

    let product_ids: BTreeSet<i32> = items.iter().map(|i| i.product_id).collect();
    let products: HashMap<i32, Product> = if product_ids.is_empty() {
        HashMap::new()
    } else {
        product::Entity::find()
            .filter(product::Column::Id.is_in(product_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|p| (p.id, Product::from(p)))
            .collect()
    };

    let mut by_order: HashMap<i32, Vec<_>> = HashMap::new();
    for item in items {
        let product = products.get(&item.product_id).cloned().ok_or_else(|| {
            anyhow!(
                "order item {} references missing product {}",
                item.id,
                item.product_id
            )
        })?;
        by_order
            .entry(item.order_id)
            .or_default()
            .push(order_item_from_parts(item, product));
    }

    Ok(orders
        .into_iter()
        .map(|o| {
            let items = by_order.remove(&o.id).unwrap_or_default();
            order_from_parts(o, items)
        })
        .collect())
}

#[async_trait]
impl StoreRepository for SeaOrmStoreRepository {
    async fn get_all_orders(&self, include_items: bool) -> Result<Vec<Order>> {
        let orders = order::Entity::find()
            .order_by_asc(order::Column::Id)
            .all(&*self.db)
            .await?;

        if include_items {
            with_items(&*self.db, orders).await
        } else {
            Ok(orders
                .into_iter()
                .map(|o| order_from_parts(o, Vec::new()))
                .collect())
        }
    }

    async fn get_all_products(&self) -> Result<Vec<Product>> {
        let results = product::Entity::find()
            .order_by_asc(product::Column::Title)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn get_order_by_id(&self, id: i32) -> Result<Option<Order>> {
        let Some(found) = order::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };

        Ok(with_items(&*self.db, vec![found]).await?.pop())
    }

    async fn get_products_by_category(&self, category: &str) -> Result<Vec<Product>> {
        let results = product::Entity::find()
            .filter(product::Column::Category.eq(category))
            .order_by_asc(product::Column::Title)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn get_product_by_id(&self, id: i32) -> Result<Option<Product>> {
        let result = product::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(Into::into))
    }

    async fn any_products(&self) -> Result<bool> {
        let count = product::Entity::find().count(&*self.db).await?;

        Ok(count > 0)
    }

    async fn save_all(&self, changes: ChangeSet) -> Result<SaveSummary> {
        let mut summary = SaveSummary::default();
        if changes.is_empty() {
            return Ok(summary);
        }

        // Dropping the transaction on an early return rolls it back
        let txn = self.db.begin().await.context("failed to begin transaction")?;

        // change set index -> assigned product id
        let mut staged: HashMap<usize, i32> = HashMap::new();

        for (index, entity) in changes.entities().iter().enumerate() {
            if let NewEntity::Product(new_product) = entity {
                let active: product::ActiveModel = new_product.into();
                let id = product::Entity::insert(active)
                    .exec(&txn)
                    .await
                    .with_context(|| format!("failed to insert product '{}'", new_product.title))?
                    .last_insert_id;

                staged.insert(index, id);
                summary.product_ids.push(id);
                summary.rows_affected += 1;
            }
        }

        for entity in changes.entities() {
            let NewEntity::Order(new_order) = entity else {
                continue;
            };

            let active: order::ActiveModel = new_order.into();
            let order_id = order::Entity::insert(active)
                .exec(&txn)
                .await
                .with_context(|| format!("failed to insert order '{}'", new_order.order_number))?
                .last_insert_id;
            summary.rows_affected += 1;

            for item in &new_order.items {
                let product_id = match item.product {
                    ProductRef::Existing(id) => id,
                    ProductRef::Staged(index) => *staged.get(&index).ok_or_else(|| {
                        anyhow!("change set entry {index} is not a staged product")
                    })?,
                };

                order_item::Entity::insert(order_item_active_model(item, order_id, product_id))
                    .exec(&txn)
                    .await
                    .with_context(|| {
                        format!("failed to insert item for product {product_id} on order {order_id}")
                    })?;
                summary.rows_affected += 1;
            }

            summary.order_ids.push(order_id);
        }

        txn.commit().await.context("failed to commit transaction")?;

        tracing::debug!(
            rows = summary.rows_affected,
            products = summary.product_ids.len(),
            orders = summary.order_ids.len(),
            "Change set saved"
        );
        Ok(summary)
    }
}
