//! Contract models for store service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Product listed in the store catalogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Product identifier
    pub id: i32,
    /// Catalogue category (e.g. "Print", "Mug")
    pub category: String,
    /// Size label
    pub size: String,
    /// Unit price
    pub price: Decimal,
    /// Display title
    pub title: String,
    pub art_description: String,
    pub art_dating: String,
    pub art_id: String,
    pub artist: String,
    pub artist_birth_date: String,
    pub artist_death_date: String,
    pub artist_nationality: String,
}

/// Customer order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Order identifier
    pub id: i32,
    /// Date the order was placed
    pub order_date: DateTime<Utc>,
    /// Human-facing order number
    pub order_number: String,
    /// Line items; empty when the order was loaded without items
    pub items: Vec<OrderItem>,
}

/// Order line item with its product eagerly loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub id: i32,
    pub product: Product,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// Product that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewProduct {
    pub category: String,
    pub size: String,
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

/// Order that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    /// Defaults to the time of creation when absent
    pub order_date: Option<DateTime<Utc>>,
    pub order_number: String,
    pub items: Vec<NewOrderItem>,
}

/// Line item of a [`NewOrder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderItem {
    pub product: ProductRef,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// Product reference used by an unsaved order item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductRef {
    /// Product already present in the store
    Existing(i32),
    /// Product staged earlier in the same [`ChangeSet`], by change set index
    Staged(usize),
}

/// Entity staged for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewEntity {
    Product(NewProduct),
    Order(NewOrder),
}

/// Caller-owned unit of work applied atomically by `save_all`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    entities: Vec<NewEntity>,
}

impl ChangeSet {
    /// Create an empty change set
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an entity and return its index in this change set
    pub fn add_entity(&mut self, entity: impl Into<NewEntity>) -> usize {
        self.entities.push(entity.into());
        self.entities.len() - 1
    }

    /// Staged entities in insertion order
    pub fn entities(&self) -> &[NewEntity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl From<NewProduct> for NewEntity {
    fn from(product: NewProduct) -> Self {
        Self::Product(product)
    }
}

impl From<NewOrder> for NewEntity {
    fn from(order: NewOrder) -> Self {
        Self::Order(order)
    }
}

/// Outcome of applying a [`ChangeSet`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveSummary {
    /// Number of rows written
    pub rows_affected: u64,
    /// Ids assigned to staged products, in staging order
    pub product_ids: Vec<i32>,
    /// Ids assigned to staged orders, in staging order
    pub order_ids: Vec<i32>,
}

impl SaveSummary {
    /// A save counts as successful when it wrote at least one row
    pub fn saved(&self) -> bool {
        self.rows_affected > 0
    }
}
