//! Contract layer - public models and errors
//!
//! This layer contains transport-agnostic models shared by the domain, storage
//! and REST layers.
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::StoreError;
pub use model::{
    ChangeSet, NewEntity, NewOrder, NewOrderItem, NewProduct, Order, OrderItem, Product,
    ProductRef, SaveSummary,
};
