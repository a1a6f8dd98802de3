//! Store Service Module
//!
//! Product catalogue and customer orders over a relational store, exposed
//! through a JSON REST API.

// Public exports
pub mod contract;
pub use contract::{
    ChangeSet, NewEntity, NewOrder, NewOrderItem, NewProduct, Order, OrderItem, Product,
    ProductRef, SaveSummary, StoreError,
};

pub mod module;
pub use module::StoreServiceModule;

pub mod config;
pub use config::{Config, SeedConfig};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
pub use api::rest::error::{InternalErrorDetail, Problem};
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
