//! Storefront server host: configuration, logging and the HTTP pipeline

pub mod config;
pub mod logging;
pub mod server;

pub use config::AppConfig;
