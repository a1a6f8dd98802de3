//! Common test utilities: in-memory database and catalogue fixtures

#![allow(dead_code)]

use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use store_service::{NewProduct, StoreServiceModule};

/// Fresh in-memory SQLite database with the store schema applied
///
/// A single pooled connection keeps every query on the same in-memory database.
pub async fn memory_db() -> Arc<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    StoreServiceModule::migrate(&db).await.unwrap();
    Arc::new(db)
}

pub fn product(title: &str, category: &str, price: Decimal) -> NewProduct {
    NewProduct {
        category: category.to_string(),
        size: "11x17".to_string(),
        price,
        title: title.to_string(),
        art_description: format!("{title} reproduction"),
        art_dating: "1889".to_string(),
        art_id: format!("ART-{}", title.len()),
        artist: "Vincent van Gogh".to_string(),
        artist_birth_date: "1853-03-30".to_string(),
        artist_death_date: "1890-07-29".to_string(),
        artist_nationality: "Dutch".to_string(),
    }
}

/// Three products across two categories
///
/// SQLite keeps decimals as REAL, so prices have a binary-exact fractional part.
pub fn catalogue() -> Vec<NewProduct> {
    vec![
        product("Wheatfield", "Print", Decimal::new(2450, 2)),
        product("Almond Blossom", "Mug", Decimal::new(850, 2)),
        product("Sunflowers", "Print", Decimal::new(3025, 2)),
    ]
}
