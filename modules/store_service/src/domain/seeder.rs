//! Example data seeding for an empty store

use super::service::Service;
use crate::contract::{ChangeSet, NewOrder, NewOrderItem, NewProduct, ProductRef};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// Order number of the sample order created alongside the seeded products
pub const SAMPLE_ORDER_NUMBER: &str = "10000";

/// Quantity of the single item in the sample order
pub const SAMPLE_ORDER_QUANTITY: i32 = 5;

/// Product record as found in the seed file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedProduct {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub size: String,
    pub price: Decimal,
    pub title: String,
    #[serde(default)]
    pub art_description: String,
    #[serde(default)]
    pub art_dating: String,
    #[serde(default)]
    pub art_id: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub artist_birth_date: String,
    #[serde(default)]
    pub artist_death_date: String,
    #[serde(default)]
    pub artist_nationality: String,
}

impl From<SeedProduct> for NewProduct {
    fn from(seed: SeedProduct) -> Self {
        Self {
            category: seed.category,
            size: seed.size,
            price: seed.price,
            title: seed.title,
            art_description: seed.art_description,
            art_dating: seed.art_dating,
            art_id: seed.art_id,
            artist: seed.artist,
            artist_birth_date: seed.artist_birth_date,
            artist_death_date: seed.artist_death_date,
            artist_nationality: seed.artist_nationality,
        }
    }
}

/// Outcome of a seeding run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Store already had products or there was nothing to seed
    Skipped,
    /// Products and the sample order were written
    Seeded { products: usize },
}

/// Populates an empty store from a JSON product file
pub struct Seeder {
    service: Arc<Service>,
}

impl Seeder {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }

    /// Seed from a file on disk; the file is only read when the store is empty
    pub async fn seed_from_file(&self, path: &Path) -> Result<SeedOutcome> {
        if self.service.any_products().await? {
            tracing::debug!("Store already has products, skipping seed");
            return Ok(SeedOutcome::Skipped);
        }

        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        let products = parse_seed_products(&raw)
            .with_context(|| format!("failed to parse seed file {}", path.display()))?;

        self.write(products).await
    }

    async fn write(&self, products: Vec<SeedProduct>) -> Result<SeedOutcome> {
        if products.is_empty() {
            tracing::warn!("Seed file contains no products");
            return Ok(SeedOutcome::Skipped);
        }

        let count = products.len();
        if !self.service.save_all(build_seed_changes(products)).await? {
            anyhow::bail!("seeding wrote no rows");
        }

        tracing::info!(products = count, "Seeded store with example data");
        Ok(SeedOutcome::Seeded { products: count })
    }
}

/// Parse the seed file contents
pub fn parse_seed_products(raw: &str) -> Result<Vec<SeedProduct>> {
    Ok(serde_json::from_str(raw)?)
}

/// Stage every product plus one sample order for the first product
fn build_seed_changes(products: Vec<SeedProduct>) -> ChangeSet {
    let mut changes = ChangeSet::new();
    let mut first: Option<(usize, Decimal)> = None;

    for product in products {
        let price = product.price;
        let index = changes.add_entity(NewProduct::from(product));
        first.get_or_insert((index, price));
    }

    if let Some((index, price)) = first {
        changes.add_entity(NewOrder {
            order_date: Some(chrono::Utc::now()),
            order_number: SAMPLE_ORDER_NUMBER.to_string(),
            items: vec![NewOrderItem {
                product: ProductRef::Staged(index),
                quantity: SAMPLE_ORDER_QUANTITY,
                unit_price: price,
            }],
        });
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::NewEntity;

    const SAMPLE: &str = r#"[
        {
            "id": 1,
            "category": "Print",
            "size": "11x17",
            "price": 19.99,
            "title": "Self-portrait",
            "artDescription": "A painting",
            "artDating": "1889",
            "artId": "SK-A-3262",
            "artist": "Vincent van Gogh",
            "artistBirthDate": "1853-03-30",
            "artistDeathDate": "1890-07-29",
            "artistNationality": "Dutch"
        },
        { "title": "Mug", "category": "Mug", "price": "8.50" }
    ]"#;

    #[test]
    fn test_parse_seed_products() {
        let products = parse_seed_products(SAMPLE).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].price, Decimal::new(1999, 2));
        assert_eq!(products[0].art_id, "SK-A-3262");
        assert_eq!(products[1].price, Decimal::new(850, 2));
        assert_eq!(products[1].artist, "");
    }

    #[test]
    fn test_seed_changes_stage_sample_order() {
        let changes = build_seed_changes(parse_seed_products(SAMPLE).unwrap());
        assert_eq!(changes.len(), 3);

        match &changes.entities()[2] {
            NewEntity::Order(order) => {
                assert_eq!(order.order_number, SAMPLE_ORDER_NUMBER);
                assert_eq!(order.items.len(), 1);
                assert_eq!(order.items[0].product, ProductRef::Staged(0));
                assert_eq!(order.items[0].quantity, SAMPLE_ORDER_QUANTITY);
                assert_eq!(order.items[0].unit_price, Decimal::new(1999, 2));
            }
            other => panic!("expected sample order, got {other:?}"),
        }
    }

    #[test]
    fn test_seed_changes_empty() {
        assert!(build_seed_changes(Vec::new()).is_empty());
    }
}
