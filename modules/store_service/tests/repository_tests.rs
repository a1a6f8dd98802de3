//! SeaORM repository tests against in-memory SQLite

mod common;

use rust_decimal::Decimal;
use store_service::domain::repository::StoreRepository;
use store_service::infra::storage::repositories::SeaOrmStoreRepository;
use store_service::{ChangeSet, NewOrder, NewOrderItem, ProductRef};

async fn seeded_repo() -> (SeaOrmStoreRepository, Vec<i32>) {
    let repo = SeaOrmStoreRepository::new(common::memory_db().await);

    let mut changes = ChangeSet::new();
    for product in common::catalogue() {
        changes.add_entity(product);
    }
    let summary = repo.save_all(changes).await.unwrap();
    assert_eq!(summary.rows_affected, 3);

    (repo, summary.product_ids)
}

fn order(number: &str, items: Vec<NewOrderItem>) -> NewOrder {
    NewOrder {
        order_date: Some(chrono::Utc::now()),
        order_number: number.to_string(),
        items,
    }
}

fn item(product: ProductRef, quantity: i32, unit_price: Decimal) -> NewOrderItem {
    NewOrderItem {
        product,
        quantity,
        unit_price,
    }
}

#[tokio::test]
async fn test_products_ordered_by_title() {
    let (repo, _) = seeded_repo().await;

    let titles: Vec<String> = repo
        .get_all_products()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();

    assert_eq!(titles, vec!["Almond Blossom", "Sunflowers", "Wheatfield"]);
}

#[tokio::test]
async fn test_products_by_category_exact_match() {
    let (repo, _) = seeded_repo().await;

    let prints = repo.get_products_by_category("Print").await.unwrap();
    assert_eq!(prints.len(), 2);
    assert!(prints.iter().all(|p| p.category == "Print"));
    assert_eq!(prints[0].title, "Sunflowers");

    assert!(repo.get_products_by_category("print").await.unwrap().is_empty());
    assert!(repo.get_products_by_category("Poster").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_product_round_trip_fields() {
    let (repo, ids) = seeded_repo().await;

    let product = repo.get_product_by_id(ids[1]).await.unwrap().unwrap();
    assert_eq!(product.title, "Almond Blossom");
    assert_eq!(product.category, "Mug");
    assert_eq!(product.price, Decimal::new(850, 2));
    assert_eq!(product.artist_nationality, "Dutch");

    assert!(repo.get_product_by_id(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_any_products() {
    let repo = SeaOrmStoreRepository::new(common::memory_db().await);
    assert!(!repo.any_products().await.unwrap());

    let (repo, _) = seeded_repo().await;
    assert!(repo.any_products().await.unwrap());
}

#[tokio::test]
async fn test_empty_change_set_writes_nothing() {
    let repo = SeaOrmStoreRepository::new(common::memory_db().await);

    let summary = repo.save_all(ChangeSet::new()).await.unwrap();
    assert!(!summary.saved());
    assert_eq!(summary.rows_affected, 0);
}

#[tokio::test]
async fn test_order_with_items_includes_products() {
    let (repo, ids) = seeded_repo().await;

    let mut changes = ChangeSet::new();
    changes.add_entity(order(
        "20001",
        vec![
            item(ProductRef::Existing(ids[0]), 2, Decimal::new(2450, 2)),
            item(ProductRef::Existing(ids[2]), 1, Decimal::new(3025, 2)),
        ],
    ));
    let summary = repo.save_all(changes).await.unwrap();
    assert_eq!(summary.rows_affected, 3);
    assert_eq!(summary.order_ids.len(), 1);

    let stored = repo
        .get_order_by_id(summary.order_ids[0])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.order_number, "20001");
    assert_eq!(stored.items.len(), 2);
    assert_eq!(stored.items[0].product.title, "Wheatfield");
    assert_eq!(stored.items[0].quantity, 2);
    assert_eq!(stored.items[1].product.id, ids[2]);

    assert!(repo.get_order_by_id(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_all_orders_with_and_without_items() {
    let (repo, ids) = seeded_repo().await;

    let mut changes = ChangeSet::new();
    changes.add_entity(order(
        "30001",
        vec![item(ProductRef::Existing(ids[0]), 1, Decimal::new(150, 2))],
    ));
    changes.add_entity(order(
        "30002",
        vec![item(ProductRef::Existing(ids[1]), 4, Decimal::new(250, 2))],
    ));
    repo.save_all(changes).await.unwrap();

    let with_items = repo.get_all_orders(true).await.unwrap();
    assert_eq!(with_items.len(), 2);
    assert_eq!(with_items[0].order_number, "30001");
    assert!(with_items.iter().all(|o| o.items.len() == 1));
    assert_eq!(with_items[1].items[0].product.title, "Almond Blossom");

    let without_items = repo.get_all_orders(false).await.unwrap();
    assert_eq!(without_items.len(), 2);
    assert!(without_items.iter().all(|o| o.items.is_empty()));
}

#[tokio::test]
async fn test_staged_product_reference_resolves_in_same_save() {
    let repo = SeaOrmStoreRepository::new(common::memory_db().await);

    let mut changes = ChangeSet::new();
    let staged = changes.add_entity(common::product("Irises", "Print", Decimal::new(1225, 2)));
    changes.add_entity(order(
        "10000",
        vec![item(ProductRef::Staged(staged), 5, Decimal::new(1225, 2))],
    ));

    let summary = repo.save_all(changes).await.unwrap();
    assert_eq!(summary.rows_affected, 3);

    let stored = repo
        .get_order_by_id(summary.order_ids[0])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.items[0].product.id, summary.product_ids[0]);
    assert_eq!(stored.items[0].product.title, "Irises");
}

#[tokio::test]
async fn test_failed_save_rolls_back_everything() {
    let repo = SeaOrmStoreRepository::new(common::memory_db().await);

    let mut changes = ChangeSet::new();
    changes.add_entity(common::product("Irises", "Print", Decimal::new(150, 2)));
    // Index 5 is not a staged product
    changes.add_entity(order(
        "40001",
        vec![item(ProductRef::Staged(5), 1, Decimal::new(150, 2))],
    ));

    assert!(repo.save_all(changes).await.is_err());
    assert!(!repo.any_products().await.unwrap());
    assert!(repo.get_all_orders(false).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_product_violates_foreign_key() {
    let repo = SeaOrmStoreRepository::new(common::memory_db().await);

    let mut changes = ChangeSet::new();
    changes.add_entity(order(
        "40002",
        vec![item(ProductRef::Existing(777), 1, Decimal::new(150, 2))],
    ));

    assert!(repo.save_all(changes).await.is_err());
    assert!(repo.get_all_orders(false).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_migrations_apply_once_under_distinct_names() {
    use sea_orm_migration::MigratorTrait;
    use store_service::infra::storage::migrations::Migrator;
    use store_service::StoreServiceModule;

    let db = common::memory_db().await;
    StoreServiceModule::migrate(&db).await.unwrap();

    let applied = Migrator::get_applied_migrations(&*db).await.unwrap();
    let names: Vec<&str> = applied.iter().map(|m| m.name()).collect();
    assert_eq!(
        names,
        vec![
            "m20250301_000001_create_products",
            "m20250301_000002_create_orders"
        ]
    );
    assert!(Migrator::get_pending_migrations(&*db).await.unwrap().is_empty());
}
