//! Module wiring and lifecycle

use crate::config::Config;
use crate::domain::{SeedOutcome, Seeder, Service};
use crate::infra::storage::{migrations::Migrator, repositories::SeaOrmStoreRepository};
use anyhow::Result;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Store service module: owns the domain service built over the database
pub struct StoreServiceModule {
    config: Config,
    service: Arc<Service>,
}

impl StoreServiceModule {
    /// Build repositories and the domain service
    pub fn init(config: Config, db: Arc<DatabaseConnection>) -> Self {
        let repo = Arc::new(SeaOrmStoreRepository::new(db));
        let service = Arc::new(Service::new(repo));

        tracing::info!("Store service initialized");
        Self { config, service }
    }

    /// Apply pending database migrations
    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None).await?;
        tracing::info!("Store service migrations completed");
        Ok(())
    }

    /// Seed example data if enabled and the store is empty
    pub async fn seed(&self) -> Result<SeedOutcome> {
        if !self.config.seed.enabled {
            tracing::debug!("Seeding disabled");
            return Ok(SeedOutcome::Skipped);
        }

        Seeder::new(self.service.clone())
            .seed_from_file(&self.config.seed.file)
            .await
    }

    /// Mount the REST API on `router`
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        tracing::info!("Registering store service REST routes");
        crate::api::rest::routes::register_routes(router, self.service.clone())
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }
}
