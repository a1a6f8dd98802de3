use anyhow::{Context, Result};
use axum::Router;
use clap::Parser;
use sea_orm::Database;
use std::path::PathBuf;
use std::sync::Arc;
use store_service::domain::SeedOutcome;
use store_service::StoreServiceModule;
use storefront_server::config::{self, DEFAULT_CONFIG_FILE};
use storefront_server::{logging, server};

/// Storefront server: static site plus the store REST API
#[derive(Parser, Debug)]
#[command(name = "storefront-server", version, about)]
struct Cli {
    /// JSON settings file (missing file is allowed)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Optional XML settings file layered over the JSON file
    #[arg(long)]
    xml_config: Option<PathBuf>,

    /// Skip seeding example data
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::load(&cli.config, cli.xml_config.as_deref())
        .context("failed to load configuration")?;
    if cli.no_seed {
        config.store.seed.enabled = false;
    }

    logging::init(&config.logging)?;
    tracing::info!(environment = %config.environment, "Starting storefront server");

    let db = Database::connect(config.connection_strings.store.as_str())
        .await
        .context("failed to connect to the store database")?;
    let db = Arc::new(db);

    StoreServiceModule::migrate(&db).await?;
    let module = StoreServiceModule::init(config.store.clone(), db);

    if module.seed().await.context("failed to seed the store")? == SeedOutcome::Skipped {
        tracing::debug!("Seeding skipped");
    }

    let router = server::build_router(module.register_rest(Router::new()), &config);
    server::serve(router, config.server.bind_addr).await
}
