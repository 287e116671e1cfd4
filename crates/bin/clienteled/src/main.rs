//! # clienteled — clientele daemon
//!
//! Composition root that wires the storage adapter into the customer service.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the repository implementation (adapter)
//! - Construct the customer service, injecting the repository via its port trait
//! - Check that storage answers queries, then shut the pool down
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use clientele_adapter_storage_sqlite_sqlx::SqliteCustomerRepository;
use clientele_app::services::customer_service::CustomerService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = config
        .storage()
        .build()
        .await
        .context("opening customer database")?;

    // Repositories & services
    let customer_repo = SqliteCustomerRepository::new(db.pool().clone());
    let customer_service = CustomerService::new(customer_repo);

    let active = customer_service
        .list_active_customers()
        .await
        .context("listing active customers")?;
    tracing::info!(
        database_url = %config.database.url,
        active_customers = active.len(),
        "customer store is live"
    );

    db.close().await;
    Ok(())
}
