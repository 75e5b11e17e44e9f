//! Migrate command - applies pending database migrations

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::storage::{connect_pool, PostgresMigrator};

/// Apply every pending migration against the configured database
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });

    let pool = connect_pool(&crate::postgres_config(&config.database)).await?;
    let migrator = PostgresMigrator::new(pool);

    migrator.run().await?;

    let version = migrator.current_version().await?;
    info!("Migrations complete, current version: {:?}", version);

    Ok(())
}
