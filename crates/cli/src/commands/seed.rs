//! Seed the product catalogue.
//!
//! Upserts the starter catalogue by fixed id, so running it twice updates
//! rows in place instead of duplicating them.

use tracing::info;

use solecraft_studio::config::StudioConfig;
use solecraft_studio::db::{self, PgProductRepository, ProductRepository, starter_catalogue};

use super::CommandError;

/// Upsert the starter products.
///
/// # Errors
///
/// Returns an error if no database URL is set or a write fails.
pub async fn products() -> Result<(), CommandError> {
    let config = StudioConfig::from_env()?;
    let pool = db::create_pool(config.require_database_url()?).await?;
    let repo = PgProductRepository::new(pool);

    let catalogue = starter_catalogue();
    for product in &catalogue {
        repo.upsert(product).await?;
        info!(product = %product.name, price = %product.base_price, "Seeded product");
    }

    info!(count = catalogue.len(), "Seeding complete");
    Ok(())
}
