//! Database migration command.
//!
//! Applies `crates/studio/migrations/` to `SOLECRAFT_DATABASE_URL`. The
//! studio never migrates on startup; run this before the first deploy and
//! after every upgrade.

use solecraft_studio::config::StudioConfig;
use solecraft_studio::db::{self, MIGRATOR};

use super::CommandError;

/// Run all pending migrations.
///
/// # Errors
///
/// Returns an error if no database URL is set, the connection fails, or a
/// migration fails.
pub async fn run() -> Result<(), CommandError> {
    let config = StudioConfig::from_env()?;
    let database_url = config.require_database_url()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(database_url).await?;

    tracing::info!("Running migrations...");
    MIGRATOR.run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
