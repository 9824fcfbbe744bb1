//! Storage for products and saved designs.
//!
//! # Tables
//!
//! - `products` - Sneaker templates with a default configuration (JSONB)
//! - `saved_designs` - Named configuration snapshots owned by a user
//!
//! Both tables sit behind repository traits so the service runs against
//! `PostgreSQL` in production and against [`memory`] when no database URL is
//! configured (local development, tests).
//!
//! # Migrations
//!
//! Migrations are stored in `crates/studio/migrations/` and run via:
//! ```bash
//! solecraft migrate
//! ```

pub mod designs;
pub mod memory;
pub mod products;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use solecraft_core::{DesignId, NewDesign, Product, ProductId, SavedDesign, UserId};

pub use designs::PgDesignRepository;
pub use memory::{InMemoryDesignRepository, InMemoryProductRepository};
pub use products::{PgProductRepository, starter_catalogue};

/// Embedded migrations for the studio database.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unknown product).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Saved design persistence.
#[async_trait]
pub trait DesignRepository: Send + Sync + 'static {
    /// Store a new design for `owner`. `product_id` must already be resolved.
    async fn insert(
        &self,
        owner: UserId,
        product_id: ProductId,
        design: NewDesign,
    ) -> Result<SavedDesign, RepositoryError>;

    /// All designs owned by `owner`, newest first.
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<SavedDesign>, RepositoryError>;

    /// Delete one of `owner`'s designs. Returns whether a row was removed.
    async fn delete(&self, owner: UserId, id: DesignId) -> Result<bool, RepositoryError>;

    /// Check the backing store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Product catalogue access.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Every product, oldest first.
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;

    async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    /// The default product shown when the customizer opens.
    async fn first(&self) -> Result<Option<Product>, RepositoryError>;

    /// Insert or overwrite a product by id.
    async fn upsert(&self, product: &Product) -> Result<(), RepositoryError>;
}

/// The pair of repositories the service runs on.
#[derive(Clone)]
pub struct Storage {
    pub designs: Arc<dyn DesignRepository>,
    pub products: Arc<dyn ProductRepository>,
}

impl Storage {
    /// `PostgreSQL`-backed storage sharing one pool.
    #[must_use]
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            designs: Arc::new(PgDesignRepository::new(pool.clone())),
            products: Arc::new(PgProductRepository::new(pool)),
        }
    }

    /// In-memory storage preloaded with `products`.
    #[must_use]
    pub fn in_memory(products: Vec<Product>) -> Self {
        Self {
            designs: Arc::new(InMemoryDesignRepository::new()),
            products: Arc::new(InMemoryProductRepository::with_products(products)),
        }
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
