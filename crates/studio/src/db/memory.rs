//! In-process storage used when no database is configured.
//!
//! Data lives for the lifetime of the process. Semantics match the
//! `PostgreSQL` repositories: owner scoping, newest-first listing and
//! delete-once.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use solecraft_core::{DesignId, NewDesign, Product, ProductId, SavedDesign, UserId};

use super::{DesignRepository, ProductRepository, RepositoryError};

/// Saved designs held in memory, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryDesignRepository {
    designs: RwLock<Vec<SavedDesign>>,
}

impl InMemoryDesignRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DesignRepository for InMemoryDesignRepository {
    async fn insert(
        &self,
        owner: UserId,
        product_id: ProductId,
        design: NewDesign,
    ) -> Result<SavedDesign, RepositoryError> {
        let saved = SavedDesign {
            id: DesignId::generate(),
            owner_id: owner,
            product_id,
            name: design.name,
            configuration: design.configuration,
            tags: design.tags,
            created_at: Utc::now(),
        };
        self.designs.write().await.push(saved.clone());
        Ok(saved)
    }

    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<SavedDesign>, RepositoryError> {
        Ok(self
            .designs
            .read()
            .await
            .iter()
            .rev()
            .filter(|d| d.owner_id == owner)
            .cloned()
            .collect())
    }

    async fn delete(&self, owner: UserId, id: DesignId) -> Result<bool, RepositoryError> {
        let mut designs = self.designs.write().await;
        let before = designs.len();
        designs.retain(|d| !(d.id == id && d.owner_id == owner));
        Ok(designs.len() != before)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// Product catalogue held in memory, in catalogue order.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    #[must_use]
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.read().await.clone())
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.products.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn first(&self) -> Result<Option<Product>, RepositoryError> {
        Ok(self.products.read().await.first().cloned())
    }

    async fn upsert(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        }
        Ok(())
    }
}
