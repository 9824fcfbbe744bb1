//! `PostgreSQL` storage for saved designs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;

use solecraft_core::{
    DesignId, DesignName, NewDesign, ProductId, SavedDesign, SneakerConfiguration, TagSet, UserId,
};

use super::{DesignRepository, RepositoryError};

const DESIGN_COLUMNS: &str = "id, user_id, product_id, name, configuration, tags, created_at";

/// Internal row type for `saved_designs` queries.
#[derive(Debug, sqlx::FromRow)]
struct SavedDesignRow {
    id: DesignId,
    user_id: UserId,
    product_id: ProductId,
    name: String,
    configuration: Json<SneakerConfiguration>,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<SavedDesignRow> for SavedDesign {
    type Error = RepositoryError;

    fn try_from(row: SavedDesignRow) -> Result<Self, Self::Error> {
        let name = DesignName::parse(&row.name).map_err(|e| {
            RepositoryError::DataCorruption(format!("design {} has invalid name: {e}", row.id))
        })?;

        Ok(Self {
            id: row.id,
            owner_id: row.user_id,
            product_id: row.product_id,
            name,
            configuration: row.configuration.0,
            tags: TagSet::from(row.tags),
            created_at: row.created_at,
        })
    }
}

/// Saved designs in `PostgreSQL`.
#[derive(Clone)]
pub struct PgDesignRepository {
    pool: PgPool,
}

impl PgDesignRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DesignRepository for PgDesignRepository {
    async fn insert(
        &self,
        owner: UserId,
        product_id: ProductId,
        design: NewDesign,
    ) -> Result<SavedDesign, RepositoryError> {
        let row: SavedDesignRow = sqlx::query_as(&format!(
            r"
            INSERT INTO saved_designs (id, user_id, product_id, name, configuration, tags)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {DESIGN_COLUMNS}
            "
        ))
        .bind(DesignId::generate())
        .bind(owner)
        .bind(product_id)
        .bind(design.name.as_str())
        .bind(Json(&design.configuration))
        .bind(design.tags.as_slice())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                RepositoryError::Conflict(format!("unknown product {product_id}"))
            }
            _ => RepositoryError::Database(e),
        })?;

        row.try_into()
    }

    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<SavedDesign>, RepositoryError> {
        let rows: Vec<SavedDesignRow> = sqlx::query_as(&format!(
            r"
            SELECT {DESIGN_COLUMNS}
            FROM saved_designs
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "
        ))
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn delete(&self, owner: UserId, id: DesignId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM saved_designs WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
