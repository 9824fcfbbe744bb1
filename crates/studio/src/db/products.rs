//! `PostgreSQL` storage for the product catalogue, plus the starter catalogue.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use solecraft_core::{HexColor, Material, Price, Product, ProductId, SneakerConfiguration};

use super::{ProductRepository, RepositoryError};

const PRODUCT_COLUMNS: &str = "id, name, base_price, default_config";

/// Internal row type for `products` queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    base_price: Decimal,
    default_config: Json<SneakerConfiguration>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            base_price: Price::new(row.base_price),
            default_config: row.default_config.0,
        }
    }
}

/// Product catalogue in `PostgreSQL`.
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    async fn first(&self) -> Result<Option<Product>, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at, id LIMIT 1"
        ))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    async fn upsert(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO products (id, name, base_price, default_config)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                base_price = EXCLUDED.base_price,
                default_config = EXCLUDED.default_config
            ",
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.base_price.amount())
        .bind(Json(&product.default_config))
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// Fixed ids so re-seeding updates rows instead of duplicating them.
const CLASSIC_RUNNER_ID: Uuid = Uuid::from_u128(0x6f1c_9a2e_3b4d_4e5f_8a6b_7c8d_9e0f_1a01);
const TRAIL_BLAZER_ID: Uuid = Uuid::from_u128(0x6f1c_9a2e_3b4d_4e5f_8a6b_7c8d_9e0f_1a02);
const COURT_CLASSIC_ID: Uuid = Uuid::from_u128(0x6f1c_9a2e_3b4d_4e5f_8a6b_7c8d_9e0f_1a03);

/// Products seeded into a fresh database, and served by in-memory storage.
///
/// The first entry is the default product.
#[must_use]
pub fn starter_catalogue() -> Vec<Product> {
    let hex = |s: &str| HexColor::parse(s).unwrap_or_else(|_| HexColor::black());

    vec![
        Product {
            id: ProductId::new(CLASSIC_RUNNER_ID),
            name: "Classic Runner".to_string(),
            base_price: Price::from_cents(14_999),
            default_config: SneakerConfiguration::builtin_default(),
        },
        Product {
            id: ProductId::new(TRAIL_BLAZER_ID),
            name: "Trail Blazer".to_string(),
            base_price: Price::from_cents(17_999),
            default_config: SneakerConfiguration {
                sole: hex("#3d2b1f"),
                upper: hex("#4a5d23"),
                laces: hex("#f4a261"),
                logo: hex("#e9c46a"),
                material: Material::Matte,
                custom_text: None,
            },
        },
        Product {
            id: ProductId::new(COURT_CLASSIC_ID),
            name: "Court Classic".to_string(),
            base_price: Price::from_cents(12_999),
            default_config: SneakerConfiguration {
                sole: hex("#f5f5f5"),
                upper: hex("#ffffff"),
                laces: hex("#ffffff"),
                logo: hex("#1d3557"),
                material: Material::Shiny,
                custom_text: None,
            },
        },
    ]
}
