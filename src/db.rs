use anyhow::{Context, Result};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;

use crate::config::DatabaseConfig;
use crate::row::ProductRow;

/// DDL for the target table. Deliberately not `IF NOT EXISTS`: rerunning the
/// import against an already-initialized database is an error, not a skip.
const CREATE_PRODUCTS_TABLE: &str = "\
CREATE TABLE products (
    id               INT UNSIGNED NOT NULL,
    name             VARCHAR(255) NOT NULL,
    unit             VARCHAR(50)  NOT NULL,
    supplier_price   FLOAT        NOT NULL,
    sale_price       FLOAT        NOT NULL,
    vat_percentage   INT          NOT NULL,
    stock            FLOAT        NOT NULL,
    fractionable     BOOLEAN      NOT NULL DEFAULT 0,
    last_modified    DATETIME     NOT NULL DEFAULT CURRENT_TIMESTAMP
                         ON UPDATE CURRENT_TIMESTAMP,

    PRIMARY KEY (id)
)";

const INSERT_PRODUCT: &str = "\
INSERT INTO products (
    id, name, unit, supplier_price, sale_price, vat_percentage, stock, fractionable
) VALUES (?, ?, ?, ?, ?, ?, ?, ?)";

/// Destination for transformed rows. The import loop only talks to this
/// trait, so it can run against an in-memory double in tests.
#[allow(async_fn_in_trait)]
pub trait ProductStore {
    /// Create the `products` table. Errors if it already exists.
    async fn create_table(&self) -> Result<()>;

    /// Insert one row. Errors on any store-side rejection, a duplicate id
    /// hitting the primary-key constraint included.
    async fn insert(&self, row: &ProductRow) -> Result<()>;
}

/// `ProductStore` backed by a MySQL connection pool.
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Connect to the database described by `config`. The pool is capped at
    /// one connection; the import is strictly sequential and needs no more.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .with_context(|| {
                format!(
                    "connecting to MySQL at `{}` (database `{}`)",
                    config.host, config.database
                )
            })?;
        Ok(MySqlStore { pool })
    }

    /// Close the pool, releasing the connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl ProductStore for MySqlStore {
    async fn create_table(&self) -> Result<()> {
        sqlx::query(CREATE_PRODUCTS_TABLE)
            .execute(&self.pool)
            .await
            .context("creating `products` table")?;
        Ok(())
    }

    async fn insert(&self, row: &ProductRow) -> Result<()> {
        sqlx::query(INSERT_PRODUCT)
            .bind(row.id)
            .bind(row.name.as_str())
            .bind(row.unit.as_str())
            .bind(row.supplier_price)
            .bind(row.sale_price)
            .bind(row.vat_percentage)
            .bind(row.stock)
            .bind(row.fractionable)
            .execute(&self.pool)
            .await
            .with_context(|| format!("inserting product {}", row.id))?;
        Ok(())
    }
}
