//! PostgreSQL trending store
//!
//! Reads the materialized trending collection from a table with one row per
//! category type:
//!
//! ```sql
//! CREATE TABLE trending_cache (
//!     type     TEXT PRIMARY KEY,
//!     document JSONB NOT NULL
//! );
//! ```
//!
//! `document` holds the record as written by the refresh job. Queries run on
//! the blocking pool through an r2d2 connection pool; the pool is created
//! lazily so an unreachable database surfaces as a failed lookup, not as a
//! startup error.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mcc_domain::error::{Error, Result};
use mcc_domain::ports::TrendingStore;
use mcc_domain::value_objects::TrendingCacheRecord;
use r2d2::Pool;
use r2d2_postgres::PostgresConnectionManager;
use r2d2_postgres::postgres::{Config, NoTls};
use serde_json::Value;

use crate::constants::{POSTGRES_CONNECTION_TIMEOUT, POSTGRES_DEFAULT_POOL_SIZE};
use mcc_domain::constants::TRENDING_COLLECTION;

type PgPool = Pool<PostgresConnectionManager<NoTls>>;

/// Trending store backed by a Postgres table
#[derive(Clone)]
pub struct PostgresTrendingStore {
    pool: PgPool,
    table: String,
    query: Arc<str>,
}

impl PostgresTrendingStore {
    /// Create a store for `database_url`, reading from `table`
    pub fn connect(database_url: &str, table: &str, pool_size: u32) -> Result<Self> {
        Self::connect_with_timeout(database_url, table, pool_size, POSTGRES_CONNECTION_TIMEOUT)
    }

    /// Like [`connect`](Self::connect) with a custom connection wait
    pub fn connect_with_timeout(
        database_url: &str,
        table: &str,
        pool_size: u32,
        connection_timeout: Duration,
    ) -> Result<Self> {
        validate_table_name(table)?;
        let config: Config = database_url
            .parse()
            .map_err(|e| Error::configuration_with_source("Invalid database URL", e))?;

        let manager = PostgresConnectionManager::new(config, NoTls);
        let pool = Pool::builder()
            .max_size(pool_size.max(1))
            .min_idle(Some(0))
            .connection_timeout(connection_timeout)
            .build_unchecked(manager);

        Ok(Self {
            pool,
            table: table.to_string(),
            query: format!("SELECT document::text FROM {table} WHERE type = $1 LIMIT 1").into(),
        })
    }

    /// Table the store reads from
    pub fn table(&self) -> &str {
        &self.table
    }
}

#[async_trait]
impl TrendingStore for PostgresTrendingStore {
    async fn find_by_type(&self, category_type: &str) -> Result<Option<TrendingCacheRecord>> {
        let pool = self.pool.clone();
        let query = Arc::clone(&self.query);
        let requested = category_type.to_string();

        let document = tokio::task::spawn_blocking(move || -> Result<Option<String>> {
            let mut conn = pool
                .get()
                .map_err(|e| Error::storage_with_source("Failed to get database connection", e))?;
            let row = conn
                .query_opt(&*query, &[&requested])
                .map_err(|e| Error::storage_with_source("Trending query failed", e))?;
            row.map(|row| row.try_get::<_, String>(0))
                .transpose()
                .map_err(|e| Error::storage_with_source("Trending row unreadable", e))
        })
        .await
        .map_err(|e| Error::internal(format!("Trending lookup task failed: {e}")))??;

        document
            .map(|document| parse_document(&document, category_type, &self.table))
            .transpose()
    }

    fn provider_name(&self) -> &str {
        "postgres"
    }
}

impl std::fmt::Debug for PostgresTrendingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresTrendingStore")
            .field("table", &self.table)
            .field("max_size", &self.pool.max_size())
            .finish_non_exhaustive()
    }
}

/// Decode a stored document
///
/// The category type lives in its own column, so documents are accepted
/// without a `type` field.
fn parse_document(
    document: &str,
    category_type: &str,
    table: &str,
) -> Result<TrendingCacheRecord> {
    let malformed = |e: serde_json::Error| {
        Error::storage_with_source(format!("Malformed trending record in '{table}'"), e)
    };

    let mut value: Value = serde_json::from_str(document).map_err(malformed)?;
    if let Value::Object(fields) = &mut value {
        fields
            .entry("type")
            .or_insert_with(|| Value::String(category_type.to_string()));
    }
    serde_json::from_value(value).map_err(malformed)
}

fn validate_table_name(table: &str) -> Result<()> {
    let valid = !table.is_empty()
        && table.split('.').count() <= 2
        && table.split('.').all(|part| {
            !part.is_empty()
                && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
                && !part.starts_with(|c: char| c.is_ascii_digit())
        });

    if valid {
        Ok(())
    } else {
        Err(Error::configuration(format!(
            "Invalid trending table name '{table}'"
        )))
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use mcc_application::ports::registry::{TRENDING_STORES, TrendingStoreConfig, TrendingStoreEntry};

#[linkme::distributed_slice(TRENDING_STORES)]
static POSTGRES_TRENDING_STORE: TrendingStoreEntry = TrendingStoreEntry {
    name: "postgres",
    description: "PostgreSQL table with one JSONB document per category type",
    factory: |config: &TrendingStoreConfig| {
        let url = config
            .database_url
            .as_deref()
            .ok_or_else(|| "postgres trending store requires a database URL".to_string())?;
        let table = config.table.as_deref().unwrap_or(TRENDING_COLLECTION);
        let pool_size = config.pool_size.unwrap_or(POSTGRES_DEFAULT_POOL_SIZE);

        let store =
            PostgresTrendingStore::connect(url, table, pool_size).map_err(|e| e.to_string())?;
        Ok(Arc::new(store))
    },
};
