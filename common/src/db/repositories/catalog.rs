// Catalog introspection

use super::queries::catalog_queries;
use crate::db::{observe, DbPool};
use crate::errors::DatabaseError;
use tracing::instrument;

/// Reads the backend's own catalog rather than application tables
#[derive(Clone)]
pub struct CatalogRepository {
    pool: DbPool,
}

impl CatalogRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Names of the tables in the `public` schema, alphabetically
    #[instrument(skip(self))]
    pub async fn list_tables(&self) -> Result<Vec<String>, DatabaseError> {
        let tables = observe(
            "list_tables",
            sqlx::query_scalar::<_, String>(catalog_queries::LIST_TABLES)
                .fetch_all(self.pool.pool()),
        )
        .await?;

        tracing::debug!(count = tables.len(), "Listed tables");
        Ok(tables)
    }
}
