// Producto repository implementation

use super::queries::producto_queries;
use crate::db::{observe, DbPool};
use crate::errors::DatabaseError;
use crate::models::{Producto, ProductoDetalle};
use tracing::instrument;

/// Repository for product reads
#[derive(Clone)]
pub struct ProductoRepository {
    pool: DbPool,
}

impl ProductoRepository {
    /// Create a new ProductoRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// List every product ordered by name
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Producto>, DatabaseError> {
        let productos = observe(
            "list_productos",
            sqlx::query_as::<_, Producto>(producto_queries::LIST).fetch_all(self.pool.pool()),
        )
        .await?;

        tracing::debug!(count = productos.len(), "Listed productos");
        Ok(productos)
    }

    /// List every product with its ingredients embedded, ordered by name.
    ///
    /// One statement aggregates the junction rows per product, so the cost is a
    /// single round trip regardless of how many products exist.
    #[instrument(skip(self))]
    pub async fn list_with_ingredients(&self) -> Result<Vec<ProductoDetalle>, DatabaseError> {
        let productos = observe(
            "list_productos_detalle",
            sqlx::query_as::<_, ProductoDetalle>(producto_queries::LIST_WITH_INGREDIENTS)
                .fetch_all(self.pool.pool()),
        )
        .await?;

        tracing::debug!(count = productos.len(), "Listed productos with ingredientes");
        Ok(productos)
    }
}
