// Pedido repository implementation

use super::queries::pedido_queries;
use crate::db::{observe, DbPool};
use crate::errors::DatabaseError;
use crate::models::Pedido;
use tracing::instrument;

/// Repository for order reads
#[derive(Clone)]
pub struct PedidoRepository {
    pool: DbPool,
}

impl PedidoRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// List every order, newest first
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Pedido>, DatabaseError> {
        let pedidos = observe(
            "list_pedidos",
            sqlx::query_as::<_, Pedido>(pedido_queries::LIST).fetch_all(self.pool.pool()),
        )
        .await?;

        tracing::debug!(count = pedidos.len(), "Listed pedidos");
        Ok(pedidos)
    }
}
