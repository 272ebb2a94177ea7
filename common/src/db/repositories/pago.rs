// Pago repository implementation

use super::queries::pago_queries;
use crate::db::{observe, DbPool};
use crate::errors::{DatabaseError, QueryError};
use crate::models::{NuevoPago, Pago, PagoDetalle};
use tracing::instrument;

/// Repository for payment reads and inserts
#[derive(Clone)]
pub struct PagoRepository {
    pool: DbPool,
}

impl PagoRepository {
    /// Create a new PagoRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// List payments with method name and order code, newest id first.
    ///
    /// Inner joins: a payment whose method or order does not resolve is not listed.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<PagoDetalle>, DatabaseError> {
        let pagos = observe(
            "list_pagos",
            sqlx::query_as::<_, PagoDetalle>(pago_queries::LIST).fetch_all(self.pool.pool()),
        )
        .await?;

        tracing::debug!(count = pagos.len(), "Listed pagos");
        Ok(pagos)
    }

    /// Insert a payment. Autocommitted single statement.
    ///
    /// # Errors
    /// - `QueryError::Validation` if amount is missing or zero, or a reference is missing
    /// - `QueryError::Database` if the insert fails (e.g. unknown order)
    #[instrument(skip(self, nuevo))]
    pub async fn create(&self, nuevo: &NuevoPago) -> Result<Pago, QueryError> {
        nuevo.validate()?;

        let pago = observe(
            "create_pago",
            sqlx::query_as::<_, Pago>(pago_queries::INSERT)
                .bind(nuevo.monto)
                .bind(nuevo.id_metodo_pago)
                .bind(nuevo.id_pedido)
                .fetch_one(self.pool.pool()),
        )
        .await?;

        tracing::info!(
            id_pago = pago.id_pago,
            id_pedido = pago.id_pedido,
            monto = %pago.monto,
            "Pago created"
        );
        Ok(pago)
    }
}
