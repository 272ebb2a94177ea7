// Empleado repository implementation

use super::queries::empleado_queries;
use crate::db::{observe, DbPool};
use crate::errors::DatabaseError;
use crate::models::Empleado;
use tracing::instrument;

#[derive(Clone)]
pub struct EmpleadoRepository {
    pool: DbPool,
}

impl EmpleadoRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Empleado>, DatabaseError> {
        let empleados = observe(
            "list_empleados",
            sqlx::query_as::<_, Empleado>(empleado_queries::LIST).fetch_all(self.pool.pool()),
        )
        .await?;

        tracing::debug!(count = empleados.len(), "Listed empleados");
        Ok(empleados)
    }
}
