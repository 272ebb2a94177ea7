use axum::extract::State;

use crate::handlers::{ErrorResponse, SuccessResponse};
use crate::state::AppState;
use common::db::repositories::EmpleadoRepository;
use common::models::Empleado;

#[tracing::instrument(skip(state))]
pub async fn list_empleados(
    State(state): State<AppState>,
) -> Result<SuccessResponse<Vec<Empleado>>, ErrorResponse> {
    let empleados = EmpleadoRepository::new(state.db_pool.clone())
        .list()
        .await
        .map_err(|e| ErrorResponse::database(&e, state.expose_database_errors()))?;

    Ok(SuccessResponse::new(empleados))
}
