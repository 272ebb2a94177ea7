use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::handlers::{ErrorResponse, SuccessResponse};
use crate::state::AppState;
use common::db::repositories::ClienteRepository;
use common::errors::ValidationError;
use common::models::{Cliente, ClienteCreado, NuevoCliente};

/// List customers with resolved province, country and language names
#[tracing::instrument(skip(state))]
pub async fn list_clientes(
    State(state): State<AppState>,
) -> Result<SuccessResponse<Vec<Cliente>>, ErrorResponse> {
    let clientes = ClienteRepository::new(state.db_pool.clone())
        .list()
        .await
        .map_err(|e| ErrorResponse::database(&e, state.expose_database_errors()))?;

    Ok(SuccessResponse::new(clientes))
}

/// Create a customer
///
/// 400 if name, national id or email is missing, or the body is not valid JSON.
#[tracing::instrument(skip(state, payload))]
pub async fn create_cliente(
    State(state): State<AppState>,
    payload: Result<Json<NuevoCliente>, JsonRejection>,
) -> Result<SuccessResponse<ClienteCreado>, ErrorResponse> {
    let Json(nuevo) = payload.map_err(|rejection| {
        ErrorResponse::validation(&ValidationError::MalformedBody(rejection.body_text()))
    })?;

    let cliente = ClienteRepository::new(state.db_pool.clone())
        .create(&nuevo)
        .await
        .map_err(|e| ErrorResponse::query(&e, state.expose_database_errors()))?;

    Ok(SuccessResponse::created(cliente))
}
