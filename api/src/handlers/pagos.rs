use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::handlers::{ErrorResponse, SuccessResponse};
use crate::state::AppState;
use common::db::repositories::PagoRepository;
use common::errors::ValidationError;
use common::models::{NuevoPago, Pago, PagoDetalle};

/// List payments with method name and order code
#[tracing::instrument(skip(state))]
pub async fn list_pagos(
    State(state): State<AppState>,
) -> Result<SuccessResponse<Vec<PagoDetalle>>, ErrorResponse> {
    let pagos = PagoRepository::new(state.db_pool.clone())
        .list()
        .await
        .map_err(|e| ErrorResponse::database(&e, state.expose_database_errors()))?;

    Ok(SuccessResponse::new(pagos))
}

/// Register a payment against an order
///
/// 400 if the amount is missing or zero, or either reference is missing.
#[tracing::instrument(skip(state, payload))]
pub async fn create_pago(
    State(state): State<AppState>,
    payload: Result<Json<NuevoPago>, JsonRejection>,
) -> Result<SuccessResponse<Pago>, ErrorResponse> {
    let Json(nuevo) = payload.map_err(|rejection| {
        ErrorResponse::validation(&ValidationError::MalformedBody(rejection.body_text()))
    })?;

    let pago = PagoRepository::new(state.db_pool.clone())
        .create(&nuevo)
        .await
        .map_err(|e| ErrorResponse::query(&e, state.expose_database_errors()))?;

    Ok(SuccessResponse::created(pago))
}
