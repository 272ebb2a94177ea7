use axum::extract::State;

use crate::handlers::{ErrorResponse, SuccessResponse};
use crate::state::AppState;
use common::db::repositories::ProductoRepository;
use common::models::{Producto, ProductoDetalle};

/// List products ordered by name
#[tracing::instrument(skip(state))]
pub async fn list_productos(
    State(state): State<AppState>,
) -> Result<SuccessResponse<Vec<Producto>>, ErrorResponse> {
    let repo = ProductoRepository::new(state.db_pool.clone());
    let productos = repo
        .list()
        .await
        .map_err(|e| ErrorResponse::database(&e, state.expose_database_errors()))?;

    Ok(SuccessResponse::new(productos))
}

/// List products with their embedded ingredient lists
#[tracing::instrument(skip(state))]
pub async fn list_productos_detalle(
    State(state): State<AppState>,
) -> Result<SuccessResponse<Vec<ProductoDetalle>>, ErrorResponse> {
    let repo = ProductoRepository::new(state.db_pool.clone());
    let productos = repo
        .list_with_ingredients()
        .await
        .map_err(|e| ErrorResponse::database(&e, state.expose_database_errors()))?;

    Ok(SuccessResponse::new(productos))
}
