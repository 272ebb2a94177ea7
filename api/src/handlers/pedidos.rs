use axum::extract::State;

use crate::handlers::{ErrorResponse, SuccessResponse};
use crate::state::AppState;
use common::db::repositories::PedidoRepository;
use common::models::Pedido;

/// List orders, newest first
#[tracing::instrument(skip(state))]
pub async fn list_pedidos(
    State(state): State<AppState>,
) -> Result<SuccessResponse<Vec<Pedido>>, ErrorResponse> {
    let pedidos = PedidoRepository::new(state.db_pool.clone())
        .list()
        .await
        .map_err(|e| ErrorResponse::database(&e, state.expose_database_errors()))?;

    Ok(SuccessResponse::new(pedidos))
}
