use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::handlers::ErrorResponse;
use crate::state::AppState;
use common::db::repositories::CatalogRepository;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub connected: bool,
    pub server_time: Option<DateTime<Utc>>,
    pub pool: PoolStats,
}

/// Pool occupancy at the time of the check
#[derive(Debug, Serialize)]
pub struct PoolStats {
    pub size: u32,
    pub idle: usize,
    pub max_connections: u32,
}

/// On-demand backend liveness: 200 when the round trip succeeds, 503 otherwise
#[tracing::instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let health = state.db_pool.health_check().await;
    let (code, status) = if health.connected {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "ERROR")
    };

    (
        code,
        Json(HealthResponse {
            status,
            connected: health.connected,
            server_time: health.server_time,
            pool: PoolStats {
                size: state.db_pool.size(),
                idle: state.db_pool.num_idle(),
                max_connections: state.db_pool.max_connections(),
            },
        }),
    )
}

#[derive(Debug, Serialize)]
pub struct DbTestResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub tables: Vec<String>,
}

/// Connectivity check listing the tables of the public schema
#[tracing::instrument(skip(state))]
pub async fn db_test(State(state): State<AppState>) -> Response {
    if !state.db_pool.health_check().await.connected {
        return ErrorResponse::internal("No se pudo conectar").into_response();
    }

    match CatalogRepository::new(state.db_pool.clone()).list_tables().await {
        Ok(tables) => Json(DbTestResponse {
            status: "OK",
            message: "Conexión exitosa",
            tables,
        })
        .into_response(),
        Err(e) => ErrorResponse::database(&e, state.expose_database_errors()).into_response(),
    }
}
