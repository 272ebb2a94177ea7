use axum::{
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the main application router with all routes and middleware
#[tracing::instrument(skip(state))]
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Diagnostics
    let diagnostic_routes = Router::new()
        .route("/", get(handlers::index::index))
        .route("/db-test", get(handlers::health::db_test))
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::metrics_handler));

    let api_routes = Router::new()
        .route("/api/productos", get(handlers::productos::list_productos))
        .route(
            "/api/productos/detalle",
            get(handlers::productos::list_productos_detalle),
        )
        .route("/api/pedidos", get(handlers::pedidos::list_pedidos))
        .route(
            "/api/clientes",
            get(handlers::clientes::list_clientes).post(handlers::clientes::create_cliente),
        )
        .route("/api/empleados", get(handlers::empleados::list_empleados))
        .route(
            "/api/pagos",
            get(handlers::pagos::list_pagos).post(handlers::pagos::create_pago),
        );

    Router::new()
        .merge(diagnostic_routes)
        .merge(api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
