pub mod clientes;
pub mod empleados;
pub mod health;
pub mod index;
pub mod metrics;
pub mod pagos;
pub mod pedidos;
pub mod productos;

// Common response types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use common::errors::{DatabaseError, QueryError, ValidationError};

pub const MISSING_FIELDS_MESSAGE: &str = "Faltan datos obligatorios";
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

/// Error envelope: `{"status": "ERROR", "message": ...}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip)]
    pub code: StatusCode,
}

impl ErrorResponse {
    pub fn new(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: "ERROR",
            message: message.into(),
            code,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Rejected input. The message is fixed; the detail only goes to the log.
    pub fn validation(err: &ValidationError) -> Self {
        tracing::warn!(error = %err, "Request rejected");
        Self::new(StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE)
    }

    /// Backend failure. The detail is always logged; clients get it only when
    /// `expose` is set.
    pub fn database(err: &DatabaseError, expose: bool) -> Self {
        tracing::error!(error = %err, "Database error");
        if expose {
            Self::internal(err.backend_message())
        } else {
            Self::internal(INTERNAL_ERROR_MESSAGE)
        }
    }

    pub fn query(err: &QueryError, expose: bool) -> Self {
        match err {
            QueryError::Validation(e) => Self::validation(e),
            QueryError::Database(e) => Self::database(e, expose),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.code, Json(self)).into_response()
    }
}

/// Success envelope: `{"status": "OK", "data": ...}`
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub status: &'static str,
    pub data: T,
    #[serde(skip)]
    pub code: StatusCode,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "OK",
            data,
            code: StatusCode::OK,
        }
    }

    pub fn created(data: T) -> Self {
        Self {
            code: StatusCode::CREATED,
            ..Self::new(data)
        }
    }
}

impl<T: Serialize> IntoResponse for SuccessResponse<T> {
    fn into_response(self) -> Response {
        (self.code, Json(self)).into_response()
    }
}
