use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Banner {
    pub message: &'static str,
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Service banner at the root URL
#[tracing::instrument]
pub async fn index() -> Json<Banner> {
    Json(Banner {
        message: "🍔 API de Autoservicio de Hamburguesas",
        status: "OK",
        timestamp: Utc::now(),
    })
}
