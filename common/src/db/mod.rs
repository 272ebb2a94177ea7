// Database layer module: connection pool plus one repository per entity

pub mod pool;
pub mod repositories;

pub use pool::DbPool;

use crate::errors::DatabaseError;
use crate::telemetry;
use std::future::Future;
use std::time::Instant;

/// Run one statement, recording its latency and outcome under `operation`.
pub(crate) async fn observe<T, F>(operation: &'static str, statement: F) -> Result<T, DatabaseError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    let started = Instant::now();
    let result = statement.await;
    telemetry::record_query(operation, started.elapsed().as_secs_f64(), result.is_ok());

    result.map_err(|e| {
        let err = DatabaseError::from(e);
        tracing::error!(operation, error = %err, "Database statement failed");
        err
    })
}
