// Error handling framework

use thiserror::Error;

/// Startup configuration errors. Always fatal.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("DATABASE_URL is not defined")]
    MissingDatabaseUrl,

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Validation errors raised by create operations before any statement runs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

/// Database-specific errors
///
/// The kinds are kept apart for logging only; callers treat them uniformly.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Timed out waiting for a pooled connection")]
    PoolTimedOut,

    #[error("Query execution failed: {0}")]
    QueryFailed(String),

    #[error("Failed to decode row: {0}")]
    Decode(String),
}

impl DatabaseError {
    /// The backend's message without the local prefix, as legacy clients saw it.
    pub fn backend_message(&self) -> String {
        match self {
            DatabaseError::ConnectionFailed(msg)
            | DatabaseError::QueryFailed(msg)
            | DatabaseError::Decode(msg) => msg.clone(),
            DatabaseError::PoolTimedOut => self.to_string(),
        }
    }
}

/// Failure of a create operation: rejected input or a backend failure
#[derive(Error, Debug)]
pub enum QueryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => DatabaseError::PoolTimedOut,
            sqlx::Error::Io(e) => DatabaseError::ConnectionFailed(e.to_string()),
            sqlx::Error::Tls(e) => DatabaseError::ConnectionFailed(e.to_string()),
            sqlx::Error::PoolClosed => {
                DatabaseError::ConnectionFailed("connection pool is closed".to_string())
            }
            sqlx::Error::Database(db_err) => DatabaseError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                DatabaseError::Decode(err.to_string())
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

impl From<sqlx::Error> for QueryError {
    fn from(err: sqlx::Error) -> Self {
        QueryError::Database(err.into())
    }
}
