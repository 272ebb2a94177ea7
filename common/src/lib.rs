// Database access and query composition for the self-service ordering backend

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod telemetry;
