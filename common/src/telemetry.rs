// Telemetry module for structured logging and query metrics

use crate::config::LogFormat;
use anyhow::Result;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize structured logging
///
/// `RUST_LOG` takes precedence over the configured level. JSON output carries
/// the current span so every query log line names its operation.
pub fn init_logging(log_level: &str, format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .map_err(|e| anyhow::anyhow!("Failed to create env filter: {}", e))?;

    let layer = match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(false)
            .with_filter(env_filter)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {}", e))?;

    tracing::info!(log_level = log_level, format = ?format, "Logging initialized");

    Ok(())
}

/// Install the Prometheus recorder and describe the query metrics:
/// - db_queries_total: Counter of statements by operation and outcome
/// - db_query_duration_seconds: Histogram of statement latency by operation
///
/// The returned handle renders the exposition text for `/metrics`.
pub fn init_metrics() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {}", e))?;

    describe_counter!(
        "db_queries_total",
        "Total number of database statements by operation and outcome"
    );
    describe_histogram!(
        "db_query_duration_seconds",
        "Duration of database statements in seconds"
    );

    tracing::info!("Prometheus metrics recorder installed");
    Ok(handle)
}

/// Record one database statement
#[inline]
pub fn record_query(operation: &'static str, duration_seconds: f64, success: bool) {
    let outcome = if success { "ok" } else { "error" };
    counter!("db_queries_total", "operation" => operation, "outcome" => outcome).increment(1);
    histogram!("db_query_duration_seconds", "operation" => operation).record(duration_seconds);
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[test]
    fn test_logging_installs_once() {
        assert!(init_logging("info", LogFormat::Json).is_ok());

        let second = init_logging("debug", LogFormat::Pretty).unwrap_err();
        assert!(second
            .to_string()
            .contains("Failed to initialize tracing subscriber"));
    }

    #[test]
    fn test_record_query_labels_operation_and_outcome() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            record_query("list_productos", 0.004, true);
            record_query("list_productos", 0.006, true);
            record_query("create_pago", 0.010, false);
        });

        let rendered = handle.render();
        assert!(rendered.contains(r#"db_queries_total{operation="list_productos",outcome="ok"} 2"#));
        assert!(rendered.contains(r#"db_queries_total{operation="create_pago",outcome="error"} 1"#));
        assert!(rendered.contains(r#"db_query_duration_seconds_count{operation="create_pago"} 1"#));
    }
}
