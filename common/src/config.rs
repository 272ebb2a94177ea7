// Configuration management with layered configuration (defaults, file, env)

use crate::errors::ConfigurationError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgSslMode;
use std::path::Path;

/// Main settings structure containing all configuration options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_seconds: u64,
    pub idle_timeout_seconds: u64,
    pub ssl_mode: SslMode,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 0,
            connect_timeout_seconds: 10,
            idle_timeout_seconds: 10,
            ssl_mode: SslMode::Require,
        }
    }
}

/// Transport security for backend sessions.
///
/// `Require` encrypts the session without verifying the server certificate,
/// which is what hosted providers with self-signed certificates need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SslMode {
    Disable,
    Allow,
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

impl From<SslMode> for PgSslMode {
    fn from(mode: SslMode) -> Self {
        match mode {
            SslMode::Disable => PgSslMode::Disable,
            SslMode::Allow => PgSslMode::Allow,
            SslMode::Prefer => PgSslMode::Prefer,
            SslMode::Require => PgSslMode::Require,
            SslMode::VerifyCa => PgSslMode::VerifyCa,
            SslMode::VerifyFull => PgSslMode::VerifyFull,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Pass raw backend error messages through to HTTP clients.
    ///
    /// Older clients read these for diagnostics. Leaks schema details, so it
    /// stays off unless a deployment opts in.
    pub expose_database_errors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Settings {
    /// Load configuration with layered precedence:
    /// defaults → config/default.toml → config/local.toml → APP__* → DATABASE_URL / PORT
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn load() -> Result<Self, ConfigurationError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::load_from_path("config")
    }

    /// Load configuration from a specific directory, honouring the process environment
    pub fn load_from_path<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigurationError> {
        Self::load_with_overrides(
            config_dir,
            std::env::var("DATABASE_URL").ok(),
            std::env::var("PORT").ok(),
        )
    }

    /// Load configuration with explicit values for the legacy `DATABASE_URL` and `PORT`
    /// variables, which take precedence over every other source.
    pub fn load_with_overrides<P: AsRef<Path>>(
        config_dir: P,
        database_url: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigurationError> {
        let config_dir = config_dir.as_ref();

        let port = port
            .map(|raw| {
                raw.trim()
                    .parse::<u16>()
                    .map(i64::from)
                    .map_err(|_| ConfigurationError::InvalidValue {
                        field: "PORT",
                        reason: format!("'{}' is not a valid port", raw),
                    })
            })
            .transpose()?;

        let builder = Config::builder()
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Local configuration (not committed to git)
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", database_url.filter(|u| !u.is_empty()))?
            .set_override_option("server.port", port)?;

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration settings.
    ///
    /// A missing database URL is fatal: no endpoint can work without it.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigurationError::MissingDatabaseUrl);
        }
        if self.server.port == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "server.port",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.database.max_connections == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "database.max_connections",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigurationError::InvalidValue {
                field: "database.min_connections",
                reason: "cannot exceed max_connections".to_string(),
            });
        }
        if self.database.connect_timeout_seconds == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "database.connect_timeout_seconds",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.database.url = "postgresql://localhost/autoservicio".to_string();
        settings
    }

    #[test]
    fn test_defaults_match_legacy_deployment() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.database.max_connections, 10);
        assert_eq!(settings.database.connect_timeout_seconds, 10);
        assert_eq!(settings.database.idle_timeout_seconds, 10);
        assert_eq!(settings.database.ssl_mode, SslMode::Require);
        assert!(!settings.api.expose_database_errors);
    }

    #[test]
    fn test_valid_settings_pass_validation() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_validation_catches_missing_database_url() {
        let settings = Settings::default();
        assert!(matches!(
            settings.validate(),
            Err(ConfigurationError::MissingDatabaseUrl)
        ));

        let mut blank = valid_settings();
        blank.database.url = "   ".to_string();
        assert!(matches!(
            blank.validate(),
            Err(ConfigurationError::MissingDatabaseUrl)
        ));
    }

    #[test]
    fn test_validation_catches_zero_port() {
        let mut settings = valid_settings();
        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_catches_inverted_pool_bounds() {
        let mut settings = valid_settings();
        settings.database.min_connections = 11;
        assert!(settings.validate().is_err());

        settings.database.min_connections = 0;
        settings.database.max_connections = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_legacy_env_overrides_take_precedence() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            r#"
            [server]
            port = 8080

            [database]
            url = "postgresql://from-file/db"
            max_connections = 4
            ssl_mode = "disable"
            "#,
        )
        .unwrap();

        let settings = Settings::load_with_overrides(
            dir.path(),
            Some("postgresql://from-env/db".to_string()),
            Some("4000".to_string()),
        )
        .unwrap();

        assert_eq!(settings.database.url, "postgresql://from-env/db");
        assert_eq!(settings.server.port, 4000);
        assert_eq!(settings.database.max_connections, 4);
        assert_eq!(settings.database.ssl_mode, SslMode::Disable);
        // untouched sections keep their defaults
        assert_eq!(settings.database.idle_timeout_seconds, 10);
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_with_overrides(dir.path(), None, None).unwrap();
        assert_eq!(settings.server.port, 3000);
        assert!(settings.database.url.is_empty());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::load_with_overrides(dir.path(), None, Some("http".to_string()));
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidValue { field: "PORT", .. })
        ));
    }
}
