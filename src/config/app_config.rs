use std::{env, str::FromStr, time::Duration};

use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub run_migrations: bool,
}

/// Empty `allowed_origins` means any origin is accepted.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            server: ServerConfig {
                host: var("HOST", "0.0.0.0"),
                port: parse(&var("PORT", "5000"), "PORT")?,
                max_body_size: parse(&var("MAX_BODY_SIZE", "1048576"), "MAX_BODY_SIZE")?,
            },
            database: DatabaseConfig {
                host: var("DB_HOST", "localhost"),
                port: parse(&var("DB_PORT", "5432"), "DB_PORT")?,
                name: var("DB_NAME", "labanita_db"),
                user: var("DB_USER", "postgres"),
                password: lookup("DB_PASSWORD")
                    .ok_or_else(|| AppError::ConfigError("DB_PASSWORD not set".to_string()))?,
                max_connections: parse(&var("DB_MAX_CONNECTIONS", "20"), "DB_MAX_CONNECTIONS")?,
                acquire_timeout: Duration::from_secs(parse(
                    &var("DB_ACQUIRE_TIMEOUT_SECS", "5"),
                    "DB_ACQUIRE_TIMEOUT_SECS",
                )?),
                run_migrations: parse(&var("DB_RUN_MIGRATIONS", "false"), "DB_RUN_MIGRATIONS")?,
            },
            cors: CorsConfig {
                allowed_origins: lookup("FRONTEND_URL")
                    .map(|urls| {
                        urls.split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse<T: FromStr>(value: &str, key: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::ConfigError(format!("Invalid {} value", key)))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_password_is_set() {
        let config = config_from(&[("DB_PASSWORD", "123456")]).unwrap();

        assert_eq!(config.server_address(), "0.0.0.0:5000");
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.name, "labanita_db");
        assert_eq!(config.database.user, "postgres");
        assert_eq!(config.database.password, "123456");
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.database.acquire_timeout, Duration::from_secs(5));
        assert!(!config.database.run_migrations);
        assert!(config.cors.allowed_origins.is_empty());
    }

    #[test]
    fn missing_password_is_a_config_error() {
        let err = config_from(&[]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(msg) if msg.contains("DB_PASSWORD")));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config_from(&[("DB_PASSWORD", "x"), ("PORT", "http")]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(msg) if msg == "Invalid PORT value"));
    }

    #[test]
    fn frontend_urls_are_split_and_trimmed() {
        let config = config_from(&[
            ("DB_PASSWORD", "x"),
            ("FRONTEND_URL", "http://localhost:8081, https://shop.example.com,"),
            ("DB_RUN_MIGRATIONS", "true"),
        ])
        .unwrap();

        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://localhost:8081", "https://shop.example.com"]
        );
        assert!(config.database.run_migrations);
    }
}
