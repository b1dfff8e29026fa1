//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Los valores se leen a
//! través de una función de búsqueda para poder probarlos sin tocar el
//! entorno del proceso.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("{0} must be set in production")]
    Missing(&'static str),
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub log_level: tracing::Level,
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
    pub run_migrations: bool,
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());
        let database_url = resolve_database_url(
            &environment,
            lookup("DATABASE_URL"),
            lookup("DATABASE_HOST"),
        )?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", lookup("PORT"), DEFAULT_PORT, "port number")?,
            database_url,
            log_level: parse_or("LOG_LEVEL", lookup("LOG_LEVEL"), tracing::Level::INFO, "log level")?,
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            request_timeout: Duration::from_secs(parse_or(
                "REQUEST_TIMEOUT_SECS",
                lookup("REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
                "number of seconds",
            )?),
            run_migrations: parse_or("RUN_MIGRATIONS", lookup("RUN_MIGRATIONS"), false, "boolean")?,
            environment,
        })
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            value: raw,
            expected,
        }),
    }
}

/// `DATABASE_URL` tiene prioridad; fuera de producción se arma una URL local
fn resolve_database_url(
    environment: &str,
    database_url: Option<String>,
    database_host: Option<String>,
) -> Result<String, ConfigError> {
    if let Some(url) = database_url {
        return Ok(url);
    }
    if environment == "production" {
        return Err(ConfigError::Missing("DATABASE_URL"));
    }

    let host = database_host.unwrap_or_else(|| "localhost".to_string());
    Ok(format!(
        "postgres://postgres:postgres@{}:5432/postgres?sslmode=disable",
        host
    ))
}
