//! Configuración de base de datos
//!
//! Este módulo maneja la conexión y configuración de PostgreSQL con SQLx.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::config::environment::{parse_flag, parse_var, var_or};
use crate::utils::errors::{AppError, AppResult};

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// `DATABASE_URL`, sustituye por completo a los parámetros sueltos
    pub url_override: Option<String>,
    pub init_db: bool,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn from_vars<F>(lookup: &F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs: u64 = parse_var(lookup, "DB_CONNECT_TIMEOUT_SECS", 10)?;

        Ok(Self {
            url_override: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            init_db: parse_flag(lookup, "INIT_DB"),
            host: var_or(lookup, "DB_HOST", "localhost"),
            port: parse_var(lookup, "DB_PORT", 5432)?,
            database: var_or(lookup, "DB_NAME", "secretaria-el-cano"),
            username: var_or(lookup, "DB_USERNAME", "postgres"),
            password: var_or(lookup, "DB_PASSWORD", ""),
            max_connections: parse_var(lookup, "DB_MAX_CONNECTIONS", 10)?,
            connect_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// URL de conexión, la explícita o la montada con los parámetros
    pub fn url(&self) -> String {
        match &self.url_override {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.username, self.password, self.host, self.port, self.database
            ),
        }
    }

    /// Opciones de conexión de SQLx
    pub fn connect_options(&self) -> AppResult<PgConnectOptions> {
        match &self.url_override {
            Some(url) => PgConnectOptions::from_str(url)
                .map_err(|e| AppError::Config(format!("DATABASE_URL inválida: {}", e))),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .database(&self.database)
                .username(&self.username)
                .password(&self.password)),
        }
    }

    /// Crear el pool de conexiones. No abre ninguna conexión hasta la primera operación.
    pub fn create_pool(&self) -> AppResult<PgPool> {
        let options = self.connect_options()?;

        Ok(PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.connect_timeout)
            .connect_lazy_with(options))
    }
}

/// Enmascarar las credenciales de una URL de base de datos para los logs
pub fn mask_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let Some(at_pos) = url.rfind('@') else {
        return url.to_string();
    };
    if at_pos < scheme_end {
        return url.to_string();
    }

    format!("{}***:***@{}", &url[..scheme_end + 3], &url[at_pos + 1..])
}
