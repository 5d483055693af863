//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Cada sección tiene un constructor `from_vars` que recibe una función de
//! búsqueda, de modo que los tests no dependen del entorno del proceso.

use std::env;
use std::str::FromStr;

use crate::config::database::DatabaseConfig;
use crate::utils::errors::{AppError, AppResult};

/// Leer una variable o devolver el valor por defecto
pub(crate) fn var_or<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}

/// Leer y parsear una variable numérica
pub(crate) fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| {
            AppError::Config(format!("{} debe ser un número válido (valor: '{}')", key, raw))
        }),
        None => Ok(default),
    }
}

/// Leer un flag booleano ("true", "1", "yes", sin distinguir mayúsculas)
pub(crate) fn parse_flag<F>(lookup: &F, key: &str) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Configuración del servidor HTTP
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_vars<F>(lookup: &F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: var_or(lookup, "HOST", "0.0.0.0"),
            port: parse_var(lookup, "PORT", 8501)?,
        })
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Secreto de firma cuando no se define `AUTH_SECRET_KEY`
pub const DEFAULT_SECRET_KEY: &str = "auth_secret_key";

/// Configuración de la cookie de sesión
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub cookie_name: String,
    pub secret_key: String,
    pub cookie_expiry_days: i64,
}

impl AuthConfig {
    pub fn from_vars<F>(lookup: &F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cookie_expiry_days = parse_var(lookup, "AUTH_COOKIE_EXPIRY_DAYS", 1i64)?;
        if cookie_expiry_days <= 0 {
            return Err(AppError::Config(
                "AUTH_COOKIE_EXPIRY_DAYS debe ser mayor que 0".to_string(),
            ));
        }

        Ok(Self {
            cookie_name: var_or(lookup, "AUTH_COOKIE_NAME", "falla_cookie"),
            secret_key: var_or(lookup, "AUTH_SECRET_KEY", DEFAULT_SECRET_KEY),
            cookie_expiry_days,
        })
    }

    /// Las cookies se firman con el secreto por defecto
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

/// Disposición de la página
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Wide,
    Centered,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Wide => "wide",
            Layout::Centered => "centered",
        }
    }
}

impl FromStr for Layout {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wide" => Ok(Layout::Wide),
            "centered" => Ok(Layout::Centered),
            other => Err(AppError::Config(format!(
                "APP_LAYOUT debe ser 'wide' o 'centered' (valor: '{}')",
                other
            ))),
        }
    }
}

/// Configuración de la aplicación
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub app_icon: String,
    pub layout: Layout,
    pub logo_path: String,
    pub debug: bool,
}

impl AppConfig {
    pub fn from_vars<F>(lookup: &F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            app_name: var_or(lookup, "APP_NAME", "Secretaría El Cano"),
            app_icon: var_or(lookup, "APP_ICON", "🔥"),
            layout: var_or(lookup, "APP_LAYOUT", "wide").parse()?,
            logo_path: var_or(lookup, "LOGO_PATH", "assets/logo.png"),
            debug: parse_flag(lookup, "DEBUG"),
        })
    }
}

/// Configuración completa, construida una vez al arrancar el proceso
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub app: AppConfig,
}

impl Settings {
    /// Leer la configuración de las variables de entorno del proceso
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(&|key: &str| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: &F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig::from_vars(lookup)?,
            database: DatabaseConfig::from_vars(lookup)?,
            auth: AuthConfig::from_vars(lookup)?,
            app: AppConfig::from_vars(lookup)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_vars(&lookup_from(&[])).unwrap();

        assert_eq!(settings.server.port, 8501);
        assert_eq!(settings.auth.cookie_name, "falla_cookie");
        assert_eq!(settings.auth.cookie_expiry_days, 1);
        assert_eq!(settings.app.app_name, "Secretaría El Cano");
        assert_eq!(settings.app.layout, Layout::Wide);
        assert_eq!(settings.app.logo_path, "assets/logo.png");
        assert!(!settings.app.debug);
        assert!(!settings.database.init_db);
        assert!(settings.auth.uses_default_secret());
    }

    #[test]
    fn test_overrides() {
        let lookup = lookup_from(&[
            ("PORT", "9000"),
            ("AUTH_COOKIE_NAME", "otra_cookie"),
            ("AUTH_COOKIE_EXPIRY_DAYS", "7"),
            ("APP_LAYOUT", "Centered"),
            ("DEBUG", "True"),
        ]);
        let settings = Settings::from_vars(&lookup).unwrap();

        assert_eq!(settings.server.server_url(), "0.0.0.0:9000");
        assert_eq!(settings.auth.cookie_name, "otra_cookie");
        assert_eq!(settings.auth.cookie_expiry_days, 7);
        assert_eq!(settings.app.layout, Layout::Centered);
        assert!(!Settings::from_vars(&lookup_from(&[("AUTH_SECRET_KEY", "otro")]))
            .unwrap()
            .auth
            .uses_default_secret());
        assert!(settings.app.debug);
    }

    #[test]
    fn test_invalid_numbers_are_config_errors() {
        let lookup = lookup_from(&[("PORT", "ochenta")]);
        assert!(matches!(Settings::from_vars(&lookup), Err(AppError::Config(_))));

        let lookup = lookup_from(&[("AUTH_COOKIE_EXPIRY_DAYS", "0")]);
        assert!(matches!(AuthConfig::from_vars(&lookup), Err(AppError::Config(_))));
    }

    #[test]
    fn test_invalid_layout() {
        let lookup = lookup_from(&[("APP_LAYOUT", "sidebar")]);
        assert!(matches!(AppConfig::from_vars(&lookup), Err(AppError::Config(_))));
    }

    #[test]
    fn test_parse_flag() {
        let lookup = lookup_from(&[("A", "yes"), ("B", "0"), ("C", "TRUE")]);
        assert!(parse_flag(&lookup, "A"));
        assert!(!parse_flag(&lookup, "B"));
        assert!(parse_flag(&lookup, "C"));
        assert!(!parse_flag(&lookup, "MISSING"));
    }
}
