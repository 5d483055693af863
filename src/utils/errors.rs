//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP (páginas HTML) apropiadas.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::views::ErrorPage;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// Base de datos inaccesible o fallo de la consulta
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Violación de una clave única (DNI o email duplicado)
    #[error("Integrity error: {0}")]
    Integrity(String),

    #[error("Validation error: {}", .0.join(" "))]
    Validation(Vec<String>),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Session token error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Integrity(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unauthorized(_) | AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Config(_)
            | AppError::Template(_)
            | AppError::Hash(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Texto que se muestra al usuario
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => e.to_string(),
            AppError::Integrity(msg)
            | AppError::Unauthorized(msg)
            | AppError::NotFound(msg)
            | AppError::Config(msg)
            | AppError::ServiceUnavailable(msg) => msg.clone(),
            AppError::Validation(errors) => errors.join(" "),
            AppError::Template(_) | AppError::Hash(_) | AppError::Internal(_) => {
                "Se ha producido un error inesperado".to_string()
            }
            AppError::Jwt(_) => "La sesión no es válida".to_string(),
        }
    }

    fn title(&self) -> &'static str {
        match self {
            AppError::Database(_) => "Error de base de datos",
            AppError::Integrity(_) => "Registro duplicado",
            AppError::Validation(_) => "Datos no válidos",
            AppError::Unauthorized(_) | AppError::Jwt(_) => "No autorizado",
            AppError::NotFound(_) => "No encontrado",
            AppError::ServiceUnavailable(_) => "Servicio no disponible",
            AppError::Config(_) => "Error de configuración",
            AppError::Template(_) | AppError::Hash(_) | AppError::Internal(_) => {
                "Error interno"
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("❌ {}", self);
        } else {
            warn!("⚠️ {}", self);
        }

        let page = ErrorPage::new(self.title(), self.user_message());
        match page.render_html() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                error!("❌ Error renderizando la página de error: {}", e);
                (status, self.user_message()).into_response()
            }
        }
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Convertir el error de un INSERT: las claves duplicadas pasan a `Integrity`
pub fn map_insert_error<F>(e: sqlx::Error, duplicate_message: F) -> AppError
where
    F: FnOnce() -> String,
{
    if let sqlx::Error::Database(db_error) = &e {
        if db_error.is_unique_violation() {
            return AppError::Integrity(duplicate_message());
        }
    }
    AppError::Database(e)
}

/// Función helper para crear errores de clave duplicada
pub fn integrity_error(resource: &str, field: &str, value: &str) -> AppError {
    AppError::Integrity(format!("Ya existe un {} con {} '{}'", resource, field, value))
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("No existe ningún {} con '{}'", resource, id))
}

/// Función helper para crear errores internos
pub fn internal_error(message: &str) -> AppError {
    AppError::Internal(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Integrity("dup".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Validation(vec!["x".into()]).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::ServiceUnavailable("db".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::Database(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message_joins_errors() {
        let err = AppError::Validation(vec!["Uno.".into(), "Dos.".into()]);
        assert_eq!(err.user_message(), "Uno. Dos.");
        assert_eq!(err.to_string(), "Validation error: Uno. Dos.");
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = internal_error("stack trace secreto");
        assert!(!err.user_message().contains("secreto"));
    }

    #[test]
    fn test_helpers() {
        let err = integrity_error("fallero", "DNI", "12345678Z");
        assert_eq!(err.user_message(), "Ya existe un fallero con DNI '12345678Z'");

        let err = not_found_error("usuario", "a@b.com");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_map_insert_error_keeps_connectivity_errors() {
        let err = map_insert_error(sqlx::Error::PoolTimedOut, || "dup".to_string());
        assert!(matches!(err, AppError::Database(sqlx::Error::PoolTimedOut)));
    }

    #[tokio::test]
    async fn test_into_response_renders_html() {
        let response = AppError::Integrity("Ya existe".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Ya existe"));
    }
}
