//! Rutas HTTP
//!
//! Las rutas de falleros y usuarios solo son accesibles con sesión; login,
//! logout y el logo son públicos.

pub mod auth_routes;
pub mod fallero_routes;
pub mod usuario_routes;

use axum::{
    middleware,
    response::Redirect,
    routing::get,
    Router,
};
use tower_http::{services::ServeFile, trace::TraceLayer};

use crate::messages;
use crate::middleware::require_session;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::views::PATH_FALLEROS;

pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/", get(|| async { Redirect::to(PATH_FALLEROS) }))
        .merge(fallero_routes::create_fallero_router())
        .merge(usuario_routes::create_usuario_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    Router::new()
        .merge(auth_routes::create_auth_router())
        .route_service("/logo", ServeFile::new(&state.settings.app.logo_path))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router usado cuando la base de datos no está disponible al arrancar:
/// cualquier petición recibe el aviso de base de datos inexistente
pub fn create_unavailable_router() -> Router {
    Router::new()
        .fallback(database_unavailable)
        .layer(TraceLayer::new_for_http())
}

async fn database_unavailable() -> AppError {
    AppError::ServiceUnavailable(messages::DB_NOT_EXISTS.to_string())
}
