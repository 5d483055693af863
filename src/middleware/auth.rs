//! Middleware de sesión
//!
//! Solo deja pasar peticiones con una cookie de sesión válida; el resto se
//! redirige a la página de login. Los claims de la sesión quedan en las
//! extensiones de la petición para los handlers.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use crate::state::AppState;

/// Comprueba firma y caducidad del token, sin consultar la base de datos.
///
/// Un usuario desactivado después de iniciar sesión conserva el acceso hasta
/// que caduca su cookie (`AUTH_COOKIE_EXPIRY_DAYS`). La página de login sí
/// exige que el email siga entre los usuarios activos.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    match state.session.read(&jar) {
        Some(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        None => {
            debug!("🔒 Petición sin sesión a {}", request.uri().path());
            Redirect::to("/login").into_response()
        }
    }
}
