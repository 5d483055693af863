//! Services module
//!
//! Autenticación de la aplicación: token de sesión, comprobación de
//! credenciales y el adaptador que construye el conjunto de credenciales
//! a partir de los usuarios activos.

pub mod auth_service;
pub mod authenticator;
pub mod jwt_service;

pub use auth_service::AuthManager;
pub use authenticator::{Authenticator, Credentials, SessionCookie};
pub use jwt_service::{JwtService, SessionClaims};
