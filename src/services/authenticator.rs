//! Mecanismo de autenticación
//!
//! Comprueba las credenciales enviadas por el formulario de login contra un
//! conjunto de credenciales ya cargado y gestiona la cookie de sesión firmada.
//! No accede a la base de datos.

use std::collections::HashMap;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::{debug, info, warn};

use crate::config::AuthConfig;
use crate::dto::auth_dto::{LoginForm, LoginResult};
use crate::models::Usuario;
use crate::repositories::usuario_repository::normalize_email;
use crate::services::jwt_service::{JwtService, SessionClaims};
use crate::utils::errors::AppResult;

/// Datos de login de un usuario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialEntry {
    pub name: String,
    pub password_hash: String,
}

/// Conjunto de credenciales: email -> (nombre, hash)
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    usernames: HashMap<String, CredentialEntry>,
}

impl Credentials {
    /// Construir el conjunto con los usuarios activos; el resto se ignora
    pub fn from_users(users: &[Usuario]) -> Self {
        let usernames = users
            .iter()
            .filter(|u| u.is_active())
            .map(|u| {
                (
                    u.email.clone(),
                    CredentialEntry {
                        name: u.nombre.clone(),
                        password_hash: u.hashed_password.clone(),
                    },
                )
            })
            .collect();

        Self { usernames }
    }

    pub fn get(&self, email: &str) -> Option<&CredentialEntry> {
        self.usernames.get(email)
    }

    pub fn contains(&self, email: &str) -> bool {
        self.usernames.contains_key(email)
    }

    pub fn len(&self) -> usize {
        self.usernames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.usernames.is_empty()
    }
}

/// Cookie de sesión con un JWT firmado
#[derive(Clone)]
pub struct SessionCookie {
    cookie_name: String,
    jwt: JwtService,
}

impl SessionCookie {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            cookie_name: config.cookie_name.clone(),
            jwt: JwtService::new(config),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Sesión válida (firma y expiración) presente en la petición
    pub fn read(&self, jar: &CookieJar) -> Option<SessionClaims> {
        let cookie = jar.get(&self.cookie_name)?;
        match self.jwt.validate_token(cookie.value()) {
            Ok(claims) => Some(claims),
            Err(e) => {
                debug!("Cookie de sesión descartada: {}", e);
                None
            }
        }
    }

    pub fn issue(&self, jar: CookieJar, email: &str, name: &str) -> AppResult<CookieJar> {
        let token = self.jwt.generate_session_token(email, name)?;
        let cookie = Cookie::build((self.cookie_name.clone(), token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::seconds(self.jwt.duration().num_seconds()))
            .build();

        Ok(jar.add(cookie))
    }

    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        jar.remove(Cookie::build((self.cookie_name.clone(), "")).path("/").build())
    }
}

pub struct Authenticator {
    credentials: Credentials,
    session: SessionCookie,
}

impl Authenticator {
    pub fn new(credentials: Credentials, config: &AuthConfig) -> Self {
        Self {
            credentials,
            session: SessionCookie::new(config),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Login.
    ///
    /// Con formulario comprueba la contraseña y, si es correcta, emite la
    /// cookie. Sin formulario devuelve el estado de la sesión existente: una
    /// cookie válida cuyo email ya no está entre las credenciales cuenta como
    /// sesión desconocida.
    pub fn login(
        &self,
        jar: CookieJar,
        form: Option<&LoginForm>,
    ) -> AppResult<(CookieJar, LoginResult)> {
        let Some(form) = form else {
            let result = match self.session.read(&jar) {
                Some(claims) if self.credentials.contains(&claims.sub) => {
                    LoginResult::success(claims.name, claims.sub)
                }
                _ => LoginResult::unknown(),
            };
            return Ok((jar, result));
        };

        let email = normalize_email(&form.email);
        let Some(entry) = self.credentials.get(&email) else {
            info!("🔒 Login fallido para '{}': usuario desconocido o inactivo", email);
            return Ok((jar, LoginResult::failed(Some(email))));
        };

        let valid = match bcrypt::verify(&form.password, &entry.password_hash) {
            Ok(valid) => valid,
            Err(e) => {
                warn!("⚠️ Hash de contraseña no válido para '{}': {}", email, e);
                false
            }
        };

        if !valid {
            info!("🔒 Login fallido para '{}': contraseña incorrecta", email);
            return Ok((jar, LoginResult::failed(Some(email))));
        }

        let jar = self.session.issue(jar, &email, &entry.name)?;
        info!("🔓 Login correcto: {}", email);
        Ok((jar, LoginResult::success(entry.name.clone(), email)))
    }

    pub fn logout(&self, jar: CookieJar) -> CookieJar {
        self.session.clear(jar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::auth_dto::AuthStatus;

    fn config() -> AuthConfig {
        AuthConfig {
            cookie_name: "falla_cookie".to_string(),
            secret_key: "secreto".to_string(),
            cookie_expiry_days: 1,
        }
    }

    fn usuario(id: i32, email: &str, password: &str, activo: bool) -> Usuario {
        Usuario {
            id,
            nombre: format!("Usuario {}", id),
            email: email.to_string(),
            hashed_password: bcrypt::hash(password, 4).unwrap(),
            activo,
        }
    }

    fn authenticator() -> Authenticator {
        let users = vec![
            usuario(1, "admin@falla.com", "secret1", true),
            usuario(2, "baja@falla.com", "secret2", false),
        ];
        Authenticator::new(Credentials::from_users(&users), &config())
    }

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_credentials_only_include_active_users() {
        let auth = authenticator();
        assert_eq!(auth.credentials().len(), 1);
        assert!(auth.credentials().contains("admin@falla.com"));
        assert!(!auth.credentials().contains("baja@falla.com"));
    }

    #[test]
    fn test_login_without_form_or_cookie_is_unknown() {
        let (_, result) = authenticator().login(CookieJar::new(), None).unwrap();
        assert_eq!(result, LoginResult::unknown());
    }

    #[test]
    fn test_successful_login_issues_cookie() {
        let auth = authenticator();
        let (jar, result) = auth
            .login(CookieJar::new(), Some(&form(" Admin@Falla.com ", "secret1")))
            .unwrap();

        assert_eq!(result.status, AuthStatus::Success);
        assert_eq!(result.name.as_deref(), Some("Usuario 1"));
        assert_eq!(result.username.as_deref(), Some("admin@falla.com"));
        assert!(jar.get("falla_cookie").is_some());

        // La cookie emitida mantiene la sesión en la siguiente petición
        let (_, again) = auth.login(jar, None).unwrap();
        assert!(again.is_success());
    }

    #[test]
    fn test_wrong_password_fails() {
        let (jar, result) = authenticator()
            .login(CookieJar::new(), Some(&form("admin@falla.com", "wrong")))
            .unwrap();

        assert_eq!(result.status, AuthStatus::Failed);
        assert!(jar.get("falla_cookie").is_none());
    }

    #[test]
    fn test_inactive_user_cannot_login() {
        let (_, result) = authenticator()
            .login(CookieJar::new(), Some(&form("baja@falla.com", "secret2")))
            .unwrap();

        assert_eq!(result.status, AuthStatus::Failed);
    }

    #[test]
    fn test_session_of_user_no_longer_active_is_unknown() {
        let session = SessionCookie::new(&config());
        let jar = session
            .issue(CookieJar::new(), "baja@falla.com", "Usuario 2")
            .unwrap();

        let (_, result) = authenticator().login(jar, None).unwrap();
        assert_eq!(result.status, AuthStatus::Unknown);
    }

    #[test]
    fn test_logout_clears_session() {
        let auth = authenticator();
        let (jar, _) = auth
            .login(CookieJar::new(), Some(&form("admin@falla.com", "secret1")))
            .unwrap();

        let jar = auth.logout(jar);
        assert!(jar.get("falla_cookie").is_none());

        let (_, result) = auth.login(jar, None).unwrap();
        assert_eq!(result.status, AuthStatus::Unknown);
    }
}
