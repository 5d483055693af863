use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, warn};

use crate::config::AuthConfig;
use crate::database::DatabaseManager;
use crate::dto::auth_dto::{LoginForm, LoginResult};
use crate::services::authenticator::{Authenticator, Credentials};
use crate::utils::errors::AppResult;

/// Adaptador de autenticación
///
/// Se construye en cada petición de login con los usuarios activos del momento
/// y delega la comprobación de la contraseña y la cookie en `Authenticator`.
pub struct AuthManager {
    authenticator: Authenticator,
}

impl AuthManager {
    /// Cargar las credenciales de los usuarios activos
    pub async fn new(db: &DatabaseManager, config: &AuthConfig) -> AppResult<Self> {
        let users = db.get_active_users().await?;
        let credentials = Credentials::from_users(&users);
        debug!("🔑 Credenciales cargadas: {} usuarios activos", credentials.len());

        if credentials.is_empty() {
            warn!("⚠️ No hay usuarios activos en la base de datos");
        }

        Ok(Self::with_credentials(credentials, config))
    }

    pub fn with_credentials(credentials: Credentials, config: &AuthConfig) -> Self {
        Self {
            authenticator: Authenticator::new(credentials, config),
        }
    }

    pub fn has_active_users(&self) -> bool {
        !self.authenticator.credentials().is_empty()
    }

    /// Devuelve (nombre, estado, email) y la cookie actualizada
    pub fn login(
        &self,
        jar: CookieJar,
        form: Option<&LoginForm>,
    ) -> AppResult<(CookieJar, LoginResult)> {
        self.authenticator.login(jar, form)
    }

    pub fn logout(&self, jar: CookieJar) -> CookieJar {
        self.authenticator.logout(jar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::auth_dto::AuthStatus;
    use crate::models::Usuario;

    fn config() -> AuthConfig {
        AuthConfig {
            cookie_name: "falla_cookie".to_string(),
            secret_key: "secreto".to_string(),
            cookie_expiry_days: 1,
        }
    }

    #[test]
    fn test_no_active_users() {
        let manager = AuthManager::with_credentials(Credentials::default(), &config());
        assert!(!manager.has_active_users());

        let form = LoginForm {
            email: "admin@falla.com".to_string(),
            password: "secret1".to_string(),
        };
        let (_, result) = manager.login(CookieJar::new(), Some(&form)).unwrap();
        assert_eq!(result.status, AuthStatus::Failed);
    }

    #[test]
    fn test_login_and_logout() {
        let users = vec![Usuario {
            id: 1,
            nombre: "Admin".to_string(),
            email: "admin@falla.com".to_string(),
            hashed_password: bcrypt::hash("secret1", 4).unwrap(),
            activo: true,
        }];
        let manager = AuthManager::with_credentials(Credentials::from_users(&users), &config());
        assert!(manager.has_active_users());

        let form = LoginForm {
            email: "admin@falla.com".to_string(),
            password: "secret1".to_string(),
        };
        let (jar, result) = manager.login(CookieJar::new(), Some(&form)).unwrap();
        assert_eq!(result, LoginResult::success("Admin".to_string(), "admin@falla.com".to_string()));

        let jar = manager.logout(jar);
        let (_, result) = manager.login(jar, None).unwrap();
        assert_eq!(result.status, AuthStatus::Unknown);
    }
}
