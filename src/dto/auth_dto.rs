use serde::Deserialize;

// Formulario de login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Estado de autenticación de la petición actual
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// Sin sesión y sin intento de login
    Unknown,
    Failed,
    Success,
}

// Resultado de login: (nombre, estado, identificador)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    pub name: Option<String>,
    pub status: AuthStatus,
    pub username: Option<String>,
}

impl LoginResult {
    pub fn success(name: String, username: String) -> Self {
        Self {
            name: Some(name),
            status: AuthStatus::Success,
            username: Some(username),
        }
    }

    pub fn failed(username: Option<String>) -> Self {
        Self {
            name: None,
            status: AuthStatus::Failed,
            username,
        }
    }

    pub fn unknown() -> Self {
        Self {
            name: None,
            status: AuthStatus::Unknown,
            username: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == AuthStatus::Success
    }
}
