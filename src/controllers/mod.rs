//! Controladores
//!
//! Lógica de cada pantalla: validan la entrada antes de tocar la base de
//! datos y traducen los errores de almacenamiento a mensajes para el usuario.

pub mod fallero_controller;
pub mod usuario_controller;

pub use fallero_controller::FalleroController;
pub use usuario_controller::UsuarioController;

/// Resultado del envío de un formulario de alta
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormOutcome {
    pub errors: Vec<String>,
    pub success: Option<String>,
}

impl FormOutcome {
    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            errors,
            success: None,
        }
    }

    pub fn created(message: &str) -> Self {
        Self {
            errors: Vec::new(),
            success: Some(message.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success.is_some()
    }
}
