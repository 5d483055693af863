use serde::Deserialize;
use validator::Validate;

use super::filter_dto::{non_empty, EstadoFiltro};
use crate::utils::validation::{validate_usuario_form, ValidationResult};

// Formulario de alta de usuario
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NuevoUsuarioForm {
    #[validate(length(max = 255, message = "El nombre de usuario no puede superar los 255 caracteres."))]
    pub nombre: String,

    #[validate(length(max = 255, message = "El email no puede superar los 255 caracteres."))]
    pub email: String,

    pub password: String,

    /// Checkbox HTML: presente ("on") solo si está marcado
    pub activo: Option<String>,
}

impl NuevoUsuarioForm {
    pub fn activo(&self) -> bool {
        self.activo.is_some()
    }

    pub fn validate_form(&self) -> ValidationResult {
        let mut result = validate_usuario_form(&self.nombre, &self.email, &self.password);
        if let Err(errors) = self.validate() {
            result.merge_validator_errors(&errors);
        }
        result
    }
}

// Filtros del listado de usuarios (query string)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FiltroUsuarios {
    pub nombre: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub estado: EstadoFiltro,
}

impl FiltroUsuarios {
    pub fn nombre(&self) -> Option<&str> {
        non_empty(&self.nombre)
    }

    pub fn email(&self) -> Option<&str> {
        non_empty(&self.email)
    }
}
