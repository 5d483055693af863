//! Modelo de Usuario
//!
//! Cuenta de acceso a la aplicación. El email es el identificador de login.

use serde::Serialize;
use sqlx::FromRow;

use super::{format_activo, TableRow};

/// Usuario - mapea exactamente a la tabla "Usuario"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Usuario {
    pub id: i32,
    pub nombre: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub activo: bool,
}

impl Usuario {
    pub fn is_active(&self) -> bool {
        self.activo
    }
}

impl TableRow for Usuario {
    fn columns() -> &'static [&'static str] {
        &["ID", "Nombre", "Email", "Activo"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.nombre.clone(),
            self.email.clone(),
            format_activo(self.activo),
        ]
    }
}
