//! Modelo de Fallero
//!
//! Un fallero es un miembro registrado de la falla. Mapea exactamente a la
//! tabla `Fallero`.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{format_activo, TableRow};

/// Fallero - mapea exactamente a la tabla "Fallero"
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Fallero {
    pub id: i32,
    pub nombre: String,
    pub apellidos: String,
    pub dni: String,
    pub fecha_nacimiento: NaiveDate,
    pub fecha_alta: NaiveDate,
    pub activo: bool,
}

impl Fallero {
    /// Nombre completo para mostrar
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellidos)
    }
}

impl fmt::Debug for Fallero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Fallero(id={}, nombre='{}', apellidos='{}')>",
            self.id, self.nombre, self.apellidos
        )
    }
}

impl TableRow for Fallero {
    fn columns() -> &'static [&'static str] {
        &[
            "ID",
            "Nombre",
            "Apellidos",
            "DNI",
            "Fecha de nacimiento",
            "Fecha de alta",
            "Activo",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.nombre.clone(),
            self.apellidos.clone(),
            self.dni.clone(),
            self.fecha_nacimiento.format("%Y-%m-%d").to_string(),
            self.fecha_alta.format("%Y-%m-%d").to_string(),
            format_activo(self.activo),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallero() -> Fallero {
        Fallero {
            id: 1,
            nombre: "Juan".to_string(),
            apellidos: "García López".to_string(),
            dni: "12345678Z".to_string(),
            fecha_nacimiento: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            fecha_alta: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            activo: true,
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(fallero().full_name(), "Juan García López");
    }

    #[test]
    fn test_debug_representation() {
        assert_eq!(
            format!("{:?}", fallero()),
            "<Fallero(id=1, nombre='Juan', apellidos='García López')>"
        );
    }

    #[test]
    fn test_row_matches_columns() {
        let f = fallero();
        let row = f.row();

        assert_eq!(row.len(), Fallero::columns().len());
        assert_eq!(row[3], "12345678Z");
        assert_eq!(row[4], "1990-01-01");
        assert_eq!(row[6], "Sí");
    }
}
