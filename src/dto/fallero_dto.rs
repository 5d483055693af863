use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use super::filter_dto::{non_empty, EstadoFiltro};
use crate::utils::validation::{
    parse_date, validate_dni, validate_fallero_form, validate_name, ValidationResult,
};

// Formulario de alta de fallero
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NuevoFalleroForm {
    #[validate(length(max = 50, message = "El nombre no puede superar los 50 caracteres."))]
    pub nombre: String,

    #[validate(length(max = 100, message = "Los apellidos no pueden superar los 100 caracteres."))]
    pub apellidos: String,

    pub dni: String,

    /// Valor del `<input type="date">`, vacío si no se ha rellenado
    #[serde(default)]
    pub fecha_nacimiento: String,
}

impl NuevoFalleroForm {
    /// Validar el formulario completo.
    ///
    /// Devuelve la fecha de nacimiento ya convertida junto con el resultado,
    /// para no volver a parsearla al insertar.
    pub fn validate_form(&self) -> (Option<NaiveDate>, ValidationResult) {
        let mut result = ValidationResult::new();

        let fecha = match parse_date(&self.fecha_nacimiento) {
            Ok(fecha) => {
                result.merge(validate_fallero_form(
                    &self.nombre,
                    &self.apellidos,
                    &self.dni,
                    fecha,
                ));
                fecha
            }
            Err(message) => {
                // Fecha ilegible: se validan el resto de campos igualmente
                result.merge(validate_name(&self.nombre, "nombre"));
                result.merge(validate_name(&self.apellidos, "apellidos"));
                result.merge(validate_dni(&self.dni));
                result.add_error(message);
                None
            }
        };
        if let Err(errors) = self.validate() {
            result.merge_validator_errors(&errors);
        }

        (fecha, result)
    }
}

// Filtros del listado de falleros (query string)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FiltroFalleros {
    pub nombre: Option<String>,
    pub apellidos: Option<String>,
    #[serde(default)]
    pub estado: EstadoFiltro,
}

impl FiltroFalleros {
    pub fn nombre(&self) -> Option<&str> {
        non_empty(&self.nombre)
    }

    pub fn apellidos(&self) -> Option<&str> {
        non_empty(&self.apellidos)
    }
}
