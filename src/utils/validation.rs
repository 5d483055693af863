//! Utilidades de validación
//!
//! Validadores puros para los datos de los formularios. Ninguno devuelve
//! error para una entrada incorrecta: el resultado lleva el flag de validez
//! y la lista de mensajes para el usuario.

use chrono::{Datelike, Local, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationErrors;

use crate::messages;

/// Letras de control del DNI, indexadas por `número % 23`
pub const DNI_LETTERS: &str = "TRWAGMYFPDXBNJZSQVHLCKE";

/// Longitud mínima de contraseña por defecto
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 6;

/// Edad máxima aceptada para una fecha de nacimiento
pub const MAX_AGE_YEARS: i32 = 120;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("email regex is valid");
}

/// Resultado de una validación
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Unir los errores de otro resultado
    pub fn merge(&mut self, other: ValidationResult) {
        for error in other.errors {
            self.add_error(error);
        }
    }

    /// Añadir los errores de un `#[derive(Validate)]`, ordenados por campo
    pub fn merge_validator_errors(&mut self, errors: &ValidationErrors) {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by_key(|(field, _)| *field);

        for (field, field_errors) in fields {
            for e in field_errors.iter() {
                match &e.message {
                    Some(message) => self.add_error(message.to_string()),
                    None => self.add_error(format!("El campo {} no es válido.", field)),
                }
            }
        }
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// Normalizar un DNI: sin espacios alrededor y en mayúsculas
pub fn normalize_dni(dni: &str) -> String {
    dni.trim().to_uppercase()
}

/// Letra de control que corresponde a la parte numérica de un DNI
pub fn dni_letter(number: u32) -> char {
    let index = (number % 23) as usize;
    DNI_LETTERS.as_bytes()[index] as char
}

/// Validar el formato y la letra de control de un DNI español
pub fn validate_dni(dni: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if dni.trim().is_empty() {
        result.add_error(messages::VALIDATION_DNI_INVALID);
        return result;
    }

    let dni = normalize_dni(dni);
    let chars: Vec<char> = dni.chars().collect();

    // 8 dígitos + 1 letra
    let well_formed = chars.len() == 9
        && chars[..8].iter().all(|c| c.is_ascii_digit())
        && chars[8].is_alphabetic();
    if !well_formed {
        result.add_error(messages::VALIDATION_DNI_INVALID);
        return result;
    }

    let number: u32 = match dni[..8].parse() {
        Ok(number) => number,
        Err(_) => {
            result.add_error(messages::VALIDATION_DNI_INVALID);
            return result;
        }
    };

    if chars[8] != dni_letter(number) {
        result.add_error(messages::VALIDATION_DNI_CHECK_LETTER);
    }

    result
}

/// Validar formato de email
pub fn validate_email(email: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if email.trim().is_empty() || !EMAIL_REGEX.is_match(email.trim()) {
        result.add_error(messages::VALIDATION_EMAIL_INVALID);
    }

    result
}

/// Validar la longitud mínima de una contraseña
pub fn validate_password(password: &str, min_length: usize) -> ValidationResult {
    let mut result = ValidationResult::new();

    if password.is_empty() {
        result.add_error(messages::validation_password_min_length(min_length));
        return result;
    }

    if password.chars().count() < min_length {
        result.add_error(messages::validation_password_min_length(min_length));
    }

    result
}

/// Validar que un campo de nombre no esté vacío
pub fn validate_name(name: &str, field_label: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if name.trim().is_empty() {
        let message = match field_label {
            "nombre" => messages::VALIDATION_NAME_REQUIRED.to_string(),
            "apellidos" => messages::VALIDATION_SURNAME_REQUIRED.to_string(),
            "usuario" => messages::VALIDATION_USERNAME_REQUIRED.to_string(),
            other => messages::validation_field_required(other),
        };
        result.add_error(message);
    }

    result
}

/// Edad en años cumplidos en la fecha `today`
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Validar una fecha de nacimiento respecto a hoy
pub fn validate_birth_date(birth_date: Option<NaiveDate>) -> ValidationResult {
    validate_birth_date_on(birth_date, Local::now().date_naive())
}

/// Validar una fecha de nacimiento respecto a una fecha de referencia
pub fn validate_birth_date_on(birth_date: Option<NaiveDate>, today: NaiveDate) -> ValidationResult {
    let mut result = ValidationResult::new();

    let Some(birth_date) = birth_date else {
        result.add_error(messages::VALIDATION_BIRTH_DATE_REQUIRED);
        return result;
    };

    if birth_date > today {
        result.add_error(messages::VALIDATION_BIRTH_DATE_FUTURE);
    }

    let age = age_on(birth_date, today);
    if age < 0 {
        result.add_error(messages::VALIDATION_BIRTH_DATE_INVALID);
    }
    if age > MAX_AGE_YEARS {
        result.add_error(messages::VALIDATION_BIRTH_DATE_UNREALISTIC);
    }

    result
}

/// Validar y convertir string (YYYY-MM-DD) a fecha. Vacío significa "sin fecha".
pub fn parse_date(value: &str) -> Result<Option<NaiveDate>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| messages::VALIDATION_BIRTH_DATE_INVALID.to_string())
}

/// Validación completa del formulario de fallero
pub fn validate_fallero_form(
    nombre: &str,
    apellidos: &str,
    dni: &str,
    fecha_nacimiento: Option<NaiveDate>,
) -> ValidationResult {
    let mut result = ValidationResult::new();
    result.merge(validate_name(nombre, "nombre"));
    result.merge(validate_name(apellidos, "apellidos"));
    result.merge(validate_dni(dni));
    result.merge(validate_birth_date(fecha_nacimiento));
    result
}

/// Validación completa del formulario de usuario
pub fn validate_usuario_form(nombre: &str, email: &str, password: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    result.merge(validate_name(nombre, "usuario"));
    result.merge(validate_email(email));
    result.merge(validate_password(password, DEFAULT_PASSWORD_MIN_LENGTH));
    result
}
