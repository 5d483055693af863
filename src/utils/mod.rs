//! Utilidades del sistema
//! 
//! Manejo de errores y validadores de formularios.

pub mod errors;
pub mod validation;
