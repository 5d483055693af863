//! Modelos del sistema
//! 
//! Este módulo contiene los modelos de datos que mapean exactamente
//! a las tablas `Fallero` y `Usuario`.

pub mod fallero;
pub mod usuario;

pub use fallero::Fallero;
pub use usuario::Usuario;

/// Representación tabular de un registro para los listados.
///
/// Cada entidad declara explícitamente sus columnas visibles; nunca se
/// vuelcan campos internos (como el hash de la contraseña).
pub trait TableRow {
    /// Cabeceras de las columnas, en orden
    fn columns() -> &'static [&'static str];

    /// Valores de la fila, en el mismo orden que `columns()`
    fn row(&self) -> Vec<String>;
}

/// Texto para un flag de estado en los listados
pub fn format_activo(activo: bool) -> String {
    if activo { "Sí" } else { "No" }.to_string()
}
