use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::messages;

/// Filtro por el flag `activo`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EstadoFiltro {
    #[default]
    Todos,
    Activos,
    Inactivos,
}

impl EstadoFiltro {
    pub const ALL: [EstadoFiltro; 3] = [
        EstadoFiltro::Todos,
        EstadoFiltro::Activos,
        EstadoFiltro::Inactivos,
    ];

    /// Valor usado en la query string
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoFiltro::Todos => "all",
            EstadoFiltro::Activos => "active",
            EstadoFiltro::Inactivos => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EstadoFiltro::Todos => messages::STATUS_ALL,
            EstadoFiltro::Activos => messages::STATUS_ACTIVE,
            EstadoFiltro::Inactivos => messages::STATUS_INACTIVE,
        }
    }

    /// Valor de `activo` exigido, o `None` si no se filtra
    pub fn activo(&self) -> Option<bool> {
        match self {
            EstadoFiltro::Todos => None,
            EstadoFiltro::Activos => Some(true),
            EstadoFiltro::Inactivos => Some(false),
        }
    }
}

impl FromStr for EstadoFiltro {
    type Err = String;

    /// Acepta los valores de la query string y las etiquetas en español
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" | "todos" => Ok(EstadoFiltro::Todos),
            "active" | "activos" => Ok(EstadoFiltro::Activos),
            "inactive" | "inactivos" => Ok(EstadoFiltro::Inactivos),
            other => Err(format!("Estado de filtro desconocido: '{}'", other)),
        }
    }
}

/// En la query string un valor desconocido equivale a no filtrar
impl<'de> Deserialize<'de> for EstadoFiltro {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_else(|e| {
            debug!("{}", e);
            EstadoFiltro::Todos
        }))
    }
}

/// Texto de filtro: `None` si viene ausente o en blanco
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_estado() {
        assert_eq!("all".parse::<EstadoFiltro>(), Ok(EstadoFiltro::Todos));
        assert_eq!("".parse::<EstadoFiltro>(), Ok(EstadoFiltro::Todos));
        assert_eq!("Activos".parse::<EstadoFiltro>(), Ok(EstadoFiltro::Activos));
        assert_eq!("inactive".parse::<EstadoFiltro>(), Ok(EstadoFiltro::Inactivos));
        assert!("borrados".parse::<EstadoFiltro>().is_err());
    }

    #[test]
    fn test_deserialize_unknown_estado_means_all() {
        use serde::de::{value::Error, IntoDeserializer};

        let parse = |raw: &str| -> Result<EstadoFiltro, Error> {
            EstadoFiltro::deserialize(raw.into_deserializer())
        };
        assert_eq!(parse("inactivos").unwrap(), EstadoFiltro::Inactivos);
        assert_eq!(parse("borrados").unwrap(), EstadoFiltro::Todos);
    }

    #[test]
    fn test_activo_flag() {
        assert_eq!(EstadoFiltro::Todos.activo(), None);
        assert_eq!(EstadoFiltro::Activos.activo(), Some(true));
        assert_eq!(EstadoFiltro::Inactivos.activo(), Some(false));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some("  ".to_string())), None);
        assert_eq!(non_empty(&Some(" Juan ".to_string())), Some("Juan"));
    }
}
