//! DTOs de formularios y filtros
//! 
//! Datos tal y como llegan de los formularios HTML, antes de validar.

pub mod auth_dto;
pub mod fallero_dto;
pub mod filter_dto;
pub mod usuario_dto;

pub use filter_dto::EstadoFiltro;
