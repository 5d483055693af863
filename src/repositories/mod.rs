//! Repositorios (DAOs)
//! 
//! Acceso a las tablas `Fallero` y `Usuario`. Cada método es una unidad de
//! trabajo: toma una conexión del pool y la devuelve al terminar.

pub mod fallero_repository;
pub mod usuario_repository;

pub use fallero_repository::FalleroRepository;
pub use usuario_repository::UsuarioRepository;
