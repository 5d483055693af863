//! Configuración del proyecto
//! 
//! Este módulo contiene la configuración de base de datos, autenticación
//! y aplicación, leída una sola vez del entorno al arrancar.

pub mod database;
pub mod environment;

pub use database::DatabaseConfig;
pub use environment::*;
