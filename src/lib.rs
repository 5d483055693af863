//! Secretaría de la falla
//!
//! Gestión de falleros y de los usuarios de la aplicación: alta y listado
//! filtrado sobre PostgreSQL, login con cookie de sesión y vistas HTML.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod messages;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;
