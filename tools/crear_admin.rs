//! Crear el primer usuario administrador
//!
//! Lee `ADMIN_NOMBRE`, `ADMIN_EMAIL` y `ADMIN_PASSWORD` del entorno (o del
//! `.env`), valida los datos igual que el formulario de alta y crea el usuario
//! activo. Con `INIT_DB` activo también crea las tablas.

use std::env;

use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use tracing::{info, warn};

use falla_secretaria::config::Settings;
use falla_secretaria::database::DatabaseManager;
use falla_secretaria::utils::validation::validate_usuario_form;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt().init();

    let nombre = env::var("ADMIN_NOMBRE").unwrap_or_else(|_| "Administrador".to_string());
    let email = env::var("ADMIN_EMAIL").context("ADMIN_EMAIL no está definido")?;
    let password = env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD no está definido")?;

    let validation = validate_usuario_form(&nombre, &email, &password);
    if !validation.is_valid {
        for error in &validation.errors {
            warn!("⚠️ {}", error);
        }
        bail!("Datos del administrador no válidos");
    }

    let settings = Settings::from_env()?;
    let db = DatabaseManager::new(&settings.database)?;
    if settings.database.init_db {
        db.init_schema().await?;
    } else {
        db.check_schema().await?;
    }

    if let Some(existing) = db.get_usuario_por_email(&email).await? {
        info!("ℹ️ El usuario {} ya existe (id {})", existing.email, existing.id);
        return Ok(());
    }

    let usuario = db.crear_usuario(&nombre, &email, &password).await?;
    info!("✅ Administrador creado: {} <{}>", usuario.nombre, usuario.email);
    Ok(())
}
