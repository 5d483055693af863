//! Gestor de base de datos
//!
//! `DatabaseManager` es el único dueño del pool de conexiones y expone las
//! operaciones de acceso a datos de la aplicación. Cada operación toma una
//! conexión del pool solo durante su ejecución.

use chrono::{Local, NaiveDate};
use sqlx::PgPool;
use tracing::{debug, info, warn};

use crate::config::database::{mask_database_url, DatabaseConfig};
use crate::dto::EstadoFiltro;
use crate::models::{Fallero, Usuario};
use crate::repositories::{FalleroRepository, UsuarioRepository};
use crate::utils::errors::{AppError, AppResult};

const CREATE_FALLERO_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS "Fallero" (
    id SERIAL PRIMARY KEY,
    nombre VARCHAR(100) NOT NULL,
    apellidos VARCHAR(255) NOT NULL,
    dni VARCHAR(20) NOT NULL UNIQUE,
    fecha_nacimiento DATE NOT NULL,
    fecha_alta DATE NOT NULL,
    activo BOOLEAN NOT NULL DEFAULT TRUE
)
"#;

const CREATE_USUARIO_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS "Usuario" (
    id SERIAL PRIMARY KEY,
    nombre VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL UNIQUE,
    hashed_password VARCHAR(255) NOT NULL,
    activo BOOLEAN NOT NULL DEFAULT TRUE
)
"#;

/// Coste de bcrypt usado al crear usuarios
pub const PASSWORD_HASH_COST: u32 = bcrypt::DEFAULT_COST;

#[derive(Clone)]
pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    /// Crear el gestor a partir de la configuración. La conexión se abre
    /// de forma perezosa en la primera operación.
    pub fn new(config: &DatabaseConfig) -> AppResult<Self> {
        info!("🗄️ Base de datos: {}", mask_database_url(&config.url()));
        Ok(Self::from_pool(config.create_pool()?))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn falleros(&self) -> FalleroRepository {
        FalleroRepository::new(self.pool.clone())
    }

    fn usuarios(&self) -> UsuarioRepository {
        UsuarioRepository::new(self.pool.clone())
    }

    /// Crear las tablas si no existen
    pub async fn init_schema(&self) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(CREATE_FALLERO_TABLE).execute(&mut *tx).await?;
        sqlx::query(CREATE_USUARIO_TABLE).execute(&mut *tx).await?;
        tx.commit().await?;

        info!("✅ Tablas \"Fallero\" y \"Usuario\" preparadas");
        Ok(())
    }

    /// Comprobar que la base de datos responde y que existen las dos tablas
    pub async fn check_schema(&self) -> AppResult<()> {
        let (exists,): (bool,) = sqlx::query_as(
            r#"SELECT to_regclass('"Fallero"') IS NOT NULL AND to_regclass('"Usuario"') IS NOT NULL"#,
        )
        .fetch_one(&self.pool)
        .await?;

        if !exists {
            warn!("⚠️ Las tablas de la aplicación no existen");
            return Err(AppError::Config("Las tablas de la aplicación no existen".to_string()));
        }

        debug!("Esquema de base de datos verificado");
        Ok(())
    }

    /// Todos los usuarios, en orden de inserción
    pub async fn get_all_users(&self) -> AppResult<Vec<Usuario>> {
        self.usuarios().list_all().await
    }

    /// Usuarios con `activo = true`
    pub async fn get_active_users(&self) -> AppResult<Vec<Usuario>> {
        self.usuarios().list_active().await
    }

    pub async fn get_filtered_usuarios(
        &self,
        nombre: Option<&str>,
        email: Option<&str>,
        estado: EstadoFiltro,
    ) -> AppResult<Vec<Usuario>> {
        self.usuarios().find_filtered(nombre, email, estado).await
    }

    pub async fn get_filtered_falleros(
        &self,
        nombre: Option<&str>,
        apellidos: Option<&str>,
        estado: EstadoFiltro,
    ) -> AppResult<Vec<Fallero>> {
        self.falleros().find_filtered(nombre, apellidos, estado).await
    }

    /// Dar de alta un fallero con fecha de alta de hoy
    pub async fn insert_fallero(
        &self,
        nombre: &str,
        apellidos: &str,
        dni: &str,
        fecha_nacimiento: NaiveDate,
    ) -> AppResult<Fallero> {
        let fecha_alta = Local::now().date_naive();
        let fallero = self
            .falleros()
            .create(nombre, apellidos, dni, fecha_nacimiento, fecha_alta)
            .await?;

        info!("✅ Fallero creado: {:?}", fallero);
        Ok(fallero)
    }

    pub async fn get_fallero_por_dni(&self, dni: &str) -> AppResult<Option<Fallero>> {
        self.falleros().find_by_dni(dni).await
    }

    pub async fn get_usuario_por_email(&self, email: &str) -> AppResult<Option<Usuario>> {
        self.usuarios().find_by_email(email).await
    }

    /// Crear un usuario activo
    pub async fn crear_usuario(
        &self,
        nombre: &str,
        email: &str,
        plain_password: &str,
    ) -> AppResult<Usuario> {
        self.crear_usuario_con_estado(nombre, email, plain_password, true)
            .await
    }

    /// Crear un usuario. La contraseña se hashea con bcrypt antes de guardarla.
    pub async fn crear_usuario_con_estado(
        &self,
        nombre: &str,
        email: &str,
        plain_password: &str,
        activo: bool,
    ) -> AppResult<Usuario> {
        let hashed_password = bcrypt::hash(plain_password, PASSWORD_HASH_COST)?;
        let usuario = self
            .usuarios()
            .create(nombre, email, &hashed_password, activo)
            .await?;

        info!("✅ Usuario creado: {} (activo: {})", usuario.email, usuario.activo);
        Ok(usuario)
    }

    /// Comprobar una contraseña contra su hash bcrypt
    pub fn verify_password(plain_password: &str, hashed_password: &str) -> bool {
        match bcrypt::verify(plain_password, hashed_password) {
            Ok(valid) => valid,
            Err(e) => {
                warn!("⚠️ Hash de contraseña no válido: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_password() {
        let hash = bcrypt::hash("secret1", 4).unwrap();

        assert!(DatabaseManager::verify_password("secret1", &hash));
        assert!(!DatabaseManager::verify_password("wrong", &hash));
    }

    #[test]
    fn test_verify_password_with_malformed_hash() {
        assert!(!DatabaseManager::verify_password("secret1", "no-es-un-hash"));
    }

    #[test]
    fn test_schema_statements_are_idempotent() {
        assert!(CREATE_FALLERO_TABLE.contains("IF NOT EXISTS"));
        assert!(CREATE_USUARIO_TABLE.contains("IF NOT EXISTS"));
        assert!(CREATE_FALLERO_TABLE.contains("dni VARCHAR(20) NOT NULL UNIQUE"));
        assert!(CREATE_USUARIO_TABLE.contains("email VARCHAR(255) NOT NULL UNIQUE"));
    }
}
