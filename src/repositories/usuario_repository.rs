use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::dto::EstadoFiltro;
use crate::models::usuario::Usuario;
use crate::utils::errors::{integrity_error, map_insert_error, AppError};

const USUARIO_COLUMNS: &str = "id, nombre, email, hashed_password, activo";

/// Forma en la que se guardan los emails
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub struct UsuarioRepository {
    pool: PgPool,
}

impl UsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar un usuario con la contraseña ya hasheada
    pub async fn create(
        &self,
        nombre: &str,
        email: &str,
        hashed_password: &str,
        activo: bool,
    ) -> Result<Usuario, AppError> {
        let email = normalize_email(email);
        let mut tx = self.pool.begin().await?;

        let usuario = sqlx::query_as::<_, Usuario>(&format!(
            r#"
            INSERT INTO "Usuario" (nombre, email, hashed_password, activo)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            USUARIO_COLUMNS
        ))
        .bind(nombre.trim())
        .bind(&email)
        .bind(hashed_password)
        .bind(activo)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_insert_error(e, || integrity_error("usuario", "email", &email).user_message()))?;

        tx.commit().await?;

        Ok(usuario)
    }

    /// Buscar por email, normalizado igual que al insertar
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Usuario>, AppError> {
        let result = sqlx::query_as::<_, Usuario>(&format!(
            r#"SELECT {} FROM "Usuario" WHERE email = $1"#,
            USUARIO_COLUMNS
        ))
        .bind(normalize_email(email))
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    /// Todos los usuarios en orden de inserción
    pub async fn list_all(&self) -> Result<Vec<Usuario>, AppError> {
        self.find_filtered(None, None, EstadoFiltro::Todos).await
    }

    pub async fn list_active(&self) -> Result<Vec<Usuario>, AppError> {
        self.find_filtered(None, None, EstadoFiltro::Activos).await
    }

    /// Listado filtrado, con la misma política que el de falleros
    pub async fn find_filtered(
        &self,
        nombre: Option<&str>,
        email: Option<&str>,
        estado: EstadoFiltro,
    ) -> Result<Vec<Usuario>, AppError> {
        let mut query = QueryBuilder::<Postgres>::new(format!(
            r#"SELECT {} FROM "Usuario" WHERE TRUE"#,
            USUARIO_COLUMNS
        ));

        if let Some(nombre) = nombre.filter(|n| !n.is_empty()) {
            query
                .push(" AND strpos(lower(nombre), lower(")
                .push_bind(nombre.to_string())
                .push(")) > 0");
        }
        if let Some(email) = email.filter(|e| !e.is_empty()) {
            query
                .push(" AND strpos(lower(email), lower(")
                .push_bind(email.to_string())
                .push(")) > 0");
        }
        if let Some(activo) = estado.activo() {
            query.push(" AND activo = ").push_bind(activo);
        }
        query.push(" ORDER BY id");

        let result = query
            .build_query_as::<Usuario>()
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }
}
