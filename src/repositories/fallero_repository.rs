use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::dto::EstadoFiltro;
use crate::models::fallero::Fallero;
use crate::utils::errors::{integrity_error, map_insert_error, AppError};
use crate::utils::validation::normalize_dni;

const FALLERO_COLUMNS: &str = "id, nombre, apellidos, dni, fecha_nacimiento, fecha_alta, activo";

pub struct FalleroRepository {
    pool: PgPool,
}

impl FalleroRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar un fallero activo. El DNI se guarda normalizado.
    pub async fn create(
        &self,
        nombre: &str,
        apellidos: &str,
        dni: &str,
        fecha_nacimiento: NaiveDate,
        fecha_alta: NaiveDate,
    ) -> Result<Fallero, AppError> {
        let dni = normalize_dni(dni);
        let mut tx = self.pool.begin().await?;

        let fallero = sqlx::query_as::<_, Fallero>(&format!(
            r#"
            INSERT INTO "Fallero" (nombre, apellidos, dni, fecha_nacimiento, fecha_alta, activo)
            VALUES ($1, $2, $3, $4, $5, TRUE)
            RETURNING {}
            "#,
            FALLERO_COLUMNS
        ))
        .bind(nombre.trim())
        .bind(apellidos.trim())
        .bind(&dni)
        .bind(fecha_nacimiento)
        .bind(fecha_alta)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_insert_error(e, || integrity_error("fallero", "DNI", &dni).user_message()))?;

        tx.commit().await?;

        Ok(fallero)
    }

    pub async fn find_by_dni(&self, dni: &str) -> Result<Option<Fallero>, AppError> {
        let result = sqlx::query_as::<_, Fallero>(&format!(
            r#"SELECT {} FROM "Fallero" WHERE dni = $1"#,
            FALLERO_COLUMNS
        ))
        .bind(normalize_dni(dni))
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    /// Listado filtrado. Los textos se buscan como subcadena sin distinguir
    /// mayúsculas; los filtros se combinan con AND.
    pub async fn find_filtered(
        &self,
        nombre: Option<&str>,
        apellidos: Option<&str>,
        estado: EstadoFiltro,
    ) -> Result<Vec<Fallero>, AppError> {
        let mut query = QueryBuilder::<Postgres>::new(format!(
            r#"SELECT {} FROM "Fallero" WHERE TRUE"#,
            FALLERO_COLUMNS
        ));

        if let Some(nombre) = nombre.filter(|n| !n.is_empty()) {
            query
                .push(" AND strpos(lower(nombre), lower(")
                .push_bind(nombre.to_string())
                .push(")) > 0");
        }
        if let Some(apellidos) = apellidos.filter(|a| !a.is_empty()) {
            query
                .push(" AND strpos(lower(apellidos), lower(")
                .push_bind(apellidos.to_string())
                .push(")) > 0");
        }
        if let Some(activo) = estado.activo() {
            query.push(" AND activo = ").push_bind(activo);
        }
        query.push(" ORDER BY id");

        let result = query
            .build_query_as::<Fallero>()
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }
}
