use tracing::{info, warn};

use super::FormOutcome;
use crate::database::DatabaseManager;
use crate::dto::fallero_dto::{FiltroFalleros, NuevoFalleroForm};
use crate::messages;
use crate::models::Fallero;
use crate::utils::errors::AppError;

pub struct FalleroController {
    db: DatabaseManager,
}

impl FalleroController {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }

    pub async fn listar(&self, filtro: &FiltroFalleros) -> Result<Vec<Fallero>, AppError> {
        self.db
            .get_filtered_falleros(filtro.nombre(), filtro.apellidos(), filtro.estado)
            .await
    }

    /// Alta de fallero: solo se inserta si el formulario es válido
    pub async fn crear(&self, form: &NuevoFalleroForm) -> FormOutcome {
        let (fecha_nacimiento, validation) = form.validate_form();
        let fecha_nacimiento = match fecha_nacimiento {
            Some(fecha) if validation.is_valid => fecha,
            _ => {
                info!("📝 Alta de fallero rechazada: {} errores", validation.errors.len());
                return FormOutcome::invalid(validation.into_errors());
            }
        };

        match self
            .db
            .insert_fallero(&form.nombre, &form.apellidos, &form.dni, fecha_nacimiento)
            .await
        {
            Ok(fallero) => {
                info!("📝 Alta de fallero: {}", fallero.full_name());
                FormOutcome::created(messages::ADD_FALLERO_SUCCESS)
            }
            Err(e) => {
                warn!("⚠️ Error insertando fallero: {}", e);
                FormOutcome::invalid(vec![messages::db_error_insert_fallero(&e.user_message())])
            }
        }
    }
}
