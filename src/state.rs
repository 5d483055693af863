//! Estado compartido de la aplicación
//!
//! Se construye una vez al arrancar y se pasa a través del router de Axum.

use std::sync::Arc;

use crate::config::Settings;
use crate::database::DatabaseManager;
use crate::services::SessionCookie;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseManager,
    pub settings: Arc<Settings>,
    pub session: SessionCookie,
}

impl AppState {
    pub fn new(db: DatabaseManager, settings: Settings) -> Self {
        let session = SessionCookie::new(&settings.auth);
        Self {
            db,
            settings: Arc::new(settings),
            session,
        }
    }
}
