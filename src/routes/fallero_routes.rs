use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Extension, Form, Router,
};

use crate::controllers::FalleroController;
use crate::dto::fallero_dto::{FiltroFalleros, NuevoFalleroForm};
use crate::messages;
use crate::services::SessionClaims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::views::{
    self, estado_options, FallerosPage, NuevoFalleroPage, PageContext, TableView, PATH_FALLEROS,
    PATH_NUEVO_FALLERO,
};

pub fn create_fallero_router() -> Router<AppState> {
    Router::new()
        .route(PATH_FALLEROS, get(list_falleros))
        .route(PATH_NUEVO_FALLERO, get(new_fallero_form).post(create_fallero))
}

async fn list_falleros(
    State(state): State<AppState>,
    Extension(session): Extension<SessionClaims>,
    Query(filtro): Query<FiltroFalleros>,
) -> Result<Html<String>, AppError> {
    let controller = FalleroController::new(state.db.clone());
    let falleros = controller.listar(&filtro).await?;

    let page = FallerosPage {
        ctx: PageContext::for_user(&state.settings.app, &session.name, PATH_FALLEROS),
        nombre: filtro.nombre.clone().unwrap_or_default(),
        apellidos: filtro.apellidos.clone().unwrap_or_default(),
        estados: estado_options(filtro.estado),
        table: TableView::from_records(&falleros, messages::falleros_total_shown),
    };
    views::render(&page)
}

async fn new_fallero_form(
    State(state): State<AppState>,
    Extension(session): Extension<SessionClaims>,
) -> Result<Html<String>, AppError> {
    let page = NuevoFalleroPage {
        ctx: PageContext::for_user(&state.settings.app, &session.name, PATH_NUEVO_FALLERO),
        form: NuevoFalleroForm::default(),
        errors: Vec::new(),
        success: None,
    };
    views::render(&page)
}

async fn create_fallero(
    State(state): State<AppState>,
    Extension(session): Extension<SessionClaims>,
    Form(form): Form<NuevoFalleroForm>,
) -> Result<Html<String>, AppError> {
    let controller = FalleroController::new(state.db.clone());
    let outcome = controller.crear(&form).await;

    // Tras un alta correcta el formulario se vacía
    let form = if outcome.is_success() {
        NuevoFalleroForm::default()
    } else {
        form
    };

    let page = NuevoFalleroPage {
        ctx: PageContext::for_user(&state.settings.app, &session.name, PATH_NUEVO_FALLERO),
        form,
        errors: outcome.errors,
        success: outcome.success,
    };
    views::render(&page)
}
