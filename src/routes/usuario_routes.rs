use axum::{
    extract::{Query, State},
    response::Html,
    routing::{get, post},
    Extension, Form, Router,
};

use crate::controllers::{FormOutcome, UsuarioController};
use crate::dto::usuario_dto::{FiltroUsuarios, NuevoUsuarioForm};
use crate::messages;
use crate::services::SessionClaims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::views::{self, estado_options, PageContext, TableView, UsuariosPage, PATH_USUARIOS};

pub fn create_usuario_router() -> Router<AppState> {
    Router::new()
        .route(PATH_USUARIOS, get(list_usuarios))
        .route("/usuarios/nuevo", post(create_usuario))
}

async fn render_usuarios(
    state: &AppState,
    session: &SessionClaims,
    filtro: FiltroUsuarios,
    form: NuevoUsuarioForm,
    form_activo: bool,
    outcome: FormOutcome,
) -> Result<Html<String>, AppError> {
    let controller = UsuarioController::new(state.db.clone());
    let usuarios = controller.listar(&filtro).await?;

    let page = UsuariosPage {
        ctx: PageContext::for_user(&state.settings.app, &session.name, PATH_USUARIOS),
        nombre: filtro.nombre.clone().unwrap_or_default(),
        email: filtro.email.clone().unwrap_or_default(),
        estados: estado_options(filtro.estado),
        table: TableView::from_records(&usuarios, messages::users_total_shown),
        form,
        form_activo,
        errors: outcome.errors,
        success: outcome.success,
    };
    views::render(&page)
}

async fn list_usuarios(
    State(state): State<AppState>,
    Extension(session): Extension<SessionClaims>,
    Query(filtro): Query<FiltroUsuarios>,
) -> Result<Html<String>, AppError> {
    render_usuarios(
        &state,
        &session,
        filtro,
        NuevoUsuarioForm::default(),
        true,
        FormOutcome::default(),
    )
    .await
}

async fn create_usuario(
    State(state): State<AppState>,
    Extension(session): Extension<SessionClaims>,
    Form(form): Form<NuevoUsuarioForm>,
) -> Result<Html<String>, AppError> {
    let controller = UsuarioController::new(state.db.clone());
    let outcome = controller.crear(&form).await;

    // La contraseña nunca se devuelve en el formulario
    let (form, form_activo) = if outcome.is_success() {
        (NuevoUsuarioForm::default(), true)
    } else {
        let activo = form.activo();
        (
            NuevoUsuarioForm {
                password: String::new(),
                ..form
            },
            activo,
        )
    };

    render_usuarios(&state, &session, FiltroUsuarios::default(), form, form_activo, outcome).await
}
