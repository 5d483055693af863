use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;

use crate::dto::auth_dto::{AuthStatus, LoginForm};
use crate::messages;
use crate::services::AuthManager;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::views::{self, LoginPage, PageContext, PATH_FALLEROS};

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page).post(login))
        .route("/logout", post(logout))
}

fn login_view(
    state: &AppState,
    email: String,
    error: Option<&str>,
    notice: Option<&str>,
) -> LoginPage {
    LoginPage {
        ctx: PageContext::anonymous(&state.settings.app),
        email,
        error: error.map(str::to_string),
        notice: notice.map(str::to_string),
    }
}

async fn login_page(State(state): State<AppState>, jar: CookieJar) -> Result<Response, AppError> {
    let manager = AuthManager::new(&state.db, &state.settings.auth).await?;
    if !manager.has_active_users() {
        let page = login_view(&state, String::new(), None, Some(messages::AUTH_NO_ACTIVE_USERS));
        return Ok(views::render(&page)?.into_response());
    }

    let (jar, result) = manager.login(jar, None)?;
    if result.is_success() {
        return Ok((jar, Redirect::to(PATH_FALLEROS)).into_response());
    }

    let page = login_view(&state, String::new(), None, None);
    Ok((jar, views::render(&page)?).into_response())
}

async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let manager = AuthManager::new(&state.db, &state.settings.auth).await?;
    if !manager.has_active_users() {
        let page = login_view(&state, String::new(), None, Some(messages::AUTH_NO_ACTIVE_USERS));
        return Ok(views::render(&page)?.into_response());
    }

    let (jar, result) = manager.login(jar, Some(&form))?;
    match result.status {
        AuthStatus::Success => Ok((jar, Redirect::to(PATH_FALLEROS)).into_response()),
        AuthStatus::Failed | AuthStatus::Unknown => {
            let page = login_view(&state, form.email, Some(messages::AUTH_LOGIN_FAILED), None);
            Ok((jar, views::render(&page)?).into_response())
        }
    }
}

async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    (state.session.clear(jar), Redirect::to("/login"))
}
