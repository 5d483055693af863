//! Vistas HTML
//!
//! Plantillas `askama` de las páginas de la aplicación. Cada página lleva un
//! `PageContext` con los datos comunes de la cabecera y el menú.

use askama::Template;
use axum::response::Html;

use crate::config::AppConfig;
use crate::dto::fallero_dto::NuevoFalleroForm;
use crate::dto::usuario_dto::NuevoUsuarioForm;
use crate::dto::EstadoFiltro;
use crate::models::TableRow;
use crate::utils::errors::AppResult;

pub const PATH_FALLEROS: &str = "/falleros";
pub const PATH_NUEVO_FALLERO: &str = "/falleros/nuevo";
pub const PATH_USUARIOS: &str = "/usuarios";

/// Datos comunes a todas las páginas
#[derive(Debug, Clone)]
pub struct PageContext {
    pub app_name: String,
    pub app_icon: String,
    pub layout: &'static str,
    /// Nombre del usuario con sesión; `None` en la página de login
    pub user_name: Option<String>,
    /// Ruta de la entrada de menú activa
    pub current: &'static str,
}

impl PageContext {
    pub fn anonymous(app: &AppConfig) -> Self {
        Self {
            app_name: app.app_name.clone(),
            app_icon: app.app_icon.clone(),
            layout: app.layout.as_str(),
            user_name: None,
            current: "",
        }
    }

    pub fn for_user(app: &AppConfig, user_name: &str, current: &'static str) -> Self {
        Self {
            user_name: Some(user_name.to_string()),
            current,
            ..Self::anonymous(app)
        }
    }
}

/// Opción del selector de estado
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstadoOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

pub fn estado_options(selected: EstadoFiltro) -> Vec<EstadoOption> {
    EstadoFiltro::ALL
        .iter()
        .map(|estado| EstadoOption {
            value: estado.as_str(),
            label: estado.label(),
            selected: *estado == selected,
        })
        .collect()
}

/// Tabla de un listado, ya convertida a texto
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub total: String,
}

impl TableView {
    /// `None` si no hay registros, para mostrar el aviso de "sin resultados"
    pub fn from_records<T, F>(records: &[T], total: F) -> Option<Self>
    where
        T: TableRow,
        F: FnOnce(usize) -> String,
    {
        if records.is_empty() {
            return None;
        }

        Some(Self {
            columns: T::columns().to_vec(),
            rows: records.iter().map(TableRow::row).collect(),
            total: total(records.len()),
        })
    }
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub ctx: PageContext,
    pub email: String,
    pub error: Option<String>,
    pub notice: Option<String>,
}

#[derive(Template)]
#[template(path = "falleros.html")]
pub struct FallerosPage {
    pub ctx: PageContext,
    pub nombre: String,
    pub apellidos: String,
    pub estados: Vec<EstadoOption>,
    pub table: Option<TableView>,
}

#[derive(Template)]
#[template(path = "fallero_form.html")]
pub struct NuevoFalleroPage {
    pub ctx: PageContext,
    pub form: NuevoFalleroForm,
    pub errors: Vec<String>,
    pub success: Option<String>,
}

#[derive(Template)]
#[template(path = "usuarios.html")]
pub struct UsuariosPage {
    pub ctx: PageContext,
    pub nombre: String,
    pub email: String,
    pub estados: Vec<EstadoOption>,
    pub table: Option<TableView>,
    pub form: NuevoUsuarioForm,
    /// Estado del checkbox "Activo" del formulario de alta
    pub form_activo: bool,
    pub errors: Vec<String>,
    pub success: Option<String>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub title: String,
    pub message: String,
}

impl ErrorPage {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn render_html(&self) -> Result<String, askama::Error> {
        self.render()
    }
}

/// Renderizar una plantilla como respuesta HTML
pub fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    Ok(Html(template.render()?))
}
