//! Mensajes de la interfaz
//!
//! Todos los textos visibles por el usuario están aquí, en español.

// Autenticación
pub const AUTH_LOGIN_REQUIRED: &str = "Por favor, inicia sesión.";
pub const AUTH_LOGIN_FAILED: &str = "Login fallido. Verifica tus credenciales.";
pub const AUTH_NO_ACTIVE_USERS: &str =
    "No hay usuarios activos en la base de datos. Contacta con el administrador.";
pub const AUTH_LOGOUT: &str = "Cerrar Sesión";
pub const AUTH_WELCOME: &str = "Bienvenido";
pub const AUTH_FORM_USERNAME: &str = "Usuario";
pub const AUTH_FORM_PASSWORD: &str = "Contraseña";
pub const AUTH_FORM_LOGIN: &str = "Entrar";

// Base de datos
pub const DB_NOT_EXISTS: &str = "La base de datos no existe. Define INIT_DB=True para crearla.";

pub fn db_error_insert_fallero(error: &str) -> String {
    format!("Error al insertar el fallero: {}", error)
}

pub fn db_error_insert_user(error: &str) -> String {
    format!("Error al insertar el usuario: {}", error)
}

// Navegación
pub const MENU_NAVIGATION: &str = "Menú de Navegación";
pub const MENU_VIEW_FALLEROS: &str = "Ver Falleros";
pub const MENU_ADD_FALLERO: &str = "Añadir Fallero";
pub const MENU_VIEW_USERS: &str = "Ver Usuarios";
pub const FILTER_APPLY: &str = "Filtrar";

// Listado de falleros
pub const FALLEROS_TITLE: &str = "Listado de Falleros";
pub const FALLEROS_FILTER_TITLE: &str = "🔎 Filtrar Falleros";
pub const FALLEROS_FILTER_NAME: &str = "Filtrar por Nombre:";
pub const FALLEROS_FILTER_SURNAME: &str = "Filtrar por Apellidos:";
pub const FALLEROS_FILTER_STATUS: &str = "Filtrar por Estado:";
pub const FALLEROS_NOT_FOUND: &str = "No se encontraron falleros con los filtros seleccionados.";
pub const STATUS_ALL: &str = "Todos";
pub const STATUS_ACTIVE: &str = "Activos";
pub const STATUS_INACTIVE: &str = "Inactivos";

pub fn falleros_total_shown(count: usize) -> String {
    format!("Total de falleros mostrados: {}", count)
}

// Alta de fallero
pub const ADD_FALLERO_TITLE: &str = "Añadir Fallero/a";
pub const ADD_FALLERO_NAME: &str = "Nombre*";
pub const ADD_FALLERO_SURNAME: &str = "Apellidos*";
pub const ADD_FALLERO_DNI: &str = "DNI*";
pub const ADD_FALLERO_BIRTH_DATE: &str = "Fecha de nacimiento*";
pub const ADD_FALLERO_SUBMIT: &str = "Añadir Fallero";
pub const ADD_FALLERO_DNI_HELP: &str = "Formato: 8 números y una letra (ej: 12345678A)";
pub const ADD_FALLERO_SUCCESS: &str = "Fallero añadido correctamente.";

// Usuarios
pub const USERS_TITLE: &str = "Listado de Usuarios";
pub const USERS_FILTER_TITLE: &str = "🔎 Filtrar Usuarios";
pub const USERS_FILTER_USERNAME: &str = "Filtrar por Nombre de usuario:";
pub const USERS_FILTER_EMAIL: &str = "Filtrar por Email:";
pub const USERS_FILTER_STATUS: &str = "Filtrar por Estado:";
pub const USERS_NOT_FOUND: &str = "No se encontraron usuarios con los filtros seleccionados.";
pub const ADD_USER_TITLE: &str = "Añadir nuevo usuario";
pub const ADD_USER_USERNAME: &str = "Nombre de usuario*";
pub const ADD_USER_EMAIL: &str = "Email*";
pub const ADD_USER_PASSWORD: &str = "Contraseña*";
pub const ADD_USER_ACTIVE: &str = "Activo";
pub const ADD_USER_SUBMIT: &str = "Crear usuario";
pub const ADD_USER_SUCCESS: &str = "Usuario añadido correctamente.";

pub fn users_total_shown(count: usize) -> String {
    format!("Total de usuarios mostrados: {}", count)
}

// Validación
pub const VALIDATION_NAME_REQUIRED: &str = "El nombre es obligatorio.";
pub const VALIDATION_SURNAME_REQUIRED: &str = "Los apellidos son obligatorios.";
pub const VALIDATION_USERNAME_REQUIRED: &str = "El nombre de usuario es obligatorio.";
pub const VALIDATION_DNI_INVALID: &str = "El DNI debe tener 8 números y una letra (ej: 12345678A).";
pub const VALIDATION_DNI_CHECK_LETTER: &str = "El DNI no tiene la letra de control correcta.";
pub const VALIDATION_EMAIL_INVALID: &str = "El email debe tener un formato válido.";
pub const VALIDATION_BIRTH_DATE_REQUIRED: &str = "La fecha de nacimiento es obligatoria.";
pub const VALIDATION_BIRTH_DATE_FUTURE: &str = "La fecha de nacimiento no puede ser futura.";
pub const VALIDATION_BIRTH_DATE_INVALID: &str = "La fecha de nacimiento no es válida.";
pub const VALIDATION_BIRTH_DATE_UNREALISTIC: &str = "La fecha de nacimiento no es realista.";

pub fn validation_password_min_length(min_length: usize) -> String {
    format!("La contraseña debe tener al menos {} caracteres.", min_length)
}

pub fn validation_field_required(field: &str) -> String {
    format!("El campo {} es obligatorio.", field)
}
