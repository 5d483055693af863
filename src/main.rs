use anyhow::Result;
use axum::Router;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn, Level};

use falla_secretaria::config::Settings;
use falla_secretaria::database::DatabaseManager;
use falla_secretaria::messages;
use falla_secretaria::routes;
use falla_secretaria::state::AppState;
use falla_secretaria::utils::errors::AppResult;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let settings = Settings::from_env()?;

    // Configurar logging
    let level = if settings.app.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("{} {}", settings.app.app_icon, settings.app.app_name);
    info!("================================================");

    if settings.auth.uses_default_secret() {
        warn!("⚠️ AUTH_SECRET_KEY no está definido: las cookies de sesión se firman con el secreto por defecto");
    }

    let db = DatabaseManager::new(&settings.database)?;
    let addr = settings.server.server_url();

    let app = match prepare_database(&db, settings.database.init_db).await {
        Ok(()) => {
            info!("✅ Base de datos lista");
            routes::create_router(AppState::new(db, settings))
        }
        Err(e) => {
            error!("❌ Base de datos no disponible: {}", e);
            warn!("⚠️ {}", messages::DB_NOT_EXISTS);
            routes::create_unavailable_router()
        }
    };

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Rutas disponibles:");
    info!("   GET  /login, POST /login, POST /logout");
    info!("   GET  /falleros, GET|POST /falleros/nuevo");
    info!("   GET  /usuarios, POST /usuarios/nuevo");

    serve(app, &addr).await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Crear las tablas si `INIT_DB` está activo; si no, comprobar que existen
async fn prepare_database(db: &DatabaseManager, init_db: bool) -> AppResult<()> {
    if init_db {
        db.init_schema().await
    } else {
        db.check_schema().await
    }
}

async fn serve(app: Router, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo escuchar SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
