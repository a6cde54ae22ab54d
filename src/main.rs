use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use fleetflow::config::EnvironmentConfig;
use fleetflow::database::create_pool;
use fleetflow::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 FleetFlow - Fleet Management API");
    info!("===================================");

    // Inicializar base de datos
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let config = EnvironmentConfig::default();
    let addr: SocketAddr = config.server_url().parse()?;

    let app = create_app(AppState::new(pool, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔑 Endpoints - Auth:");
    info!("   POST /api/auth/register - Registrar usuario");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("🚗 Endpoints - Vehicle:");
    info!("   POST /api/vehicle - Crear vehículo");
    info!("   GET  /api/vehicle - Listar vehículos (filtros: status, type)");
    info!("   GET  /api/vehicle/:id - Obtener vehículo");
    info!("   PUT  /api/vehicle/:id - Actualizar vehículo");
    info!("   POST /api/vehicle/:id/toggle - Alternar Out of Service");
    info!("   GET  /api/vehicle/:id/capacity - Capacidad máxima");
    info!("   DELETE /api/vehicle/:id - Eliminar vehículo");
    info!("🧑 Endpoints - Driver:");
    info!("   POST /api/driver - Crear driver");
    info!("   GET  /api/driver - Listar drivers");
    info!("   PUT  /api/driver/:id - Actualizar driver");
    info!("   POST /api/driver/:id/status - Cambiar estado");
    info!("   DELETE /api/driver/:id - Eliminar driver");
    info!("🚚 Endpoints - Trip:");
    info!("   POST /api/trip - Crear trip (Draft)");
    info!("   GET  /api/trip - Listar trips");
    info!("   PUT  /api/trip/:id - Editar trip en Draft");
    info!("   POST /api/trip/:id/status - Transición de estado");
    info!("🔧 Endpoints - Maintenance:");
    info!("   POST /api/maintenance - Abrir mantenimiento");
    info!("   GET  /api/maintenance - Listar logs");
    info!("   POST /api/maintenance/:id/complete - Cerrar mantenimiento");
    info!("⛽ Endpoints - Expenses:");
    info!("   POST /api/expense - Registrar fuel log");
    info!("   GET  /api/expense - Listar fuel logs");
    info!("📊 Endpoints - Analytics:");
    info!("   GET  /api/analytics - Reporte de flota");
    info!("   GET  /api/dashboard - Resumen del dashboard");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
