/// IGDB Search Gateway
///
/// GET /games/search?q=<texto>:
/// - Obtém token OAuth2 (client credentials) na Twitch
/// - Busca jogos na IGDB com o token
/// - Devolve a lista como JSON
///
/// SEM cache de token, SEM retry

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use igdb_search_gateway::{build_router, config::Settings, utils::logging::*, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 🔧 Carregar .env antes de ler qualquer variável
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if dotenv_loaded {
        log_info("✅ Arquivo .env carregado com sucesso");
    } else {
        // Em produção não existe .env - variáveis vêm do ambiente
        tracing::debug!("Arquivo .env não encontrado - usando variáveis de ambiente do sistema");
    }

    let settings = Settings::new().map_err(|e| {
        log_error(&format!("Failed to load settings: {}", e));
        e
    })?;

    log_config_loaded(&std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()));

    if !settings.igdb.has_credentials() {
        log_warning("⚠️  IGDB_CLIENT_ID ou IGDB_CLIENT_SECRET não configurado. Buscas vão falhar com erro de configuração.");
    }

    let address = settings.bind_address();
    let port = settings.server.port;
    let app_state = Arc::new(AppState::new(settings)?);
    let app = build_router(app_state);

    log_server_startup(port);
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        log_error(&format!("❌ Falha ao abrir listener em {}: {}", address, e));
        e
    })?;
    log_server_ready(&address);

    // Graceful shutdown com signal handling
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_info("🛑 Server shut down gracefully");
    Ok(())
}

/// Signal handler para graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log_error(&format!("Falha ao instalar handler de Ctrl+C: {}", e));
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log_error(&format!("Falha ao instalar handler de SIGTERM: {}", e));
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log_info("🛑 Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            log_info("🛑 Received SIGTERM, shutting down gracefully...");
        }
    }
}
