/// Main Application: BFF LinkedIn Publisher
///
/// - OAuth2 LinkedIn (OpenID Connect + w_member_social)
/// - Publicação de posts em nome do membro
/// - Estatísticas de perfil/posts e buscas via LinkdAPI
///
/// Sem banco e sem sessão: o token do membro vive no navegador.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use linkedin_publisher_bff::config::Settings;
use linkedin_publisher_bff::utils::logging::*;
use linkedin_publisher_bff::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 🔧 Carregar variáveis de ambiente do arquivo .env (se existir)
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    if dotenv_loaded {
        log_info("✅ Arquivo .env carregado com sucesso");
    } else {
        tracing::debug!("Arquivo .env não encontrado - usando variáveis de ambiente do sistema");
    }

    let settings = Settings::new()?;
    log_config_loaded(&std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()));

    if settings.oauth_configured() {
        log_info(&format!("✅ OAuth2 LinkedIn habilitado (callback: {})", settings.linkedin.redirect_uri));
    } else {
        log_warning("⚠️  OAuth2 desabilitado (LINKEDIN_CLIENT_ID ou LINKEDIN_CLIENT_SECRET ausentes)");
    }

    if settings.linkdapi.api_key.is_empty() {
        log_warning("⚠️  LINKDAPI_API_KEY ausente: /api/linkedin/stats e /api/linkedin/posts responderão 500");
    }

    let host = settings.server.host.clone();
    let port = settings.effective_port();

    let app_state = Arc::new(AppState::from_settings(settings)?);
    let app = build_router(app_state);

    log_server_startup(port);
    let listener = TcpListener::bind(format!("{}:{}", host, port)).await?;
    log_server_ready(&host, port);

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
