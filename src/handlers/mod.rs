// Handlers HTTP das rotas /api/linkedin/* e health checks
// Os handlers OAuth2 ficam em src/auth/handlers.rs
pub mod health;
pub mod posts;
pub mod publish;
pub mod search;
pub mod stats;

pub use health::*;
pub use posts::*;
pub use publish::*;
pub use search::*;
pub use stats::*;

use axum::body::Bytes;
use linkdapi::{LinkdApiClient, LinkdApiError};
use serde::de::DeserializeOwned;

use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};

pub const INVALID_JSON_BODY: &str = "Corps de requête JSON invalide";
pub const LINKDAPI_KEY_MISSING: &str = "Clé API LinkdAPI non configurée";

/// Lê o corpo como JSON; corpo vazio ou malformado vira 400
pub fn parse_json_body<T: DeserializeOwned>(body: &Bytes) -> AppResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        log_validation_error("body", &e.to_string());
        AppError::ValidationError(INVALID_JSON_BODY.to_string())
    })
}

/// Rotas de estatísticas exigem a chave LinkdAPI; as de busca não
pub(crate) fn require_api_key(client: &LinkdApiClient) -> AppResult<()> {
    if client.is_configured() {
        Ok(())
    } else {
        log_error("❌ LINKDAPI_API_KEY ausente");
        Err(AppError::ConfigError(LINKDAPI_KEY_MISSING.to_string()))
    }
}

/// Falha de rede ou JSON numa chamada envelope vira o 500 genérico da rota
pub(crate) fn envelope_failure(endpoint: &'static str, message: &str) -> impl FnOnce(LinkdApiError) -> AppError {
    let message = message.to_string();
    move |e| {
        log_upstream_error("LinkdAPI", endpoint, e.upstream_status(), &e.to_string());
        AppError::InternalError(message)
    }
}
