use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::time::Instant;

use super::{envelope_failure, require_api_key};
use crate::services::build_profile_stats;
use crate::utils::logging::*;
use crate::utils::{non_empty, AppError, AppResult};
use crate::AppState;

pub const NAME_REQUIRED: &str = "Paramètre 'name' requis";
pub const USER_NOT_FOUND: &str = "Utilisateur non trouvé sur LinkedIn";
pub const USERNAME_NOT_EXTRACTED: &str = "Impossible d'extraire le username LinkedIn";
pub const FULL_PROFILE_FAILED: &str = "Impossible de récupérer le profil complet";
pub const STATS_FAILED: &str = "Erreur lors de la récupération des statistiques";

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    name: Option<String>,
}

/// GET /api/linkedin/stats?name=Jane%20Doe
///
/// Busca a pessoa pelo nome, pega o primeiro resultado e monta o cartão de
/// estatísticas a partir de `/profile/full` e `/profile/overview`.
pub async fn get_profile_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatsQuery>,
) -> AppResult<Json<Value>> {
    let start_time = Instant::now();
    log_request_received("/api/linkedin/stats", "GET");

    let name = non_empty(params.name.as_deref()).ok_or_else(|| {
        log_validation_error("name", NAME_REQUIRED);
        AppError::ValidationError(NAME_REQUIRED.to_string())
    })?;

    let client = &state.linkdapi;
    require_api_key(client)?;

    let search = client
        .find_people(&name)
        .await
        .map_err(envelope_failure("search/people", STATS_FAILED))?;

    let hit = search.into_data().and_then(|page| page.first().cloned()).ok_or_else(|| {
        log_warning(&format!("⚠️ Nenhum perfil encontrado para '{}'", name));
        AppError::NotFound(USER_NOT_FOUND.to_string())
    })?;

    let username = hit.username().ok_or_else(|| {
        log_error(&format!("❌ URL de perfil sem username: {:?}", hit.url));
        AppError::InternalError(USERNAME_NOT_EXTRACTED.to_string())
    })?;
    let urn = hit.urn.clone().unwrap_or_default();

    log_info(&format!("🔍 Perfil encontrado: {} ({})", username, urn));

    let (full, overview) = tokio::join!(
        client.profile_full(&username, &urn),
        client.profile_overview(&username)
    );

    let profile = full
        .map_err(envelope_failure("profile/full", STATS_FAILED))?
        .into_data()
        .ok_or_else(|| {
            log_error(&format!("❌ /profile/full sem dados para {}", username));
            AppError::InternalError(FULL_PROFILE_FAILED.to_string())
        })?;

    // overview é opcional: sem ele os contadores ficam em 0
    let overview = match overview {
        Ok(envelope) => envelope.into_data(),
        Err(e) => {
            log_warning(&format!("⚠️ /profile/overview indisponível para {}: {}", username, e));
            None
        }
    };

    let stats = build_profile_stats(&hit, &username, profile, overview);

    log_request_processed("/api/linkedin/stats", 200, start_time.elapsed().as_millis() as u64);

    Ok(Json(json!({ "success": true, "data": stats })))
}
