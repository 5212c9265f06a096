use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::utils::logging::*;
use crate::AppState;

const SERVICE_NAME: &str = "linkedin-publisher-bff";

pub async fn health_check() -> Json<Value> {
    log_health_check();

    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Quais integrações estão configuradas (nunca expõe segredos)
pub async fn status_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    log_integration_status_check();

    let linkedin = &state.settings.linkedin;

    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()),
        "integrations": {
            "linkedin_oauth": {
                "configured": state.settings.oauth_configured(),
                "client_id_configured": !linkedin.client_id.is_empty(),
                "redirect_uri": linkedin.redirect_uri,
                "scopes": linkedin.scopes,
                "api_version": linkedin.api_version
            },
            "linkdapi": {
                "configured": state.linkdapi.is_configured(),
                "base_url": state.linkdapi.base_url()
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[tokio::test]
    async fn test_health_check() {
        let Json(body) = health_check().await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], SERVICE_NAME);
    }

    #[tokio::test]
    async fn test_status_hides_secrets() {
        let mut settings = Settings::default();
        settings.linkedin.client_id = "cid".to_string();
        settings.linkedin.client_secret = "super-secret".to_string();
        settings.linkdapi.api_key = "li-key".to_string();
        let state = Arc::new(AppState::from_settings(settings).unwrap());

        let Json(body) = status_check(State(state)).await;

        assert_eq!(body["integrations"]["linkedin_oauth"]["configured"], true);
        assert_eq!(body["integrations"]["linkdapi"]["configured"], true);
        let rendered = body.to_string();
        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("li-key"));
    }
}
