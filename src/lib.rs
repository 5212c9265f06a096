// Biblioteca do BFF LinkedIn Publisher
// Expõe módulos para uso em testes e no binário

pub mod auth;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod utils;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::{OAuth2Client, OAuth2Config};
use crate::services::LinkedInPostsService;
use crate::utils::{AppError, AppResult};

// AppState é definido aqui para ser compartilhado
#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub oauth: OAuth2Client,
    pub linkedin: LinkedInPostsService,
    pub linkdapi: linkdapi::LinkdApiClient,
}

impl AppState {
    /// Monta os clientes a partir das configurações; chaves vazias não impedem
    /// a subida, só desativam as rotas que dependem delas
    pub fn from_settings(settings: config::Settings) -> AppResult<Self> {
        let linkdapi = linkdapi::LinkdApiClient::with_base_url(
            settings.linkdapi.api_key.clone(),
            settings.linkdapi.base_url.clone(),
            settings.linkdapi.timeout_seconds,
        )
        .map_err(|e| AppError::ConfigError(e.to_string()))?;

        Ok(Self {
            oauth: OAuth2Client::new(OAuth2Config::from_settings(&settings.linkedin)),
            linkedin: LinkedInPostsService::new(&settings.linkedin),
            linkdapi,
            settings,
        })
    }
}

/// Router completo da aplicação
pub fn build_router(state: Arc<AppState>) -> Router {
    // Rotas que agem em nome do membro: exigem Authorization: Bearer
    let member_routes = Router::new()
        .route("/api/linkedin/userinfo", get(auth::get_userinfo))
        .route("/api/linkedin/post", post(handlers::publish_post))
        .route_layer(from_fn(middleware::require_bearer_token));

    Router::new()
        // Health checks
        .route("/health", get(handlers::health_check))
        .route("/status", get(handlers::status_check))

        // OAuth2
        .route("/auth/linkedin", get(auth::start_oauth_flow))
        .route("/callback", get(auth::handle_oauth_callback))
        .route("/api/linkedin/token", post(auth::exchange_token))

        // LinkdAPI
        .route("/api/linkedin/stats", get(handlers::get_profile_stats))
        .route("/api/linkedin/posts", get(handlers::get_posts_stats))
        .route("/api/linkedin/search/people", get(handlers::search_people))
        .route("/api/linkedin/search/posts", get(handlers::search_posts))
        .route("/api/linkedin/search/filters", get(handlers::search_filters))
        .route("/api/linkedin/lookup/geo", get(handlers::lookup_geo))

        .merge(member_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
