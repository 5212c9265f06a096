use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::time::Instant;

use super::{envelope_failure, require_api_key};
use crate::services::{build_posts_stats, PostsStats};
use crate::utils::logging::*;
use crate::utils::{non_empty, AppError, AppResult};
use crate::AppState;

pub const URN_REQUIRED: &str = "Paramètre 'urn' requis";
pub const POSTS_FAILED: &str = "Erreur lors de la récupération des posts";

#[derive(Debug, Deserialize)]
pub struct PostsQuery {
    urn: Option<String>,
}

/// GET /api/linkedin/posts?urn=ACoAA...
pub async fn get_posts_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PostsQuery>,
) -> AppResult<Json<Value>> {
    let start_time = Instant::now();
    log_request_received("/api/linkedin/posts", "GET");

    let urn = non_empty(params.urn.as_deref()).ok_or_else(|| {
        log_validation_error("urn", URN_REQUIRED);
        AppError::ValidationError(URN_REQUIRED.to_string())
    })?;

    let client = &state.linkdapi;
    require_api_key(client)?;

    let envelope = client
        .all_posts(&urn)
        .await
        .map_err(envelope_failure("posts/all", POSTS_FAILED))?;

    let stats = if envelope.success {
        let posts = envelope.data.and_then(|page| page.posts).unwrap_or_default();
        build_posts_stats(posts)
    } else {
        log_warning(&format!("⚠️ LinkdAPI sem posts para {}: {:?}", urn, envelope.message));
        PostsStats::empty()
    };

    log_info(&format!("📊 {} posts analisados para {}", stats.total_posts, urn));
    log_request_processed("/api/linkedin/posts", 200, start_time.elapsed().as_millis() as u64);

    Ok(Json(json!({ "success": true, "data": stats })))
}
