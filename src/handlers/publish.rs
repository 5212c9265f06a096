use axum::{body::Bytes, extract::State, response::Json, Extension};
use serde::Deserialize;
use std::sync::Arc;
use tokio::time::Instant;

use super::parse_json_body;
use crate::middleware::AccessToken;
use crate::services::PublishedPost;
use crate::utils::logging::*;
use crate::utils::{non_empty, AppError, AppResult};
use crate::AppState;

pub const TEXT_AND_AUTHOR_REQUIRED: &str = "Texte et URN de l'auteur requis";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    text: Option<String>,
    author_urn: Option<String>,
}

/// POST /api/linkedin/post
///
/// Body `{"text": "...", "authorUrn": "..."}`; `authorUrn` aceita o id puro
/// ou `urn:li:person:<id>`.
pub async fn publish_post(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<AccessToken>,
    body: Bytes,
) -> AppResult<Json<PublishedPost>> {
    let start_time = Instant::now();
    log_request_received("/api/linkedin/post", "POST");

    let request: PublishRequest = parse_json_body(&body)?;

    let (Some(text), Some(author)) = (
        non_empty(request.text.as_deref()),
        non_empty(request.author_urn.as_deref()),
    ) else {
        log_validation_error("text/authorUrn", TEXT_AND_AUTHOR_REQUIRED);
        return Err(AppError::ValidationError(TEXT_AND_AUTHOR_REQUIRED.to_string()));
    };

    let published = state.linkedin.publish(token.as_str(), &author, &text).await?;

    log_request_processed("/api/linkedin/post", 200, start_time.elapsed().as_millis() as u64);

    Ok(Json(published))
}
