use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::LinkedInSettings;
use crate::utils::logging::*;
use crate::utils::{non_empty, AppError, AppResult, GENERIC_SERVER_ERROR};

pub const PERSON_URN_PREFIX: &str = "urn:li:person:";
pub const PUBLISH_FAILED: &str = "Erreur lors de la publication";
pub const PUBLISH_SUCCEEDED: &str = "Post publié avec succès";

/// Resultado de uma publicação bem-sucedida
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublishedPost {
    pub success: bool,
    pub message: String,
    /// Valor do header `x-restli-id` (ex.: `urn:li:share:7123...`)
    pub post_id: Option<String>,
}

/// Publica posts de texto via API REST `/rest/posts`
#[derive(Clone)]
pub struct LinkedInPostsService {
    client: Client,
    post_url: String,
    api_version: String,
}

/// Normaliza o autor para `urn:li:person:<id>`
pub fn format_author_urn(author: &str) -> String {
    if author.starts_with(PERSON_URN_PREFIX) {
        author.to_string()
    } else {
        format!("{}{}", PERSON_URN_PREFIX, author)
    }
}

/// Corpo de `/rest/posts` para um post de texto público no feed
pub fn build_post_body(author_urn: &str, text: &str) -> Value {
    json!({
        "author": author_urn,
        "commentary": text,
        "visibility": "PUBLIC",
        "distribution": {
            "feedDistribution": "MAIN_FEED",
            "targetEntities": [],
            "thirdPartyDistributionChannels": []
        },
        "lifecycleState": "PUBLISHED",
        "isReshareDisabledByAuthor": false
    })
}

impl LinkedInPostsService {
    pub fn new(settings: &LinkedInSettings) -> Self {
        Self::with_client(settings, Client::new())
    }

    pub fn with_client(settings: &LinkedInSettings, client: Client) -> Self {
        Self {
            client,
            post_url: settings.post_url.clone(),
            api_version: settings.api_version.clone(),
        }
    }

    /// Publica `text` em nome de `author` usando o token do membro
    ///
    /// Só `201 Created` conta como sucesso. Qualquer outro status volta como
    /// `AppError::Upstream` com o mesmo status e o corpo do LinkedIn em `details`.
    pub async fn publish(&self, access_token: &str, author: &str, text: &str) -> AppResult<PublishedPost> {
        let author_urn = format_author_urn(author);
        log_info(&format!("Author URN formaté: {}", author_urn));

        let body = build_post_body(&author_urn, text);

        let response = self.client
            .post(&self.post_url)
            .bearer_auth(access_token)
            .header("Content-Type", "application/json")
            .header("X-Restli-Protocol-Version", "2.0.0")
            .header("LinkedIn-Version", &self.api_version)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                log_error(&format!("❌ Falha ao conectar com LinkedIn posts: {}", e));
                AppError::InternalError(GENERIC_SERVER_ERROR.to_string())
            })?;

        let status = response.status();

        if status == StatusCode::CREATED {
            let post_id = response
                .headers()
                .get("x-restli-id")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);

            log_post_published(post_id.as_deref(), &author_urn);

            return Ok(PublishedPost {
                success: true,
                message: PUBLISH_SUCCEEDED.to_string(),
                post_id,
            });
        }

        let text_body = response.text().await.unwrap_or_default();
        log_upstream_error("LinkedIn", "rest/posts", Some(status.as_u16()), &text_body);

        // corpo não-JSON vira string em `details`
        let details: Value = serde_json::from_str(&text_body).unwrap_or(Value::String(text_body));
        let message = non_empty(details.get("message").and_then(|v| v.as_str()))
            .unwrap_or_else(|| PUBLISH_FAILED.to_string());

        Err(AppError::upstream_with_details(status.as_u16(), message, details))
    }
}
