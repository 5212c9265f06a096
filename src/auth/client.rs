//! OAuth2 HTTP Client
//!
//! Cliente HTTP para o OAuth2 do LinkedIn: troca de code e userinfo (OpenID Connect)

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::OAuth2Config;
use crate::utils::logging::*;
use crate::utils::{non_empty, truncate_safe, AppError, AppResult, GENERIC_SERVER_ERROR};

pub const TOKEN_EXCHANGE_FAILED: &str = "Erreur lors de l'échange du token";
pub const USERINFO_FAILED: &str = "Erreur lors de la récupération des infos utilisateur";

/// Resposta do endpoint de token, no formato devolvido ao front
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: Option<u64>,
    pub refresh_token: Option<String>,
    pub refresh_token_expires_in: Option<u64>,
    pub scope: Option<String>,
}

/// Userinfo OpenID Connect, no formato devolvido ao front
///
/// `urn` vem do claim `sub`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserInfo {
    pub urn: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawUserInfo {
    sub: Option<String>,
    name: Option<String>,
    email: Option<String>,
    picture: Option<String>,
}

/// Cliente OAuth2 para o LinkedIn
#[derive(Clone)]
pub struct OAuth2Client {
    config: OAuth2Config,
    http_client: Client,
}

impl OAuth2Client {
    pub fn new(config: OAuth2Config) -> Self {
        Self::with_http_client(config, Client::new())
    }

    pub fn with_http_client(config: OAuth2Config, http_client: Client) -> Self {
        Self { config, http_client }
    }

    pub fn config(&self) -> &OAuth2Config {
        &self.config
    }

    /// Trocar authorization code por access token
    ///
    /// # Retorno
    /// - `Ok(TokenResponse)`: token obtido
    /// - `Err(AppError::Upstream)`: LinkedIn recusou (status repassado,
    ///   mensagem = `error_description`)
    /// - `Err(AppError::InternalError)`: rede ou JSON inválido
    pub async fn exchange_code_for_token(&self, code: &str) -> AppResult<TokenResponse> {
        log_info("🔐 [OAuth2] Trocando authorization code por access token...");
        log_info(&format!("📤 [OAuth2] POST {} - client_id: {}, code: {}...",
            self.config.token_url, self.config.client_id, truncate_safe(code, 10)));

        let form = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];

        let response = self.http_client
            .post(&self.config.token_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                log_error(&format!("❌ [OAuth2] Falha ao conectar com LinkedIn OAuth: {}", e));
                AppError::InternalError(GENERIC_SERVER_ERROR.to_string())
            })?;

        let status = response.status();
        let body: Value = response.json().await.map_err(|e| {
            log_error(&format!("❌ [OAuth2] Resposta de token ilegível: {}", e));
            AppError::InternalError(GENERIC_SERVER_ERROR.to_string())
        })?;

        if !status.is_success() {
            log_upstream_error("LinkedIn", "oauth/v2/accessToken", Some(status.as_u16()), &body.to_string());
            let message = non_empty(body.get("error_description").and_then(|v| v.as_str()))
                .unwrap_or_else(|| TOKEN_EXCHANGE_FAILED.to_string());
            return Err(AppError::upstream(status.as_u16(), message));
        }

        let mut token: TokenResponse = serde_json::from_value(body).map_err(|e| {
            log_error(&format!("❌ [OAuth2] Falha ao parsear resposta do token: {}", e));
            AppError::InternalError(GENERIC_SERVER_ERROR.to_string())
        })?;
        token.refresh_token = non_empty(token.refresh_token.as_deref());
        token.refresh_token_expires_in = token.refresh_token_expires_in.filter(|v| *v > 0);

        log_info(&format!("✅ [OAuth2] Access token obtido: {}...", truncate_safe(&token.access_token, 20)));

        Ok(token)
    }

    /// Buscar o userinfo OpenID Connect do membro autenticado
    pub async fn get_userinfo(&self, access_token: &str) -> AppResult<UserInfo> {
        log_info("🔍 [OAuth2] Consultando userinfo...");

        let response = self.http_client
            .get(&self.config.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                log_error(&format!("❌ [OAuth2] Falha ao consultar userinfo: {}", e));
                AppError::InternalError(GENERIC_SERVER_ERROR.to_string())
            })?;

        let status = response.status();
        let body: Value = response.json().await.map_err(|e| {
            log_error(&format!("❌ [OAuth2] Userinfo ilegível: {}", e));
            AppError::InternalError(GENERIC_SERVER_ERROR.to_string())
        })?;

        if !status.is_success() {
            log_upstream_error("LinkedIn", "v2/userinfo", Some(status.as_u16()), &body.to_string());
            let message = non_empty(body.get("message").and_then(|v| v.as_str()))
                .unwrap_or_else(|| USERINFO_FAILED.to_string());
            return Err(AppError::upstream(status.as_u16(), message));
        }

        let raw: RawUserInfo = serde_json::from_value(body).map_err(|e| {
            log_error(&format!("❌ [OAuth2] Falha ao parsear userinfo: {}", e));
            AppError::InternalError(GENERIC_SERVER_ERROR.to_string())
        })?;

        log_info(&format!("✅ [OAuth2] Userinfo obtido para {:?}", raw.sub));

        Ok(UserInfo {
            urn: raw.sub,
            name: raw.name,
            email: raw.email,
            picture: raw.picture,
        })
    }
}
