//! OAuth2 HTTP Handlers
//!
//! Endpoints HTTP do fluxo OAuth2 LinkedIn:
//! - `GET /auth/linkedin`: redireciona para a tela de autorização
//! - `POST /api/linkedin/token`: troca o code por token (usado pelo front)
//! - `GET /api/linkedin/userinfo`: perfil OpenID do membro
//! - `GET /callback`: página que encadeia troca de code + userinfo e grava
//!   o resultado no localStorage do navegador

use axum::{
    body::Bytes,
    extract::{Query, State},
    response::{Html, Json, Redirect},
    Extension,
};
use serde::Deserialize;
use std::sync::Arc;

use super::client::{TokenResponse, UserInfo};
use super::config::new_state;
use crate::handlers::parse_json_body;
use crate::middleware::AccessToken;
use crate::utils::logging::*;
use crate::utils::{escape_html, js_string_literal, non_empty, truncate_safe, AppError, AppResult};
use crate::AppState;

pub const MISSING_CODE: &str = "Code d'autorisation manquant";

/// Corpo de `POST /api/linkedin/token`
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    code: Option<String>,
}

/// Parâmetros do callback OAuth2
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackParams {
    /// Authorization code retornado pelo LinkedIn
    code: Option<String>,
    state: Option<String>,
    /// Erro retornado pelo LinkedIn (ex.: `user_cancelled_login`)
    error: Option<String>,
    error_description: Option<String>,
}

/// GET /auth/linkedin
///
/// Inicia o fluxo OAuth2 redirecionando o usuário para a página de autorização do LinkedIn
pub async fn start_oauth_flow(State(state): State<Arc<AppState>>) -> AppResult<Redirect> {
    log_info("🚀 [OAuth2] Iniciando fluxo de autorização...");

    if !state.settings.oauth_configured() {
        log_error("❌ [OAuth2] LINKEDIN_CLIENT_ID/LINKEDIN_CLIENT_SECRET ausentes");
        return Err(AppError::ConfigError("LinkedIn OAuth non configuré".to_string()));
    }

    let oauth_state = new_state();
    let auth_url = state.oauth.config().authorization_url(&oauth_state);

    log_info(&format!("↗️  [OAuth2] Redirecionando para: {}", auth_url));

    Ok(Redirect::temporary(&auth_url))
}

/// POST /api/linkedin/token
///
/// Body `{"code": "..."}`. Responde o token no formato do front.
pub async fn exchange_token(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<TokenResponse>> {
    log_request_received("/api/linkedin/token", "POST");

    let request: TokenRequest = parse_json_body(&body)?;
    let code = non_empty(request.code.as_deref()).ok_or_else(|| {
        log_validation_error("code", MISSING_CODE);
        AppError::ValidationError(MISSING_CODE.to_string())
    })?;

    let token = state.oauth.exchange_code_for_token(&code).await?;

    Ok(Json(token))
}

/// GET /api/linkedin/userinfo
pub async fn get_userinfo(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<AccessToken>,
) -> AppResult<Json<UserInfo>> {
    log_request_received("/api/linkedin/userinfo", "GET");

    let info = state.oauth.get_userinfo(token.as_str()).await?;

    Ok(Json(info))
}

/// GET /callback?code=XXX&state=YYY
///
/// Encadeia: erro OAuth? → code presente? → troca de code → userinfo.
/// Para na primeira falha e mostra a página de erro.
pub async fn handle_oauth_callback(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OAuthCallbackParams>,
) -> Html<String> {
    log_info("📥 [OAuth2] Callback recebido");

    if let Some(error) = non_empty(params.error.as_deref()) {
        log_error(&format!("❌ [OAuth2] Erro na autorização: {} ({:?})", error, params.error_description));
        let message = non_empty(params.error_description.as_deref()).unwrap_or(error);
        return render_error_page(&message, &state.settings.linkedin.frontend_url);
    }

    let Some(code) = non_empty(params.code.as_deref()) else {
        log_error("❌ [OAuth2] Code não recebido no callback");
        return render_error_page(MISSING_CODE, &state.settings.linkedin.frontend_url);
    };

    // TODO: comparar com o state gravado no navegador quando o front passar a enviá-lo num cookie
    log_info(&format!("🔑 [OAuth2] Code recebido: {}... state: {:?}", truncate_safe(&code, 10), params.state));

    let token = match state.oauth.exchange_code_for_token(&code).await {
        Ok(token) => token,
        Err(e) => {
            log_error(&format!("❌ [OAuth2] Falha ao obter token: {}", e));
            return render_error_page(&callback_error_message(e), &state.settings.linkedin.frontend_url);
        }
    };

    let user = match state.oauth.get_userinfo(&token.access_token).await {
        Ok(user) => user,
        Err(e) => {
            log_error(&format!("❌ [OAuth2] Falha ao obter userinfo: {}", e));
            return render_error_page(&callback_error_message(e), &state.settings.linkedin.frontend_url);
        }
    };

    log_info(&format!("✅ [OAuth2] Login concluído para {:?}", user.urn));

    render_success_page(&token, &user, &state.settings.linkedin.frontend_url)
}

/// Mesmo texto que o campo `error` das rotas JSON
fn callback_error_message(error: AppError) -> String {
    match error {
        AppError::ValidationError(msg)
        | AppError::Unauthorized(msg)
        | AppError::NotFound(msg)
        | AppError::ConfigError(msg)
        | AppError::InternalError(msg) => msg,
        AppError::Upstream { message, .. } => message,
    }
}

/// Renderizar página de sucesso
///
/// Grava as chaves `linkedin_*` no localStorage e volta ao front após 1s.
fn render_success_page(token: &TokenResponse, user: &UserInfo, frontend_url: &str) -> Html<String> {
    let mut script = String::new();
    let mut set = |key: &str, value: &str| {
        script.push_str(&format!(
            "localStorage.setItem({}, {});\n",
            js_string_literal(key),
            js_string_literal(value)
        ));
    };

    set("linkedin_access_token", &token.access_token);
    set("linkedin_expires_in", &token.expires_in.unwrap_or(0).to_string());
    set("linkedin_user_urn", user.urn.as_deref().unwrap_or(""));
    set("linkedin_user_name", user.name.as_deref().unwrap_or(""));
    set("linkedin_user_email", user.email.as_deref().unwrap_or(""));
    if let Some(refresh) = &token.refresh_token {
        set("linkedin_refresh_token", refresh);
    }

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <title>LinkedIn - Connexion</title>
    <meta charset="UTF-8">
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Arial, sans-serif;
               display: flex; min-height: 100vh; align-items: center; justify-content: center;
               margin: 0; background: #fafafa; }}
        .container {{ background: white; padding: 32px; border-radius: 12px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }}
        p {{ color: #52525b; }}
    </style>
    <script>
{script}localStorage.removeItem("linkedin_oauth_state");
sessionStorage.removeItem("linkedin_oauth_state");
setTimeout(function () {{ window.location.href = {target}; }}, 1000);
    </script>
</head>
<body>
    <div class="container">
        <p>Authentification réussie! Redirection...</p>
    </div>
</body>
</html>
"#,
        script = script,
        target = js_string_literal(frontend_url),
    ))
}

/// Renderizar página de erro (o link volta para `frontend_url`)
fn render_error_page(error: &str, frontend_url: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <title>LinkedIn - Erreur</title>
    <meta charset="UTF-8">
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Arial, sans-serif;
               display: flex; min-height: 100vh; align-items: center; justify-content: center;
               margin: 0; background: #fafafa; }}
        .container {{ background: white; padding: 32px; border-radius: 12px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }}
        .error {{ color: #ef4444; font-size: 18px; font-weight: 500; }}
        a {{ display: inline-block; margin-top: 16px; background: #2563eb; color: white;
             padding: 8px 16px; border-radius: 8px; text-decoration: none; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="error">Erreur</div>
        <p>{message}</p>
        <a href="{home}">Retour à l'accueil</a>
    </div>
</body>
</html>
"#,
        message = escape_html(error),
        home = escape_html(frontend_url),
    ))
}
