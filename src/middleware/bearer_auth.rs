/// Middleware de autenticação Bearer para as rotas que agem em nome do membro
///
/// Exige `Authorization: Bearer <token>`. O token não é validado aqui: é
/// repassado como está ao LinkedIn, que decide. O handler recebe o token via
/// `Extension<AccessToken>`.
///
/// # Respostas
///
/// - continua para o handler quando o header está presente
/// - **401 Unauthorized** `{"error": "Token d'accès manquant"}` caso contrário

use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::utils::AppError;

pub const MISSING_TOKEN: &str = "Token d'accès manquant";

/// Access token LinkedIn extraído do header Authorization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Extrai o token de `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Option<AccessToken> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| AccessToken(t.to_string()))
}

pub async fn require_bearer_token(mut request: Request, next: Next) -> Result<Response, AppError> {
    match bearer_token(request.headers()) {
        Some(token) => {
            tracing::debug!("✅ Bearer token presente");
            request.extensions_mut().insert(token);
            Ok(next.run(request).await)
        }
        None => {
            tracing::warn!("❌ Requisição sem Bearer token: {}", request.uri().path());
            Err(AppError::Unauthorized(MISSING_TOKEN.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_none());

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(bearer_token(&headers).is_none());

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer AQX123"));
        assert_eq!(bearer_token(&headers), Some(AccessToken("AQX123".to_string())));
    }
}
