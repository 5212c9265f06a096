use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};
use thiserror::Error;

/// Mensagem genérica de falha interna exibida ao front
pub const GENERIC_SERVER_ERROR: &str = "Erreur serveur interne";

#[derive(Debug, Error)]
pub enum AppError {
    /// Parâmetro ou corpo inválido (400)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Token Bearer ausente (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Recurso não encontrado (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Resposta não-OK de uma API externa, repassada com o mesmo status
    #[error("Upstream error ({status}): {message}")]
    Upstream {
        status: u16,
        message: String,
        details: Option<Value>,
    },

    /// Configuração ausente no servidor (500)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Qualquer outra falha (500); a mensagem vai para o front como está
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        AppError::Upstream {
            status,
            message: message.into(),
            details: None,
        }
    }

    pub fn upstream_with_details(status: u16, message: impl Into<String>, details: Value) -> Self {
        AppError::Upstream {
            status,
            message: message.into(),
            details: Some(details),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (error_message, details) = match self {
            AppError::ValidationError(msg)
            | AppError::Unauthorized(msg)
            | AppError::NotFound(msg)
            | AppError::ConfigError(msg)
            | AppError::InternalError(msg) => (msg, None),
            AppError::Upstream { message, details, .. } => (message, details),
        };

        let mut body = json!({
            "error": error_message,
            "status": status.as_u16()
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
