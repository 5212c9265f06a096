//! Tipos de erro para o crate linkdapi

use thiserror::Error;

/// Erros do cliente LinkdAPI
#[derive(Debug, Error)]
pub enum LinkdApiError {
    /// Erro de requisição HTTP (rede, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Resposta não-2xx da LinkdAPI; `body` é o corpo bruto retornado
    #[error("LinkdAPI error (status {status}): {body}")]
    ApiError { status: u16, body: String },

    /// Erro de parsing JSON
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Erro de configuração (chave ausente, cliente HTTP inválido)
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl LinkdApiError {
    /// Status HTTP retornado pela LinkdAPI, se a falha veio de uma resposta
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            LinkdApiError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, LinkdApiError>;
