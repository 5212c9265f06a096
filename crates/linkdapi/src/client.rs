//! Cliente HTTP para a LinkdAPI

use crate::error::{LinkdApiError, Result};
use crate::types::ApiEnvelope;
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// URL base padrão da LinkdAPI
pub const DEFAULT_BASE_URL: &str = "https://linkdapi.com/api/v1";

/// Header de autenticação exigido pela LinkdAPI
pub const API_KEY_HEADER: &str = "X-linkdapi-apikey";

/// Cliente para interagir com a LinkdAPI
///
/// Dois modos de chamada:
/// - passthrough: o JSON é devolvido intacto e respostas não-2xx viram
///   `LinkdApiError::ApiError` com o corpo bruto
/// - envelope: o status HTTP é ignorado e o corpo é lido como
///   `ApiEnvelope<T>`; quem chama decide a partir de `success`
#[derive(Clone)]
pub struct LinkdApiClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
}

impl LinkdApiClient {
    /// Cria um novo cliente LinkdAPI
    ///
    /// # Timeouts
    ///
    /// - Total: 30s
    /// - Connect: 5s
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL, 30)
    }

    /// Cria um cliente apontando para outra URL base (staging, mocks de teste)
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        total_timeout_secs: u64,
    ) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(total_timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| LinkdApiError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// A chave de API foi configurada?
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Obtém a URL base
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Executa um GET com os headers da LinkdAPI, sem olhar o status
    pub(crate) async fn send_get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!("GET {} ({} query params)", url, query.len());

        let response = self
            .http_client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header("Content-Type", "application/json")
            .query(query)
            .send()
            .await?;

        Ok(response)
    }

    /// GET passthrough: JSON intacto, erro com status e corpo em caso de não-2xx
    pub(crate) async fn get_passthrough(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Value> {
        let response = self.send_get(endpoint, query).await?;
        let response = self.handle_response(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// GET envelope: lê `ApiEnvelope<T>` qualquer que seja o status
    pub(crate) async fn get_envelope<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<ApiEnvelope<T>> {
        let response = self.send_get(endpoint, query).await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            tracing::warn!("LinkdAPI {} respondeu {}", endpoint, status.as_u16());
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Processa a resposta HTTP e trata erros
    async fn handle_response(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let status_code = status.as_u16();
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("LinkdAPI error ({}): {}", status_code, body);

            Err(LinkdApiError::ApiError {
                status: status_code,
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_client_creation() {
        let client = LinkdApiClient::new("test-key").unwrap();
        assert!(client.is_configured());
        assert_eq!(client.base_url(), "https://linkdapi.com/api/v1");
    }

    #[test]
    fn test_empty_key_is_not_configured() {
        let client = LinkdApiClient::new("").unwrap();
        assert!(!client.is_configured());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = LinkdApiClient::with_base_url("k", "http://localhost:9999/api/v1/", 5).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999/api/v1");
    }

    #[tokio::test]
    async fn test_api_key_header_is_sent() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/ping")
                    .header(API_KEY_HEADER, "secret-key");
                then.status(200).json_body(serde_json::json!({ "ok": true }));
            })
            .await;

        let client = LinkdApiClient::with_base_url("secret-key", server.base_url(), 5).unwrap();
        let value = client.get_passthrough("/ping", &[]).await.unwrap();

        mock.assert_async().await;
        assert_eq!(value["ok"], true);
    }

    #[tokio::test]
    async fn test_non_success_keeps_status_and_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/boom");
                then.status(429).body("rate limited");
            })
            .await;

        let client = LinkdApiClient::with_base_url("k", server.base_url(), 5).unwrap();
        let err = client.get_passthrough("/boom", &[]).await.unwrap_err();

        assert_eq!(err.upstream_status(), Some(429));
        match err {
            LinkdApiError::ApiError { body, .. } => assert_eq!(body, "rate limited"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
