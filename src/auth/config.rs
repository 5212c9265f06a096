//! OAuth2 Configuration
//!
//! Centraliza as configurações do app LinkedIn (client, URLs, escopos)

use serde::{Deserialize, Serialize};

use crate::config::LinkedInSettings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuth2Config {
    /// Client ID do app LinkedIn
    pub client_id: String,

    /// Client Secret do app LinkedIn
    pub client_secret: String,

    /// URL de callback registrada no app LinkedIn
    pub redirect_uri: String,

    /// Escopos pedidos (OpenID Connect + publicação)
    pub scopes: Vec<String>,

    pub authorization_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

impl OAuth2Config {
    pub fn from_settings(settings: &LinkedInSettings) -> Self {
        Self {
            client_id: settings.client_id.clone(),
            client_secret: settings.client_secret.clone(),
            redirect_uri: settings.redirect_uri.clone(),
            scopes: settings.scopes.clone(),
            authorization_url: settings.authorization_url.clone(),
            token_url: settings.token_url.clone(),
            userinfo_url: settings.userinfo_url.clone(),
        }
    }

    /// Gerar URL de autorização do LinkedIn
    ///
    /// Os escopos vão separados por um espaço (codificado como `%20`).
    pub fn authorization_url(&self, state: &str) -> String {
        let scope = self.scopes.join(" ");
        format!(
            "{}?response_type=code&client_id={}&redirect_uri={}&state={}&scope={}",
            self.authorization_url,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.redirect_uri),
            urlencoding::encode(state),
            urlencoding::encode(&scope)
        )
    }
}

/// Novo `state` OAuth aleatório
pub fn new_state() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn test_config() -> OAuth2Config {
        let mut settings = Settings::default();
        settings.linkedin.client_id = "test_client_id".to_string();
        settings.linkedin.client_secret = "test_secret".to_string();
        settings.linkedin.redirect_uri = "https://example.com/callback".to_string();
        OAuth2Config::from_settings(&settings.linkedin)
    }

    #[test]
    fn test_authorization_url() {
        let url = test_config().authorization_url("abc123");

        assert!(url.starts_with("https://www.linkedin.com/oauth/v2/authorization?response_type=code&"));
        assert!(url.contains("client_id=test_client_id"));
        assert!(url.contains("redirect_uri=https%3A%2F%2Fexample.com%2Fcallback"));
        assert!(url.contains("state=abc123"));
        assert!(url.ends_with("scope=openid%20profile%20email%20w_member_social"));
    }

    #[test]
    fn test_new_state_is_random() {
        let a = new_state();
        let b = new_state();
        assert_eq!(a.len(), 32);
        assert_ne!(a, b);
    }
}
