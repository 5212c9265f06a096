use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SCOPES: [&str; 4] = ["openid", "profile", "email", "w_member_social"];
pub const DEFAULT_AUTHORIZATION_URL: &str = "https://www.linkedin.com/oauth/v2/authorization";
pub const DEFAULT_TOKEN_URL: &str = "https://www.linkedin.com/oauth/v2/accessToken";
pub const DEFAULT_USERINFO_URL: &str = "https://api.linkedin.com/v2/userinfo";
pub const DEFAULT_POST_URL: &str = "https://api.linkedin.com/rest/posts";
/// Versão da API REST do LinkedIn (formato YYYYMM)
pub const DEFAULT_API_VERSION: &str = "202411";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub linkedin: LinkedInSettings,
    pub linkdapi: LinkdApiSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LinkedInSettings {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
    pub authorization_url: String,
    pub token_url: String,
    pub userinfo_url: String,
    pub post_url: String,
    pub api_version: String,
    /// Para onde a página de callback manda o navegador depois do login
    pub frontend_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LinkdApiSettings {
    pub api_key: String,
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            linkedin: LinkedInSettings {
                client_id: String::new(),
                client_secret: String::new(),
                redirect_uri: String::new(),
                scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
                authorization_url: DEFAULT_AUTHORIZATION_URL.to_string(),
                token_url: DEFAULT_TOKEN_URL.to_string(),
                userinfo_url: DEFAULT_USERINFO_URL.to_string(),
                post_url: DEFAULT_POST_URL.to_string(),
                api_version: DEFAULT_API_VERSION.to_string(),
                frontend_url: "/".to_string(),
            },
            linkdapi: LinkdApiSettings {
                api_key: String::new(),
                base_url: linkdapi::DEFAULT_BASE_URL.to_string(),
                timeout_seconds: 30,
            },
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let defaults = Settings::default();

        let mut builder = Config::builder()
            // Valores embutidos: o serviço sobe mesmo sem arquivo de config
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", defaults.server.port as i64)?
            .set_default("linkedin.client_id", defaults.linkedin.client_id)?
            .set_default("linkedin.client_secret", defaults.linkedin.client_secret)?
            .set_default("linkedin.redirect_uri", defaults.linkedin.redirect_uri)?
            .set_default("linkedin.scopes", defaults.linkedin.scopes)?
            .set_default("linkedin.authorization_url", defaults.linkedin.authorization_url)?
            .set_default("linkedin.token_url", defaults.linkedin.token_url)?
            .set_default("linkedin.userinfo_url", defaults.linkedin.userinfo_url)?
            .set_default("linkedin.post_url", defaults.linkedin.post_url)?
            .set_default("linkedin.api_version", defaults.linkedin.api_version)?
            .set_default("linkedin.frontend_url", defaults.linkedin.frontend_url)?
            .set_default("linkdapi.api_key", defaults.linkdapi.api_key)?
            .set_default("linkdapi.base_url", defaults.linkdapi.base_url)?
            .set_default("linkdapi.timeout_seconds", defaults.linkdapi.timeout_seconds as i64)?
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // LINKEDIN_BFF__LINKEDIN__API_VERSION=202501 etc.
            .add_source(Environment::with_prefix("LINKEDIN_BFF").separator("__"));

        // Variáveis "históricas" do front Next.js
        let overrides = [
            ("LINKEDIN_CLIENT_ID", "linkedin.client_id"),
            ("LINKEDIN_CLIENT_SECRET", "linkedin.client_secret"),
            ("LINKEDIN_REDIRECT_URI", "linkedin.redirect_uri"),
            ("LINKDAPI_API_KEY", "linkdapi.api_key"),
        ];
        for (var, key) in overrides {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        let s = builder.build()?;

        s.try_deserialize()
    }

    /// Porta efetiva: `PORT` (Cloud Run, Render...) tem prioridade
    pub fn effective_port(&self) -> u16 {
        std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(self.server.port)
    }

    pub fn oauth_configured(&self) -> bool {
        !self.linkedin.client_id.is_empty() && !self.linkedin.client_secret.is_empty()
    }
}
