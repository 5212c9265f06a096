//! # LinkedIn OAuth2 Authentication Module
//!
//! Fluxo "Sign In with LinkedIn using OpenID Connect" + escopo de publicação.
//!
//! ## Estrutura:
//! - `config.rs`: Configurações OAuth2 (client, URLs, escopos, state)
//! - `client.rs`: Cliente HTTP OAuth2 (troca de code, userinfo)
//! - `handlers.rs`: Handlers HTTP (início do fluxo, callback, token, userinfo)
//!
//! Nenhum token é guardado no servidor: o access token vai para o navegador
//! e volta em `Authorization: Bearer` nas rotas que agem em nome do membro.

pub mod config;
pub mod client;
pub mod handlers;

pub use config::OAuth2Config;
pub use client::{OAuth2Client, TokenResponse, UserInfo};
pub use handlers::{exchange_token, get_userinfo, handle_oauth_callback, start_oauth_flow};
