/// Middleware layer para o Axum router
///
/// - Autenticação Bearer das rotas que agem em nome do membro LinkedIn

pub mod bearer_auth;

pub use bearer_auth::{bearer_token, require_bearer_token, AccessToken, MISSING_TOKEN};
