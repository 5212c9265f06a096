//! Cliente da LinkdAPI
//!
//! A LinkdAPI (<https://linkdapi.com/docs>) é uma API não oficial de dados
//! do LinkedIn, autenticada por chave no header `X-linkdapi-apikey`.
//!
//! Este crate cobre o que o BFF usa:
//!
//! - Busca de pessoas e posts com filtros (`search`)
//! - Perfil completo, overview e posts de um membro (`profiles`)
//! - Busca de geo IDs por nome (`geo`)
//! - Catálogos de filtros (`filters`)
//!
//! # Exemplo Básico
//!
//! ```rust,ignore
//! use linkdapi::{LinkdApiClient, PeopleSearchParams};
//!
//! #[tokio::main]
//! async fn main() -> linkdapi::Result<()> {
//!     let api_key = std::env::var("LINKDAPI_API_KEY").unwrap_or_default();
//!     let client = LinkdApiClient::new(api_key)?;
//!
//!     let params = PeopleSearchParams {
//!         keyword: Some("rust".to_string()),
//!         ..Default::default()
//!     };
//!     let results = client.search_people(&params).await?;
//!     println!("{}", results);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod filters;
pub mod geo;
pub mod profiles;
pub mod search;
pub mod types;

pub use client::{LinkdApiClient, API_KEY_HEADER, DEFAULT_BASE_URL};
pub use error::{LinkdApiError, Result};
pub use search::{next_start, parse_start, PeopleSearchParams, PostsSearchParams, PAGE_SIZE};
pub use types::*;
