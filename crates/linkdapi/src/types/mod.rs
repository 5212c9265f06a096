//! Tipos de resposta da LinkdAPI
//!
//! Os campos espelham os nomes da API (camelCase). Quase tudo é `Option`:
//! a LinkdAPI omite ou manda `null` com frequência e um campo ausente não
//! pode derrubar a rota inteira.

mod geo;
mod people;
mod posts;
mod profile;

pub use geo::*;
pub use people::*;
pub use posts::*;
pub use profile::*;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `null` explícito vira o valor padrão do tipo, como um campo ausente
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Envelope comum a todas as respostas da LinkdAPI
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,

    pub status_code: Option<u16>,

    pub message: Option<String>,

    pub errors: Option<Value>,

    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Retorna `data` somente quando a chamada foi bem-sucedida
    pub fn into_data(self) -> Option<T> {
        if self.success {
            self.data
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failed_envelope_has_no_data() {
        let env: ApiEnvelope<Value> = serde_json::from_value(json!({
            "success": false,
            "statusCode": 404,
            "message": "not found",
            "errors": null,
            "data": { "ignored": true }
        }))
        .unwrap();

        assert_eq!(env.status_code, Some(404));
        assert!(env.into_data().is_none());
    }

    #[test]
    fn test_missing_success_defaults_to_false() {
        let env: ApiEnvelope<Value> = serde_json::from_value(json!({ "data": null })).unwrap();
        assert!(!env.success);
    }
}
