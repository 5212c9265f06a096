//! Busca de geo IDs por nome

use crate::client::LinkdApiClient;
use crate::error::Result;
use crate::types::{ApiEnvelope, GeoLookup};
use serde_json::Value;

impl LinkdApiClient {
    /// `GET /geos/name-lookup?query=` em modo passthrough
    pub async fn geo_name_lookup(&self, query: &str) -> Result<Value> {
        self.get_passthrough("/geos/name-lookup", &[("query", query.to_string())])
            .await
    }
}

/// Quantidade de geo IDs numa resposta de `/geos/name-lookup` (0 se o formato não bater)
pub fn count_geo_ids(response: &Value) -> usize {
    serde_json::from_value::<ApiEnvelope<GeoLookup>>(response.clone())
        .ok()
        .and_then(|env| env.data)
        .and_then(|data| data.geo_ids)
        .map(|ids| ids.len())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_geo_lookup_encodes_query() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/geos/name-lookup")
                    .query_param("query", "São Paulo");
                then.status(200).json_body(json!({
                    "success": true,
                    "data": {
                        "geoIds": [
                            { "id": "104746682", "type": "GEO", "displayName": "São Paulo, Brazil" },
                            { "id": "106057199", "type": "GEO", "displayName": "Brazil" }
                        ],
                        "query": "São Paulo"
                    }
                }));
            })
            .await;

        let client = LinkdApiClient::with_base_url("k", server.base_url(), 5).unwrap();
        let value = client.geo_name_lookup("São Paulo").await.unwrap();

        mock.assert_async().await;
        assert_eq!(count_geo_ids(&value), 2);
    }

    #[test]
    fn test_count_geo_ids_on_unexpected_shape() {
        assert_eq!(count_geo_ids(&json!({ "whatever": 1 })), 0);
    }
}
