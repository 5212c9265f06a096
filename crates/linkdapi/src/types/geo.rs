//! Busca de entidades geográficas (`/geos/name-lookup`)

use serde::{Deserialize, Serialize};

/// Um geo ID (cidade, região, país) utilizável no filtro `geoUrn`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoResult {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub geo_type: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLookup {
    pub geo_ids: Option<Vec<GeoResult>>,
    pub query: Option<String>,
}
