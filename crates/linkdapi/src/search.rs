//! Busca de pessoas e posts (`/search/people`, `/search/posts`)
//!
//! Os parâmetros são repassados à LinkdAPI na ordem de declaração, e só os
//! que têm valor. Paginação é por offset: o front incrementa `start` pelo
//! tamanho da página ([`PAGE_SIZE`]) e chama de novo.

use crate::client::LinkdApiClient;
use crate::error::Result;
use crate::types::{ApiEnvelope, PeoplePage};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tamanho de página usado pela LinkdAPI nas buscas
pub const PAGE_SIZE: u32 = 10;

/// Lê `start` como o front manda: ausente ou inválido vira 0
pub fn parse_start(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok()).unwrap_or(0)
}

/// Offset da próxima página
pub fn next_start(current: u32) -> u32 {
    current.saturating_add(PAGE_SIZE)
}

fn push_if_present(query: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(v) = value {
        if !v.is_empty() {
            query.push((key, v.clone()));
        }
    }
}

/// Filtros de `/search/people`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeopleSearchParams {
    pub keyword: Option<String>,
    #[serde(default)]
    pub start: u32,
    pub current_company: Option<String>,
    pub first_name: Option<String>,
    pub geo_urn: Option<String>,
    pub industry: Option<String>,
    pub last_name: Option<String>,
    pub profile_language: Option<String>,
    pub past_company: Option<String>,
    pub school: Option<String>,
    pub service_category: Option<String>,
    pub title: Option<String>,
}

impl PeopleSearchParams {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_if_present(&mut query, "keyword", &self.keyword);
        query.push(("start", self.start.to_string()));
        push_if_present(&mut query, "currentCompany", &self.current_company);
        push_if_present(&mut query, "firstName", &self.first_name);
        push_if_present(&mut query, "geoUrn", &self.geo_urn);
        push_if_present(&mut query, "industry", &self.industry);
        push_if_present(&mut query, "lastName", &self.last_name);
        push_if_present(&mut query, "profileLanguage", &self.profile_language);
        push_if_present(&mut query, "pastCompany", &self.past_company);
        push_if_present(&mut query, "school", &self.school);
        push_if_present(&mut query, "serviceCategory", &self.service_category);
        push_if_present(&mut query, "title", &self.title);
        query
    }
}

/// Filtros de `/search/posts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsSearchParams {
    pub keyword: Option<String>,
    #[serde(default)]
    pub start: u32,
    pub author_company: Option<String>,
    pub author_industry: Option<String>,
    pub author_job_title: Option<String>,
    /// videos | photos | jobs | liveVideos | documents | collaborativeArticles
    pub content_type: Option<String>,
    /// past-24h | past-week | past-month | past-year
    pub date_posted: Option<String>,
    pub from_member: Option<String>,
    pub from_organization: Option<String>,
    pub mentions_member: Option<String>,
    pub mentions_organization: Option<String>,
    /// relevance | date_posted
    pub sort_by: String,
}

impl Default for PostsSearchParams {
    fn default() -> Self {
        Self {
            keyword: None,
            start: 0,
            author_company: None,
            author_industry: None,
            author_job_title: None,
            content_type: None,
            date_posted: None,
            from_member: None,
            from_organization: None,
            mentions_member: None,
            mentions_organization: None,
            sort_by: "relevance".to_string(),
        }
    }
}

impl PostsSearchParams {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_if_present(&mut query, "keyword", &self.keyword);
        query.push(("start", self.start.to_string()));
        push_if_present(&mut query, "authorCompany", &self.author_company);
        push_if_present(&mut query, "authorIndustry", &self.author_industry);
        push_if_present(&mut query, "authorJobTitle", &self.author_job_title);
        push_if_present(&mut query, "contentType", &self.content_type);
        push_if_present(&mut query, "datePosted", &self.date_posted);
        push_if_present(&mut query, "fromMember", &self.from_member);
        push_if_present(&mut query, "fromOrganization", &self.from_organization);
        push_if_present(&mut query, "mentionsMember", &self.mentions_member);
        push_if_present(&mut query, "mentionsOrganization", &self.mentions_organization);
        if !self.sort_by.is_empty() {
            query.push(("sortBy", self.sort_by.clone()));
        }
        query
    }
}

impl LinkdApiClient {
    /// `GET /search/people` em modo passthrough
    pub async fn search_people(&self, params: &PeopleSearchParams) -> Result<Value> {
        self.get_passthrough("/search/people", &params.to_query()).await
    }

    /// `GET /search/posts` em modo passthrough
    pub async fn search_posts(&self, params: &PostsSearchParams) -> Result<Value> {
        self.get_passthrough("/search/posts", &params.to_query()).await
    }

    /// `GET /search/people?keyword=` lido como envelope tipado
    ///
    /// Usado para achar o perfil de alguém pelo nome.
    pub async fn find_people(&self, keyword: &str) -> Result<ApiEnvelope<PeoplePage>> {
        self.get_envelope("/search/people", &[("keyword", keyword.to_string())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_parse_start() {
        assert_eq!(parse_start(None), 0);
        assert_eq!(parse_start(Some("20")), 20);
        assert_eq!(parse_start(Some("abc")), 0);
        assert_eq!(parse_start(Some("-10")), 0);
        assert_eq!(next_start(20), 30);
    }

    #[test]
    fn test_people_query_skips_empty_values() {
        let params = PeopleSearchParams {
            keyword: Some("rust".to_string()),
            start: 10,
            first_name: Some(String::new()),
            geo_urn: Some("105015875".to_string()),
            ..Default::default()
        };

        assert_eq!(
            params.to_query(),
            vec![
                ("keyword", "rust".to_string()),
                ("start", "10".to_string()),
                ("geoUrn", "105015875".to_string()),
            ]
        );
    }

    #[test]
    fn test_posts_query_defaults_to_relevance() {
        let params = PostsSearchParams {
            keyword: Some("ai".to_string()),
            date_posted: Some("past-week".to_string()),
            ..Default::default()
        };

        assert_eq!(
            params.to_query(),
            vec![
                ("keyword", "ai".to_string()),
                ("start", "0".to_string()),
                ("datePosted", "past-week".to_string()),
                ("sortBy", "relevance".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_find_people_reads_envelope_on_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/search/people")
                    .query_param("keyword", "Jane Doe");
                then.status(404).json_body(json!({
                    "success": false,
                    "statusCode": 404,
                    "message": "No results",
                    "errors": null,
                    "data": null
                }));
            })
            .await;

        let client = LinkdApiClient::with_base_url("k", server.base_url(), 5).unwrap();
        let envelope = client.find_people("Jane Doe").await.unwrap();

        assert!(!envelope.success);
        assert!(envelope.into_data().is_none());
    }

    #[tokio::test]
    async fn test_search_posts_forwards_filters() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/search/posts")
                    .query_param("keyword", "rust")
                    .query_param("start", "10")
                    .query_param("sortBy", "date_posted");
                then.status(200).json_body(json!({ "success": true, "data": { "posts": [] } }));
            })
            .await;

        let client = LinkdApiClient::with_base_url("k", server.base_url(), 5).unwrap();
        let params = PostsSearchParams {
            keyword: Some("rust".to_string()),
            start: 10,
            sort_by: "date_posted".to_string(),
            ..Default::default()
        };
        let value = client.search_posts(&params).await.unwrap();

        mock.assert_async().await;
        assert_eq!(value["success"], true);
    }
}
