//! Perfis e atividade de um membro

use crate::client::LinkdApiClient;
use crate::error::Result;
use crate::types::{ApiEnvelope, FullProfile, PostsPage, ProfileOverview};

impl LinkdApiClient {
    /// `GET /profile/full?username=&urn=`
    pub async fn profile_full(&self, username: &str, urn: &str) -> Result<ApiEnvelope<FullProfile>> {
        self.get_envelope(
            "/profile/full",
            &[("username", username.to_string()), ("urn", urn.to_string())],
        )
        .await
    }

    /// `GET /profile/overview?username=`
    pub async fn profile_overview(&self, username: &str) -> Result<ApiEnvelope<ProfileOverview>> {
        self.get_envelope("/profile/overview", &[("username", username.to_string())])
            .await
    }

    /// `GET /posts/all?urn=&cursor=&start=0` (primeira página)
    pub async fn all_posts(&self, urn: &str) -> Result<ApiEnvelope<PostsPage>> {
        self.get_envelope(
            "/posts/all",
            &[
                ("urn", urn.to_string()),
                ("cursor", String::new()),
                ("start", "0".to_string()),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_profile_full_sends_username_and_urn() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/profile/full")
                    .query_param("username", "jane-doe")
                    .query_param("urn", "ACoAAA");
                then.status(200).json_body(json!({
                    "success": true,
                    "data": { "firstName": "Jane", "lastName": "Doe" }
                }));
            })
            .await;

        let client = LinkdApiClient::with_base_url("k", server.base_url(), 5).unwrap();
        let profile = client
            .profile_full("jane-doe", "ACoAAA")
            .await
            .unwrap()
            .into_data()
            .unwrap();

        mock.assert_async().await;
        assert_eq!(profile.first_name.as_deref(), Some("Jane"));
    }

    #[tokio::test]
    async fn test_all_posts_requests_first_page() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/posts/all")
                    .query_param("urn", "ACoAAA")
                    .query_param("start", "0");
                then.status(200).json_body(json!({ "success": true, "data": { "posts": [] } }));
            })
            .await;

        let client = LinkdApiClient::with_base_url("k", server.base_url(), 5).unwrap();
        let page = client.all_posts("ACoAAA").await.unwrap();

        mock.assert_async().await;
        assert!(page.success);
    }
}
