//! Posts de um membro (`/posts/all`)

use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostedAt {
    pub timestamp: Option<i64>,
    pub full_date: Option<String>,
    pub relative_day: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    #[serde(default, deserialize_with = "null_as_default")]
    pub reaction_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reaction_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engagements {
    pub total_reactions: Option<u64>,
    pub comments_count: Option<u64>,
    pub reposts_count: Option<u64>,
    pub reactions: Option<Vec<Reaction>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaContent {
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub url: Option<String>,
}

/// Post bruto como a LinkdAPI devolve
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    pub text: Option<String>,
    pub url: Option<String>,
    pub urn: Option<String>,
    pub posted_at: Option<PostedAt>,
    pub edited: Option<bool>,
    pub engagements: Option<Engagements>,
    pub media_content: Option<Vec<MediaContent>>,
    /// Ex.: "Jane Doe reposted this"
    pub header: Option<String>,
}

/// Página de `/posts/all`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostsPage {
    pub posts: Option<Vec<RawPost>>,
    pub cursor: Option<String>,
}
