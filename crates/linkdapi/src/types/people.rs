//! Resultados de busca de pessoas

use serde::{Deserialize, Serialize};

/// Uma pessoa retornada por `/search/people`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonHit {
    pub urn: Option<String>,

    #[serde(rename = "profileID")]
    pub profile_id: Option<String>,

    /// URL pública do perfil (`https://www.linkedin.com/in/<username>/`)
    pub url: Option<String>,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,

    #[serde(rename = "profilePictureURL")]
    pub profile_picture_url: Option<String>,

    pub premium: Option<bool>,
}

impl PersonHit {
    /// Username do perfil: o trecho após `/in/`, sem a primeira `/`
    ///
    /// Retorna `None` quando a URL não tem `/in/` ou o trecho fica vazio.
    pub fn username(&self) -> Option<String> {
        let url = self.url.as_deref()?;
        let (_, after) = url.split_once("/in/")?;
        let segment = after.split("/in/").next().unwrap_or(after);
        let username = segment.replacen('/', "", 1);

        if username.is_empty() {
            None
        } else {
            Some(username)
        }
    }
}

/// Página de resultados de `/search/people`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeoplePage {
    pub people: Option<Vec<PersonHit>>,
    pub total: Option<u64>,
    pub start: Option<u64>,
    pub count: Option<u64>,
    pub has_more: Option<bool>,
}

impl PeoplePage {
    /// Primeiro resultado, se houver
    pub fn first(&self) -> Option<&PersonHit> {
        self.people.as_ref().and_then(|p| p.first())
    }
}
