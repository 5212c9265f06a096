//! Perfil completo (`/profile/full`) e overview (`/profile/overview`)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::null_as_default;

/// Data parcial usada em posições (ano 0 = sem data; `null` conta como 0)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub month: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub day: i32,
}

/// Experiência profissional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub company_id: Option<u64>,
    pub company_name: Option<String>,
    pub company_username: Option<String>,
    #[serde(rename = "companyURL")]
    pub company_url: Option<String>,
    pub company_logo: Option<String>,
    pub company_industry: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub employment_type: Option<String>,
    pub start: Option<DateParts>,
    pub end: Option<DateParts>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub university: Option<String>,
    pub university_link: Option<String>,
    pub degree: Option<String>,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: Option<String>,
    pub passed_skill_assessment: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Language {
    pub name: Option<String>,
    /// Ex.: `NATIVE_OR_BILINGUAL`
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Certification {
    pub name: Option<String>,
    pub authority: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geo {
    pub country: Option<String>,
    pub city: Option<String>,
    pub full: Option<String>,
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: Option<String>,
}

/// Perfil completo de `/profile/full`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullProfile {
    pub urn: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub headline: Option<String>,
    pub summary: Option<String>,

    pub profile_picture: Option<String>,
    pub profile_pictures: Option<Vec<Value>>,
    pub background_image: Option<Vec<ImageRef>>,

    pub geo: Option<Geo>,

    pub full_positions: Option<Vec<Position>>,
    pub position: Option<Vec<Position>>,
    pub educations: Option<Vec<Education>>,
    pub skills: Option<Vec<Skill>>,
    pub languages: Option<Vec<Language>>,
    pub certifications: Option<Vec<Certification>>,

    pub is_premium: Option<bool>,
    pub is_creator: Option<bool>,
    pub is_influencer: Option<bool>,
    pub is_top_voice: Option<bool>,

    /// Objeto indexado, não lista
    pub projects: Option<Value>,
    pub publications: Option<Vec<Value>>,
    pub volunteering: Option<Vec<Value>>,
    pub courses: Option<Vec<Value>>,
}

/// Overview de `/profile/overview` (números de audiência mais precisos)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOverview {
    pub follower_count: Option<u64>,
    pub connections_count: Option<u64>,
}
