//! Reformatação do perfil LinkdAPI para o cartão de estatísticas do front
//!
//! Regras de fallback: string vazia conta como ausente (vira `null`), contadores
//! ausentes viram 0, badges ausentes viram `false`.

use linkdapi::{Certification, DateParts, Education, FullProfile, Language, PersonHit, Position, ProfileOverview, Skill};
use serde::Serialize;
use serde_json::Value;

use crate::utils::non_empty;

/// Rótulo de data de fim para posições em andamento
pub const PRESENT: &str = "Présent";

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub title: Option<String>,
    pub company: Option<String>,
    pub company_logo: Option<String>,
    pub company_url: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub employment_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: String,
    pub is_current: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub school: Option<String>,
    pub school_url: Option<String>,
    pub degree: Option<String>,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub name: Option<String>,
    pub is_assessed: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LanguageEntry {
    pub name: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CertificationEntry {
    pub name: Option<String>,
    pub authority: Option<String>,
    pub url: Option<String>,
}

/// Documento devolvido em `data` por `/api/linkedin/stats`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub urn: Option<String>,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: String,
    pub headline: Option<String>,
    pub summary: Option<String>,

    pub follower_count: u64,
    pub connections_count: u64,

    #[serde(rename = "profilePictureURL")]
    pub profile_picture_url: Option<String>,
    pub profile_pictures: Vec<Value>,
    #[serde(rename = "backgroundImageURL")]
    pub background_image_url: Option<String>,

    pub location: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,

    pub current_company: Option<String>,
    pub current_position: Option<String>,
    #[serde(rename = "companyLogoURL")]
    pub company_logo_url: Option<String>,

    pub is_premium: bool,
    pub is_creator: bool,
    pub is_influencer: bool,
    pub is_top_voice: bool,

    pub experiences: Vec<Experience>,
    pub experience_count: usize,
    pub education: Vec<EducationEntry>,
    pub education_count: usize,
    pub skills: Vec<SkillEntry>,
    pub skills_count: usize,
    pub languages: Vec<LanguageEntry>,
    pub languages_count: usize,
    pub certifications: Vec<CertificationEntry>,
    pub certifications_count: usize,

    pub has_projects: bool,
    pub has_publications: bool,
    pub has_volunteering: bool,
    pub has_courses: bool,
}

fn month_year(date: &DateParts) -> String {
    format!("{}/{}", date.month, date.year)
}

pub fn format_experience(pos: Position) -> Experience {
    let is_current = pos.end.map_or(true, |end| end.year == 0);
    let end_date = match pos.end {
        Some(end) if end.year > 0 => month_year(&end),
        _ => PRESENT.to_string(),
    };

    Experience {
        title: pos.title,
        company: pos.company_name,
        company_logo: non_empty(pos.company_logo.as_deref()),
        company_url: non_empty(pos.company_url.as_deref()),
        industry: non_empty(pos.company_industry.as_deref()),
        location: non_empty(pos.location.as_deref()),
        description: non_empty(pos.description.as_deref()),
        employment_type: non_empty(pos.employment_type.as_deref()),
        start_date: pos.start.as_ref().map(month_year),
        end_date,
        is_current,
    }
}

fn format_education(edu: Education) -> EducationEntry {
    EducationEntry {
        school: edu.university,
        school_url: non_empty(edu.university_link.as_deref()),
        degree: edu.degree,
        duration: edu.duration,
    }
}

fn format_skill(skill: Skill) -> SkillEntry {
    SkillEntry {
        name: skill.name,
        is_assessed: skill.passed_skill_assessment.unwrap_or(false),
    }
}

/// `NATIVE_OR_BILINGUAL` -> `native or bilingual`
pub fn format_language(lang: Language) -> LanguageEntry {
    let level = non_empty(lang.proficiency.as_deref()).map(|p| p.replace('_', " ").to_lowercase());
    LanguageEntry { name: lang.name, level }
}

fn format_certification(cert: Certification) -> CertificationEntry {
    CertificationEntry {
        name: cert.name,
        authority: non_empty(cert.authority.as_deref()),
        url: non_empty(cert.url.as_deref()),
    }
}

fn has_entries(list: &Option<Vec<Value>>) -> bool {
    list.as_ref().map_or(false, |l| !l.is_empty())
}

/// Monta as estatísticas a partir do resultado da busca, do perfil completo
/// e (se disponível) do overview
pub fn build_profile_stats(
    hit: &PersonHit,
    username: &str,
    profile: FullProfile,
    overview: Option<ProfileOverview>,
) -> ProfileStats {
    let experiences: Vec<Experience> = profile
        .full_positions
        .or(profile.position)
        .unwrap_or_default()
        .into_iter()
        .map(format_experience)
        .collect();

    let education: Vec<EducationEntry> = profile
        .educations
        .unwrap_or_default()
        .into_iter()
        .map(format_education)
        .collect();

    let skills: Vec<SkillEntry> = profile.skills.unwrap_or_default().into_iter().map(format_skill).collect();

    let languages: Vec<LanguageEntry> = profile
        .languages
        .unwrap_or_default()
        .into_iter()
        .map(format_language)
        .collect();

    let certifications: Vec<CertificationEntry> = profile
        .certifications
        .unwrap_or_default()
        .into_iter()
        .map(format_certification)
        .collect();

    let geo = profile.geo.unwrap_or_default();
    let overview = overview.unwrap_or_default();
    let current = experiences.iter().find(|e| e.is_current);

    let full_name = format!(
        "{} {}",
        profile.first_name.as_deref().unwrap_or_default(),
        profile.last_name.as_deref().unwrap_or_default()
    );

    let background_image_url = profile
        .background_image
        .as_ref()
        .and_then(|images| images.first())
        .and_then(|img| non_empty(img.url.as_deref()));

    ProfileStats {
        urn: non_empty(profile.urn.as_deref()).or_else(|| hit.urn.clone()),
        username: non_empty(profile.username.as_deref()).unwrap_or_else(|| username.to_string()),
        first_name: profile.first_name,
        last_name: profile.last_name,
        full_name,
        headline: profile.headline,
        summary: non_empty(profile.summary.as_deref()),

        follower_count: overview.follower_count.unwrap_or(0),
        connections_count: overview.connections_count.unwrap_or(0),

        profile_picture_url: non_empty(profile.profile_picture.as_deref()),
        profile_pictures: profile.profile_pictures.unwrap_or_default(),
        background_image_url,

        location: non_empty(geo.full.as_deref()),
        city: non_empty(geo.city.as_deref()),
        country: non_empty(geo.country.as_deref()),
        country_code: non_empty(geo.country_code.as_deref()),

        current_company: current.and_then(|e| non_empty(e.company.as_deref())),
        current_position: current.and_then(|e| non_empty(e.title.as_deref())),
        company_logo_url: current.and_then(|e| e.company_logo.clone()),

        is_premium: profile.is_premium.unwrap_or(false),
        is_creator: profile.is_creator.unwrap_or(false),
        is_influencer: profile.is_influencer.unwrap_or(false),
        is_top_voice: profile.is_top_voice.unwrap_or(false),

        experience_count: experiences.len(),
        experiences,
        education_count: education.len(),
        education,
        skills_count: skills.len(),
        skills,
        languages_count: languages.len(),
        languages,
        certifications_count: certifications.len(),
        certifications,

        has_projects: profile
            .projects
            .as_ref()
            .and_then(|p| p.as_object())
            .map_or(false, |p| !p.is_empty()),
        has_publications: has_entries(&profile.publications),
        has_volunteering: has_entries(&profile.volunteering),
        has_courses: has_entries(&profile.courses),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile_from(value: Value) -> FullProfile {
        serde_json::from_value(value).unwrap()
    }

    fn hit() -> PersonHit {
        PersonHit {
            urn: Some("ACoAAA".to_string()),
            url: Some("https://www.linkedin.com/in/jane-doe/".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_experience_dates() {
        let current = format_experience(Position {
            start: Some(DateParts { year: 2021, month: 4, day: 0 }),
            end: Some(DateParts::default()),
            ..Default::default()
        });
        assert_eq!(current.start_date.as_deref(), Some("4/2021"));
        assert_eq!(current.end_date, PRESENT);
        assert!(current.is_current);

        let past = format_experience(Position {
            end: Some(DateParts { year: 2020, month: 12, day: 1 }),
            ..Default::default()
        });
        assert_eq!(past.start_date, None);
        assert_eq!(past.end_date, "12/2020");
        assert!(!past.is_current);

        let open_ended = format_experience(Position::default());
        assert!(open_ended.is_current);
    }

    #[test]
    fn test_language_level() {
        let entry = format_language(Language {
            name: Some("Français".to_string()),
            proficiency: Some("NATIVE_OR_BILINGUAL".to_string()),
        });
        assert_eq!(entry.level.as_deref(), Some("native or bilingual"));

        let empty = format_language(Language { name: None, proficiency: Some(String::new()) });
        assert_eq!(empty.level, None);
    }

    #[test]
    fn test_full_positions_win_over_position() {
        let profile = profile_from(json!({
            "fullPositions": [],
            "position": [{ "title": "Ignored" }]
        }));

        let stats = build_profile_stats(&hit(), "jane-doe", profile, None);
        assert!(stats.experiences.is_empty());
        assert_eq!(stats.current_company, None);
    }

    #[test]
    fn test_build_profile_stats() {
        let profile = profile_from(json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "headline": "CTO @ Acme",
            "summary": "",
            "profilePicture": "https://img/jane.png",
            "backgroundImage": [{ "url": "https://img/bg.png" }],
            "geo": { "country": "France", "city": "Paris", "full": "Paris, Île-de-France, France", "countryCode": "fr" },
            "position": [
                {
                    "title": "Engineer", "companyName": "Old Corp", "companyLogo": "",
                    "start": { "year": 2015, "month": 1 }, "end": { "year": 2019, "month": 6 }
                },
                {
                    "title": "CTO", "companyName": "Acme", "companyLogo": "https://img/acme.png",
                    "start": { "year": 2019, "month": 7 }, "end": { "year": 0, "month": 0 }
                }
            ],
            "educations": [{ "university": "Sorbonne", "universityLink": "", "degree": "MSc", "duration": "2010 - 2015" }],
            "skills": [{ "name": "Rust", "passedSkillAssessment": true }, { "name": "Go" }],
            "certifications": [{ "name": "CKA", "authority": "CNCF", "url": "" }],
            "isPremium": true,
            "projects": {},
            "publications": [{ "title": "Paper" }]
        }));
        let overview = ProfileOverview {
            follower_count: Some(1200),
            connections_count: Some(500),
        };

        let stats = build_profile_stats(&hit(), "jane-doe", profile, Some(overview));

        assert_eq!(stats.urn.as_deref(), Some("ACoAAA"));
        assert_eq!(stats.username, "jane-doe");
        assert_eq!(stats.full_name, "Jane Doe");
        assert_eq!(stats.summary, None);
        assert_eq!(stats.follower_count, 1200);
        assert_eq!(stats.background_image_url.as_deref(), Some("https://img/bg.png"));
        assert_eq!(stats.location.as_deref(), Some("Paris, Île-de-France, France"));
        assert_eq!(stats.current_company.as_deref(), Some("Acme"));
        assert_eq!(stats.current_position.as_deref(), Some("CTO"));
        assert_eq!(stats.company_logo_url.as_deref(), Some("https://img/acme.png"));
        assert_eq!(stats.experience_count, 2);
        assert_eq!(stats.experiences[0].company_logo, None);
        assert_eq!(stats.education[0].school_url, None);
        assert!(stats.skills[0].is_assessed);
        assert!(!stats.skills[1].is_assessed);
        assert_eq!(stats.certifications[0].url, None);
        assert!(stats.is_premium);
        assert!(!stats.is_top_voice);
        assert!(!stats.has_projects);
        assert!(stats.has_publications);
        assert!(!stats.has_courses);
    }

    #[test]
    fn test_full_name_keeps_separator() {
        let profile = FullProfile { first_name: Some("Jane".to_string()), ..Default::default() };
        let stats = build_profile_stats(&hit(), "jane-doe", profile, None);
        assert_eq!(stats.full_name, "Jane ");

        let stats = build_profile_stats(&hit(), "jane-doe", FullProfile::default(), None);
        assert_eq!(stats.full_name, " ");
    }

    #[test]
    fn test_serialized_field_names() {
        let stats = build_profile_stats(&hit(), "jane-doe", FullProfile::default(), None);
        let value = serde_json::to_value(&stats).unwrap();

        assert!(value.get("profilePictureURL").is_some());
        assert!(value.get("backgroundImageURL").is_some());
        assert!(value.get("companyLogoURL").is_some());
        assert_eq!(value["followerCount"], 0);
        assert_eq!(value["experienceCount"], 0);
    }
}
