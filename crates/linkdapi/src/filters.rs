//! Catálogos de filtros aceitos pela busca
//!
//! Os rótulos ficam em francês porque são exibidos diretamente no front.

use serde::Serialize;

/// Opção de filtro (valor enviado à API + rótulo exibido)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> FilterOption {
    FilterOption { value, label }
}

pub const CONTENT_TYPES: &[FilterOption] = &[
    opt("", "Tous les types"),
    opt("videos", "Videos"),
    opt("photos", "Photos"),
    opt("documents", "Documents"),
    opt("jobs", "Offres d'emploi"),
    opt("liveVideos", "Lives"),
    opt("collaborativeArticles", "Articles collaboratifs"),
];

pub const DATE_POSTED: &[FilterOption] = &[
    opt("", "Toutes les dates"),
    opt("past-24h", "Dernières 24h"),
    opt("past-week", "Cette semaine"),
    opt("past-month", "Ce mois"),
    opt("past-year", "Cette année"),
];

pub const SORT_OPTIONS: &[FilterOption] = &[
    opt("relevance", "Pertinence"),
    opt("date_posted", "Date de publication"),
];

pub const PROFILE_LANGUAGES: &[FilterOption] = &[
    opt("", "Toutes les langues"),
    opt("fr", "Francais"),
    opt("en", "English"),
    opt("es", "Espanol"),
    opt("de", "Deutsch"),
    opt("it", "Italiano"),
    opt("pt", "Portugues"),
    opt("nl", "Nederlands"),
    opt("zh", "Chinese"),
    opt("ja", "Japanese"),
    opt("ko", "Korean"),
    opt("ar", "Arabic"),
];

/// O valor é aceito pelo catálogo?
pub fn is_known(catalog: &[FilterOption], value: &str) -> bool {
    catalog.iter().any(|o| o.value == value)
}
