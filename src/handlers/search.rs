//! Busca de pessoas/posts e lookup de geo IDs
//!
//! Repasse direto da LinkdAPI: a resposta de sucesso volta sem alteração.
//! Não exigem a chave configurada; sem ela a própria LinkdAPI responde 401.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderValue},
    response::{IntoResponse, Json, Response},
};
use linkdapi::filters::{self, FilterOption};
use linkdapi::{next_start, parse_start, LinkdApiError, PeopleSearchParams, PostsSearchParams};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

use crate::utils::logging::*;
use crate::utils::{non_empty, AppError, AppResult};
use crate::AppState;

pub const QUERY_REQUIRED: &str = "Query parameter is required";
pub const LINKDAPI_REQUEST_FAILED: &str = "LinkdAPI request failed";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Header com o `start` da próxima página quando `data.hasMore` é verdadeiro
pub const NEXT_START_HEADER: &str = "x-next-start";

type RawQuery = HashMap<String, String>;

fn param(query: &RawQuery, key: &str) -> Option<String> {
    non_empty(query.get(key).map(String::as_str))
}

fn warn_unknown_filter(catalog: &[FilterOption], field: &str, value: Option<&str>) {
    if let Some(value) = value {
        if !filters::is_known(catalog, value) {
            log_warning(&format!("⚠️ Valor desconhecido para {}: '{}' (repassado mesmo assim)", field, value));
        }
    }
}

/// Não-2xx da LinkdAPI: mesmo status, corpo bruto em `details`.
/// Qualquer outra falha: 500.
fn passthrough_failure(endpoint: &'static str) -> impl FnOnce(LinkdApiError) -> AppError {
    move |e| {
        log_upstream_error("LinkdAPI", endpoint, e.upstream_status(), &e.to_string());
        match e {
            LinkdApiError::ApiError { status, body } => {
                AppError::upstream_with_details(status, LINKDAPI_REQUEST_FAILED, Value::String(body))
            }
            other => AppError::upstream_with_details(500, INTERNAL_SERVER_ERROR, Value::String(other.to_string())),
        }
    }
}

/// Resposta intacta, com `x-next-start` quando há mais resultados
fn paged_response(data: Value, start: u32) -> Response {
    let mut headers = HeaderMap::new();
    if data.pointer("/data/hasMore").and_then(Value::as_bool) == Some(true) {
        headers.insert(NEXT_START_HEADER, HeaderValue::from(next_start(start)));
    }
    (headers, Json(data)).into_response()
}

pub fn people_params(query: &RawQuery) -> PeopleSearchParams {
    PeopleSearchParams {
        keyword: param(query, "keyword"),
        start: parse_start(query.get("start").map(String::as_str)),
        current_company: param(query, "currentCompany"),
        first_name: param(query, "firstName"),
        geo_urn: param(query, "geoUrn"),
        industry: param(query, "industry"),
        last_name: param(query, "lastName"),
        profile_language: param(query, "profileLanguage"),
        past_company: param(query, "pastCompany"),
        school: param(query, "school"),
        service_category: param(query, "serviceCategory"),
        title: param(query, "title"),
    }
}

pub fn posts_params(query: &RawQuery) -> PostsSearchParams {
    PostsSearchParams {
        keyword: param(query, "keyword"),
        start: parse_start(query.get("start").map(String::as_str)),
        author_company: param(query, "authorCompany"),
        author_industry: param(query, "authorIndustry"),
        author_job_title: param(query, "authorJobTitle"),
        content_type: param(query, "contentType"),
        date_posted: param(query, "datePosted"),
        from_member: param(query, "fromMember"),
        from_organization: param(query, "fromOrganization"),
        mentions_member: param(query, "mentionsMember"),
        mentions_organization: param(query, "mentionsOrganization"),
        sort_by: param(query, "sortBy").unwrap_or_else(|| "relevance".to_string()),
    }
}

/// GET /api/linkedin/search/people
pub async fn search_people(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RawQuery>,
) -> AppResult<Response> {
    log_request_received("/api/linkedin/search/people", "GET");

    let params = people_params(&query);
    warn_unknown_filter(filters::PROFILE_LANGUAGES, "profileLanguage", params.profile_language.as_deref());

    let data = state
        .linkdapi
        .search_people(&params)
        .await
        .map_err(passthrough_failure("search/people"))?;

    Ok(paged_response(data, params.start))
}

/// GET /api/linkedin/search/posts
pub async fn search_posts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RawQuery>,
) -> AppResult<Response> {
    log_request_received("/api/linkedin/search/posts", "GET");

    let params = posts_params(&query);
    warn_unknown_filter(filters::CONTENT_TYPES, "contentType", params.content_type.as_deref());
    warn_unknown_filter(filters::DATE_POSTED, "datePosted", params.date_posted.as_deref());
    warn_unknown_filter(filters::SORT_OPTIONS, "sortBy", Some(params.sort_by.as_str()));

    let data = state
        .linkdapi
        .search_posts(&params)
        .await
        .map_err(passthrough_failure("search/posts"))?;

    Ok(paged_response(data, params.start))
}

/// GET /api/linkedin/lookup/geo?query=Paris
pub async fn lookup_geo(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RawQuery>,
) -> AppResult<Json<Value>> {
    log_request_received("/api/linkedin/lookup/geo", "GET");

    let text = param(&query, "query").ok_or_else(|| {
        log_validation_error("query", QUERY_REQUIRED);
        AppError::ValidationError(QUERY_REQUIRED.to_string())
    })?;

    let data = state
        .linkdapi
        .geo_name_lookup(&text)
        .await
        .map_err(passthrough_failure("geos/name-lookup"))?;

    log_info(&format!("🌍 {} geo IDs para '{}'", linkdapi::geo::count_geo_ids(&data), text));

    Ok(Json(data))
}

/// GET /api/linkedin/search/filters
///
/// Catálogo de filtros exibido nos selects do front.
pub async fn search_filters() -> Json<Value> {
    Json(json!({
        "contentTypes": filters::CONTENT_TYPES,
        "datePosted": filters::DATE_POSTED,
        "sortOptions": filters::SORT_OPTIONS,
        "profileLanguages": filters::PROFILE_LANGUAGES
    }))
}
