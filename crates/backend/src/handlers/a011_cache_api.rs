use axum::{extract::Query, Json};
use serde::Deserialize;
use serde_json::json;

use crate::domain::a011_cache_api;
use contracts::domain::a011_cache_api::aggregate::{CachedResponse, CachedResponseDto};

#[derive(Debug, Deserialize)]
pub struct CacheLookup {
    pub base_url: String,
    pub resource: String,
}

/// GET /api/cache?base_url=...&resource=...
pub async fn fetch(
    Query(lookup): Query<CacheLookup>,
) -> Result<Json<CachedResponse>, axum::http::StatusCode> {
    match a011_cache_api::service::fetch(&lookup.base_url, &lookup.resource).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/cache
pub async fn store(
    Json(dto): Json<CachedResponseDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a011_cache_api::service::store(dto).await {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(_) => Err(axum::http::StatusCode::BAD_REQUEST),
    }
}
