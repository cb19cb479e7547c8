use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a002_language_set;
use contracts::domain::a002_language_set::aggregate::{LanguageSet, LanguageSetDto};

/// GET /api/langsets
pub async fn list_all() -> Result<Json<Vec<LanguageSet>>, axum::http::StatusCode> {
    match a002_language_set::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/langsets/:slug
pub async fn get_by_slug(
    Path(slug): Path<String>,
) -> Result<Json<LanguageSet>, axum::http::StatusCode> {
    match a002_language_set::service::get_by_slug(&slug).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/langsets
pub async fn upsert(
    Json(dto): Json<LanguageSetDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let result = if dto.id.is_some() {
        a002_language_set::service::update(dto.clone())
            .await
            .map(|_| dto.id.unwrap_or_default())
    } else {
        a002_language_set::service::create(dto).await
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// DELETE /api/langsets/:id
pub async fn delete(Path(id): Path<i32>) -> Result<(), axum::http::StatusCode> {
    match a002_language_set::service::delete(id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
