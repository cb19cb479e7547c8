use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a001_language;
use contracts::domain::a001_language::aggregate::{Language, LanguageDto};

/// GET /api/languages
pub async fn list_all() -> Result<Json<Vec<Language>>, axum::http::StatusCode> {
    match a001_language::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/languages/enabled
pub async fn list_enabled() -> Result<Json<Vec<Language>>, axum::http::StatusCode> {
    match a001_language::service::list_enabled().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/languages/:locale
pub async fn get_by_locale(
    Path(locale): Path<String>,
) -> Result<Json<Language>, axum::http::StatusCode> {
    match a001_language::service::get_by_locale(&locale).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/languages
pub async fn upsert(
    Json(dto): Json<LanguageDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let exists = a001_language::service::get_by_locale(&dto.locale_id)
        .await
        .map_err(|_| axum::http::StatusCode::INTERNAL_SERVER_ERROR)?
        .is_some();
    let result = if exists {
        a001_language::service::update(dto.clone())
            .await
            .map(|_| dto.locale_id.clone())
    } else {
        a001_language::service::create(dto).await
    };
    match result {
        Ok(locale) => Ok(Json(json!({"locale_id": locale}))),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// DELETE /api/languages/:locale
pub async fn delete(Path(locale): Path<String>) -> Result<(), axum::http::StatusCode> {
    match a001_language::service::delete(&locale).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
