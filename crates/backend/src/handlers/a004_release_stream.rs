use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a004_release_stream;
use contracts::domain::a004_release_stream::aggregate::{ReleaseStream, ReleaseStreamDto};

/// GET /api/streams
pub async fn list_all() -> Result<Json<Vec<ReleaseStream>>, axum::http::StatusCode> {
    match a004_release_stream::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/streams/:slug
pub async fn get_by_slug(
    Path(slug): Path<String>,
) -> Result<Json<ReleaseStream>, axum::http::StatusCode> {
    match a004_release_stream::service::get_by_slug(&slug).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/streams
pub async fn upsert(
    Json(dto): Json<ReleaseStreamDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let result = if dto.id.is_some() {
        a004_release_stream::service::update(dto.clone())
            .await
            .map(|_| dto.id.unwrap_or_default())
    } else {
        a004_release_stream::service::create(dto).await
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/streams/:slug/built-tags
pub async fn update_built_tags(
    Path(slug): Path<String>,
    Json(tags): Json<Vec<String>>,
) -> Result<axum::http::StatusCode, axum::http::StatusCode> {
    match a004_release_stream::service::update_built_tags(&slug, tags).await {
        Ok(()) => Ok(axum::http::StatusCode::OK),
        Err(_) => Err(axum::http::StatusCode::NOT_FOUND),
    }
}

/// DELETE /api/streams/:id
pub async fn delete(Path(id): Path<i32>) -> Result<(), axum::http::StatusCode> {
    match a004_release_stream::service::delete(id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
