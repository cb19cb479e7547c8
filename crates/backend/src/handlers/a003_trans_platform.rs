use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a003_trans_platform;
use contracts::domain::a003_trans_platform::aggregate::{TransPlatform, TransPlatformDto};

/// GET /api/platforms
pub async fn list_all() -> Result<Json<Vec<TransPlatform>>, axum::http::StatusCode> {
    match a003_trans_platform::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/platforms/:slug
pub async fn get_by_slug(
    Path(slug): Path<String>,
) -> Result<Json<TransPlatform>, axum::http::StatusCode> {
    match a003_trans_platform::service::get_by_slug(&slug).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/platforms
pub async fn upsert(
    Json(dto): Json<TransPlatformDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let result = if dto.id.is_some() {
        a003_trans_platform::service::update(dto.clone())
            .await
            .map(|_| dto.id.unwrap_or_default())
    } else {
        a003_trans_platform::service::create(dto).await
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/platforms/:slug/projects
pub async fn update_projects(
    Path(slug): Path<String>,
    Json(projects): Json<serde_json::Value>,
) -> Result<axum::http::StatusCode, axum::http::StatusCode> {
    match a003_trans_platform::service::update_projects(&slug, projects).await {
        Ok(()) => Ok(axum::http::StatusCode::OK),
        Err(_) => Err(axum::http::StatusCode::NOT_FOUND),
    }
}

/// DELETE /api/platforms/:id
pub async fn delete(Path(id): Path<i32>) -> Result<(), axum::http::StatusCode> {
    match a003_trans_platform::service::delete(id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
