use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a005_release_branch;
use contracts::domain::a005_release_branch::aggregate::{ReleaseBranch, ReleaseBranchDto};

/// GET /api/branches
pub async fn list_all() -> Result<Json<Vec<ReleaseBranch>>, axum::http::StatusCode> {
    match a005_release_branch::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/streams/:slug/branches
pub async fn list_by_stream(
    Path(slug): Path<String>,
) -> Result<Json<Vec<ReleaseBranch>>, axum::http::StatusCode> {
    match a005_release_branch::service::list_by_stream(&slug).await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/branches/:slug
pub async fn get_by_slug(
    Path(slug): Path<String>,
) -> Result<Json<ReleaseBranch>, axum::http::StatusCode> {
    match a005_release_branch::service::get_by_slug(&slug).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/branches
pub async fn upsert(
    Json(dto): Json<ReleaseBranchDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let result = if dto.id.is_some() {
        a005_release_branch::service::update(dto.clone())
            .await
            .map(|_| dto.id.unwrap_or_default())
    } else {
        a005_release_branch::service::create(dto).await
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// DELETE /api/branches/:id
pub async fn delete(Path(id): Path<i32>) -> Result<(), axum::http::StatusCode> {
    match a005_release_branch::service::delete(id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
