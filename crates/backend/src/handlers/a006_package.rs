use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a006_package;
use contracts::domain::a006_package::aggregate::{Package, PackageDto};

/// GET /api/packages
pub async fn list_all() -> Result<Json<Vec<Package>>, axum::http::StatusCode> {
    match a006_package::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/packages/:name
pub async fn get_by_name(
    Path(name): Path<String>,
) -> Result<Json<Package>, axum::http::StatusCode> {
    match a006_package::service::get_by_name(&name).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/platforms/:slug/packages
pub async fn list_by_platform(
    Path(slug): Path<String>,
) -> Result<Json<Vec<Package>>, axum::http::StatusCode> {
    match a006_package::service::list_by_platform(&slug).await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/packages
pub async fn upsert(
    Json(dto): Json<PackageDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let result = if dto.id.is_some() {
        a006_package::service::update(dto.clone())
            .await
            .map(|_| dto.id.unwrap_or_default())
    } else {
        a006_package::service::create(dto).await
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => {
            tracing::error!("Failed to save package: {}", e);
            Err(axum::http::StatusCode::BAD_REQUEST)
        }
    }
}

/// POST /api/packages/:name/details
pub async fn update_details(
    Path(name): Path<String>,
    Json(details): Json<serde_json::Value>,
) -> Result<axum::http::StatusCode, axum::http::StatusCode> {
    match a006_package::service::update_details(&name, details).await {
        Ok(()) => Ok(axum::http::StatusCode::OK),
        Err(_) => Err(axum::http::StatusCode::NOT_FOUND),
    }
}

/// POST /api/packages/:name/stats-diff
pub async fn update_stats_diff(
    Path(name): Path<String>,
    Json(diff): Json<serde_json::Value>,
) -> Result<axum::http::StatusCode, axum::http::StatusCode> {
    match a006_package::service::update_stats_diff(&name, diff).await {
        Ok(()) => Ok(axum::http::StatusCode::OK),
        Err(_) => Err(axum::http::StatusCode::NOT_FOUND),
    }
}

/// DELETE /api/packages/:id
pub async fn delete(Path(id): Path<i32>) -> Result<(), axum::http::StatusCode> {
    match a006_package::service::delete(id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
