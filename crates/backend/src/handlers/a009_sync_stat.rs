use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a009_sync_stat;
use contracts::domain::a009_sync_stat::aggregate::{SyncStat, SyncStatDto};

/// GET /api/packages/:name/stats
pub async fn list_by_package(
    Path(name): Path<String>,
) -> Result<Json<Vec<SyncStat>>, axum::http::StatusCode> {
    match a009_sync_stat::service::list_by_package(&name).await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/packages/:name/stats/latest
pub async fn latest_for_package(
    Path(name): Path<String>,
) -> Result<Json<SyncStat>, axum::http::StatusCode> {
    match a009_sync_stat::service::latest_for_package(&name).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/sync-stats
pub async fn record(
    Json(dto): Json<SyncStatDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a009_sync_stat::service::record(dto).await {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(_) => Err(axum::http::StatusCode::BAD_REQUEST),
    }
}
