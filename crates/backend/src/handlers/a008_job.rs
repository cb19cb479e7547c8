use axum::{extract::Path, Json};
use serde::Deserialize;
use serde_json::json;

use crate::domain::a008_job;
use contracts::domain::a008_job::aggregate::{Job, JobDto};

/// GET /api/jobs
pub async fn list_visible() -> Result<Json<Vec<Job>>, axum::http::StatusCode> {
    match a008_job::service::list_visible().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/jobs/:uuid
pub async fn get_by_uuid(Path(id): Path<String>) -> Result<Json<Job>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a008_job::service::get_by_uuid(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/jobs
pub async fn start(
    Json(dto): Json<JobDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a008_job::service::start(dto).await {
        Ok(uuid) => Ok(Json(json!({"job_uuid": uuid.to_string()}))),
        Err(e) => {
            tracing::error!("Failed to start job: {}", e);
            Err(axum::http::StatusCode::BAD_REQUEST)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FinishJobRequest {
    pub result: bool,
    pub output_json: Option<serde_json::Value>,
}

/// POST /api/jobs/:uuid/finish
pub async fn finish(
    Path(id): Path<String>,
    Json(request): Json<FinishJobRequest>,
) -> Result<axum::http::StatusCode, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a008_job::service::finish(uuid, request.result, request.output_json).await {
        Ok(()) => Ok(axum::http::StatusCode::OK),
        Err(_) => Err(axum::http::StatusCode::NOT_FOUND),
    }
}
