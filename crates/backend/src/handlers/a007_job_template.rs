use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a007_job_template;
use contracts::domain::a007_job_template::aggregate::{JobTemplate, JobTemplateDto};

/// GET /api/job-templates
pub async fn list_all() -> Result<Json<Vec<JobTemplate>>, axum::http::StatusCode> {
    match a007_job_template::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/job-templates/:type
pub async fn get_by_type(
    Path(template_type): Path<String>,
) -> Result<Json<JobTemplate>, axum::http::StatusCode> {
    match a007_job_template::service::get_by_type(&template_type).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/job-templates
pub async fn upsert(
    Json(dto): Json<JobTemplateDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let result = if dto.id.is_some() {
        a007_job_template::service::update(dto.clone())
            .await
            .map(|_| dto.id.unwrap_or_default())
    } else {
        a007_job_template::service::create(dto).await
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// DELETE /api/job-templates/:id
pub async fn delete(Path(id): Path<i32>) -> Result<(), axum::http::StatusCode> {
    match a007_job_template::service::delete(id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
