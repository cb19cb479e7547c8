use axum::{extract::Path, Json};

use crate::domain::a012_report;
use contracts::domain::a012_report::aggregate::Report;

/// GET /api/reports
pub async fn list_all() -> Result<Json<Vec<Report>>, axum::http::StatusCode> {
    match a012_report::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/reports/:subject
pub async fn get_by_subject(
    Path(subject): Path<String>,
) -> Result<Json<Report>, axum::http::StatusCode> {
    match a012_report::service::get_by_subject(&subject).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// PUT /api/reports/:subject
pub async fn upsert(
    Path(subject): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Report>, axum::http::StatusCode> {
    match a012_report::service::upsert_for_subject(&subject, body).await {
        Ok(report) => Ok(Json(report)),
        Err(_) => Err(axum::http::StatusCode::BAD_REQUEST),
    }
}
