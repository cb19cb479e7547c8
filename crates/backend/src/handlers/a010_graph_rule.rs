use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a010_graph_rule;
use contracts::domain::a010_graph_rule::aggregate::{GraphRule, GraphRuleDto};

/// GET /api/graph-rules
pub async fn list_public() -> Result<Json<Vec<GraphRule>>, axum::http::StatusCode> {
    match a010_graph_rule::service::list_public().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/graph-rules/all
pub async fn list_all() -> Result<Json<Vec<GraphRule>>, axum::http::StatusCode> {
    match a010_graph_rule::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/graph-rules/:name
pub async fn get_by_name(
    Path(name): Path<String>,
) -> Result<Json<GraphRule>, axum::http::StatusCode> {
    match a010_graph_rule::service::get_by_name(&name).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/graph-rules
pub async fn upsert(
    Json(dto): Json<GraphRuleDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let result = if dto.id.is_some() {
        a010_graph_rule::service::update(dto.clone())
            .await
            .map(|_| dto.id.unwrap_or_default())
    } else {
        a010_graph_rule::service::create(dto).await
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/graph-rules/:name/deactivate
pub async fn deactivate(
    Path(name): Path<String>,
) -> Result<axum::http::StatusCode, axum::http::StatusCode> {
    match a010_graph_rule::service::deactivate(&name).await {
        Ok(()) => Ok(axum::http::StatusCode::OK),
        Err(_) => Err(axum::http::StatusCode::NOT_FOUND),
    }
}

/// DELETE /api/graph-rules/:id
pub async fn delete(Path(id): Path<i32>) -> Result<(), axum::http::StatusCode> {
    match a010_graph_rule::service::delete(id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
