use axum::Json;

use crate::domain::a013_visitor;
use contracts::domain::a013_visitor::aggregate::Visitor;

/// GET /api/visitors (admin view of the access log)
pub async fn list_all() -> Result<Json<Vec<Visitor>>, axum::http::StatusCode> {
    match a013_visitor::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
