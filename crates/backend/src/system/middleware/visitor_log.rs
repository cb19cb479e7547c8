use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use contracts::domain::a013_visitor::aggregate::VisitorDto;

use crate::domain::a013_visitor;

fn header(req: &Request<Body>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

/// Record every request in the visitor access log. Failures are logged and
/// swallowed; the request itself must not be affected.
pub async fn log_visitor(req: Request<Body>, next: Next) -> Response {
    let ip = header(&req, "x-forwarded-for")
        .or_else(|| header(&req, "x-real-ip"))
        .unwrap_or_else(|| "unknown".to_string());
    let user_agent = header(&req, "user-agent").unwrap_or_else(|| "unknown".to_string());

    let dto = VisitorDto {
        visitor_ip: ip,
        visitor_user_agent: user_agent,
        visitor_accept: header(&req, "accept"),
        visitor_encoding: header(&req, "accept-encoding"),
        visitor_language: header(&req, "accept-language"),
        visitor_host: header(&req, "host"),
    };

    if let Err(e) = a013_visitor::service::record_visit(dto).await {
        tracing::warn!("Failed to record visitor: {}", e);
    }

    next.run(req).await
}
