use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cached external HTTP response. Pure storage: callers decide what to do
/// with `expiry`; no eviction happens in this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedResponse {
    pub cache_api_id: i32,
    pub base_url: String,
    pub resource: String,
    pub request_args: Vec<String>,
    pub request_kwargs: String,
    pub response_content: String,
    pub response_content_json: Option<serde_json::Value>,
    pub expiry: DateTime<Utc>,
}

impl CachedResponse {
    pub fn new_for_insert(dto: CachedResponseDto) -> Self {
        Self {
            cache_api_id: 0,
            base_url: dto.base_url,
            resource: dto.resource,
            request_args: dto.request_args,
            request_kwargs: dto.request_kwargs,
            response_content: dto.response_content,
            response_content_json: dto.response_content_json,
            expiry: dto.expiry,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("Base URL cannot be empty".into());
        }
        if self.resource.trim().is_empty() {
            return Err("Resource cannot be empty".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedResponseDto {
    pub base_url: String,
    pub resource: String,
    pub request_args: Vec<String>,
    pub request_kwargs: String,
    pub response_content: String,
    pub response_content_json: Option<serde_json::Value>,
    pub expiry: DateTime<Utc>,
}
