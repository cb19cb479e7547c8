use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// An external translation-management server (Weblate, Zanata, Transifex...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransPlatform {
    pub platform_id: i32,
    pub engine_name: String,
    pub subject: Option<String>,
    /// Server API root, unique per platform
    pub api_url: String,
    pub platform_slug: String,
    /// Enable/disable flag
    pub server_status: bool,
    /// Cached projects payload from the platform, opaque until the sync
    /// engine specifies its shape
    pub projects_json: Option<serde_json::Value>,
    pub projects_last_updated: Option<DateTime<Utc>>,
    pub auth_login_id: Option<String>,
    pub auth_token_key: Option<String>,
}

impl TransPlatform {
    pub fn new_for_insert(dto: TransPlatformDto) -> Self {
        Self {
            platform_id: 0,
            engine_name: dto.engine_name,
            subject: dto.subject,
            api_url: dto.api_url,
            platform_slug: dto.platform_slug,
            server_status: dto.server_status,
            projects_json: None,
            projects_last_updated: None,
            auth_login_id: dto.auth_login_id,
            auth_token_key: dto.auth_token_key,
        }
    }

    pub fn update(&mut self, dto: &TransPlatformDto) {
        self.engine_name = dto.engine_name.clone();
        self.subject = dto.subject.clone();
        self.api_url = dto.api_url.clone();
        self.platform_slug = dto.platform_slug.clone();
        self.server_status = dto.server_status;
        self.auth_login_id = dto.auth_login_id.clone();
        self.auth_token_key = dto.auth_token_key.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.engine_name.trim().is_empty() {
            return Err("Platform engine cannot be empty".into());
        }
        if self.platform_slug.trim().is_empty() {
            return Err("Platform slug cannot be empty".into());
        }
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err("Server URL must start with http:// or https://".into());
        }
        Ok(())
    }

    /// Display name: engine plus subject, e.g. "weblate fedora"
    pub fn display_name(&self) -> String {
        match &self.subject {
            Some(subject) => format!("{} {}", self.engine_name, subject),
            None => self.engine_name.clone(),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TransPlatformDto {
    pub id: Option<i32>,
    pub engine_name: String,
    pub subject: Option<String>,
    pub api_url: String,
    pub platform_slug: String,
    pub server_status: bool,
    pub auth_login_id: Option<String>,
    pub auth_token_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_non_http_url() {
        let platform = TransPlatform::new_for_insert(TransPlatformDto {
            engine_name: "weblate".into(),
            api_url: "ftp://translate.example.org".into(),
            platform_slug: "WLTE".into(),
            server_status: true,
            ..Default::default()
        });
        assert!(platform.validate().is_err());
    }

    #[test]
    fn display_name_includes_subject() {
        let platform = TransPlatform::new_for_insert(TransPlatformDto {
            engine_name: "weblate".into(),
            subject: Some("fedora".into()),
            api_url: "https://translate.fedoraproject.org".into(),
            platform_slug: "WLTEFED".into(),
            server_status: true,
            ..Default::default()
        });
        assert_eq!(platform.display_name(), "weblate fedora");
    }
}
