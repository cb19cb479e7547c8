use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// An external product build/release pipeline whose packages are tracked
/// for translation completeness (e.g. a distribution build system).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseStream {
    pub relstream_id: i32,
    pub relstream_name: String,
    pub relstream_slug: String,
    /// Build server API root, unique per stream
    pub relstream_server: String,
    /// Build system name (e.g. "koji")
    pub relstream_built: Option<String>,
    pub relstream_built_tags: Vec<String>,
    pub built_tags_last_updated: Option<DateTime<Utc>>,
    /// Source package format (e.g. "srpm")
    pub srcpkg_format: Option<String>,
    pub top_url: String,
    pub web_url: Option<String>,
    pub krb_service: Option<String>,
    pub auth_type: Option<String>,
    pub amqp_server: Option<String>,
    pub msgbus_exchange: Option<String>,
    pub major_milestones: Vec<String>,
    pub relstream_phases: Vec<String>,
    /// Enable/disable flag
    pub relstream_status: bool,
}

impl ReleaseStream {
    pub fn new_for_insert(dto: ReleaseStreamDto) -> Self {
        Self {
            relstream_id: 0,
            relstream_name: dto.relstream_name,
            relstream_slug: dto.relstream_slug,
            relstream_server: dto.relstream_server,
            relstream_built: dto.relstream_built,
            relstream_built_tags: dto.relstream_built_tags,
            built_tags_last_updated: None,
            srcpkg_format: dto.srcpkg_format,
            top_url: dto.top_url,
            web_url: dto.web_url,
            krb_service: dto.krb_service,
            auth_type: dto.auth_type,
            amqp_server: dto.amqp_server,
            msgbus_exchange: dto.msgbus_exchange,
            major_milestones: dto.major_milestones,
            relstream_phases: dto.relstream_phases,
            relstream_status: dto.relstream_status,
        }
    }

    pub fn update(&mut self, dto: &ReleaseStreamDto) {
        self.relstream_name = dto.relstream_name.clone();
        self.relstream_slug = dto.relstream_slug.clone();
        self.relstream_server = dto.relstream_server.clone();
        self.relstream_built = dto.relstream_built.clone();
        self.relstream_built_tags = dto.relstream_built_tags.clone();
        self.srcpkg_format = dto.srcpkg_format.clone();
        self.top_url = dto.top_url.clone();
        self.web_url = dto.web_url.clone();
        self.krb_service = dto.krb_service.clone();
        self.auth_type = dto.auth_type.clone();
        self.amqp_server = dto.amqp_server.clone();
        self.msgbus_exchange = dto.msgbus_exchange.clone();
        self.major_milestones = dto.major_milestones.clone();
        self.relstream_phases = dto.relstream_phases.clone();
        self.relstream_status = dto.relstream_status;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.relstream_name.trim().is_empty() {
            return Err("Release stream name cannot be empty".into());
        }
        if self.relstream_slug.trim().is_empty() {
            return Err("Release stream slug cannot be empty".into());
        }
        if !self.relstream_server.starts_with("http://")
            && !self.relstream_server.starts_with("https://")
        {
            return Err("Release stream server must start with http:// or https://".into());
        }
        if self.top_url.trim().is_empty() {
            return Err("Top URL cannot be empty".into());
        }
        Ok(())
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReleaseStreamDto {
    pub id: Option<i32>,
    pub relstream_name: String,
    pub relstream_slug: String,
    pub relstream_server: String,
    pub relstream_built: Option<String>,
    pub relstream_built_tags: Vec<String>,
    pub srcpkg_format: Option<String>,
    pub top_url: String,
    pub web_url: Option<String>,
    pub krb_service: Option<String>,
    pub auth_type: Option<String>,
    pub amqp_server: Option<String>,
    pub msgbus_exchange: Option<String>,
    pub major_milestones: Vec<String>,
    pub relstream_phases: Vec<String>,
    pub relstream_status: bool,
}
