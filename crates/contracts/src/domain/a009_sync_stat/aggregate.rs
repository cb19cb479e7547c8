use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A point-in-time snapshot of translation completion statistics for a
/// package, written by a sync job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncStat {
    pub sync_id: i32,
    pub package_name: String,
    /// The job that produced this snapshot
    pub job_uuid: Uuid,
    pub project_version: Option<String>,
    pub source: Option<String>,
    pub stats_raw_json: Option<serde_json::Value>,
    pub stats_processed_json: Option<serde_json::Value>,
    pub sync_iter_count: i32,
    pub sync_visibility: bool,
}

impl SyncStat {
    pub fn new_for_insert(dto: SyncStatDto) -> Self {
        Self {
            sync_id: 0,
            package_name: dto.package_name,
            job_uuid: dto.job_uuid,
            project_version: dto.project_version,
            source: dto.source,
            stats_raw_json: dto.stats_raw_json,
            stats_processed_json: dto.stats_processed_json,
            sync_iter_count: dto.sync_iter_count,
            sync_visibility: dto.sync_visibility,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.package_name.trim().is_empty() {
            return Err("Package name cannot be empty".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncStatDto {
    pub package_name: String,
    pub job_uuid: Uuid,
    pub project_version: Option<String>,
    pub source: Option<String>,
    pub stats_raw_json: Option<serde_json::Value>,
    pub stats_processed_json: Option<serde_json::Value>,
    pub sync_iter_count: i32,
    pub sync_visibility: bool,
}
