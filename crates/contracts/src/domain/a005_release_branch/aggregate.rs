use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A versioned subdivision of a release stream with its own schedule.
///
/// `relstream_slug` and `lang_set` are soft references kept as plain strings;
/// only the surrounding application binds them to actual records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseBranch {
    pub relbranch_id: i32,
    pub relbranch_name: String,
    pub relbranch_slug: String,
    pub relstream_slug: String,
    pub lang_set: String,
    pub scm_branch: Option<String>,
    pub created_on: DateTime<Utc>,
    pub current_phase: Option<String>,
    /// iCal calendar URL, unique when present
    pub calendar_url: Option<String>,
    /// Parsed schedule blob, opaque
    pub schedule_json: Option<serde_json::Value>,
    pub sync_calendar: bool,
    pub notifications_flag: bool,
    pub track_trans_flag: bool,
    pub created_by: Option<String>,
}

impl ReleaseBranch {
    pub fn new_for_insert(dto: ReleaseBranchDto, now: DateTime<Utc>) -> Self {
        Self {
            relbranch_id: 0,
            relbranch_name: dto.relbranch_name,
            relbranch_slug: dto.relbranch_slug,
            relstream_slug: dto.relstream_slug,
            lang_set: dto.lang_set,
            scm_branch: dto.scm_branch,
            created_on: now,
            current_phase: dto.current_phase,
            calendar_url: dto.calendar_url,
            schedule_json: dto.schedule_json,
            sync_calendar: dto.sync_calendar,
            notifications_flag: dto.notifications_flag,
            track_trans_flag: dto.track_trans_flag,
            created_by: dto.created_by,
        }
    }

    pub fn update(&mut self, dto: &ReleaseBranchDto) {
        self.relbranch_name = dto.relbranch_name.clone();
        self.relbranch_slug = dto.relbranch_slug.clone();
        self.relstream_slug = dto.relstream_slug.clone();
        self.lang_set = dto.lang_set.clone();
        self.scm_branch = dto.scm_branch.clone();
        self.current_phase = dto.current_phase.clone();
        self.calendar_url = dto.calendar_url.clone();
        self.schedule_json = dto.schedule_json.clone();
        self.sync_calendar = dto.sync_calendar;
        self.notifications_flag = dto.notifications_flag;
        self.track_trans_flag = dto.track_trans_flag;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.relbranch_name.trim().is_empty() {
            return Err("Release branch name cannot be empty".into());
        }
        if self.relbranch_slug.trim().is_empty() {
            return Err("Release branch slug cannot be empty".into());
        }
        if self.relstream_slug.trim().is_empty() {
            return Err("Release stream slug cannot be empty".into());
        }
        if self.lang_set.trim().is_empty() {
            return Err("Language set cannot be empty".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReleaseBranchDto {
    pub id: Option<i32>,
    pub relbranch_name: String,
    pub relbranch_slug: String,
    pub relstream_slug: String,
    pub lang_set: String,
    pub scm_branch: Option<String>,
    pub current_phase: Option<String>,
    pub calendar_url: Option<String>,
    pub schedule_json: Option<serde_json::Value>,
    pub sync_calendar: bool,
    pub notifications_flag: bool,
    pub track_trans_flag: bool,
    pub created_by: Option<String>,
}

impl ReleaseBranchDto {
    /// Defaults matching the storage contract: sync, notifications and
    /// translation tracking are all on for a fresh branch.
    pub fn with_flag_defaults(mut self) -> Self {
        self.sync_calendar = true;
        self.notifications_flag = true;
        self.track_trans_flag = true;
        self
    }
}
