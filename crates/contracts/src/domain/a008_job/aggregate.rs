use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Aggregate Root
// ============================================================================

/// An executed or scheduled unit of work (a sync run, a stats computation).
///
/// `job_uuid` is the random external identifier the web UI and sync stats
/// refer to; `job_id` stays internal to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: i32,
    pub job_uuid: Uuid,
    pub job_type: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub yml_text: Option<String>,
    pub log_json: Option<serde_json::Value>,
    /// Tri-state: None while running, Some(true/false) once settled
    pub job_result: Option<bool>,
    pub remarks: Option<String>,
    /// Enforced reference to `JobTemplate`, when the job came from one
    pub template_id: Option<i32>,
    pub params_json: Option<serde_json::Value>,
    pub output_json: Option<serde_json::Value>,
    pub triggered_by: Option<String>,
    pub visible_on_url: bool,
}

impl Job {
    /// Start a new job record at `now` with a fresh random identifier.
    pub fn new_for_insert(dto: JobDto, now: DateTime<Utc>) -> Self {
        Self {
            job_id: 0,
            job_uuid: Uuid::new_v4(),
            job_type: dto.job_type,
            start_time: now,
            end_time: None,
            yml_text: dto.yml_text,
            log_json: None,
            job_result: None,
            remarks: None,
            template_id: dto.template_id,
            params_json: dto.params_json,
            output_json: None,
            triggered_by: dto.triggered_by,
            visible_on_url: dto.visible_on_url,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.job_type.trim().is_empty() {
            return Err("Job type cannot be empty".into());
        }
        Ok(())
    }

    /// Elapsed run time, `None` while the job has not ended.
    pub fn duration(&self) -> Option<Duration> {
        self.end_time.map(|end| end - self.start_time)
    }

    /// Mark the job finished at `end_time` with the given result.
    pub fn finish(
        &mut self,
        end_time: DateTime<Utc>,
        result: bool,
        output_json: Option<serde_json::Value>,
    ) {
        self.end_time = Some(end_time);
        self.job_result = Some(result);
        if output_json.is_some() {
            self.output_json = output_json;
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JobDto {
    pub job_type: String,
    pub yml_text: Option<String>,
    pub template_id: Option<i32>,
    pub params_json: Option<serde_json::Value>,
    pub triggered_by: Option<String>,
    pub visible_on_url: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job(start: DateTime<Utc>) -> Job {
        Job::new_for_insert(
            JobDto {
                job_type: "syncupstream".into(),
                ..Default::default()
            },
            start,
        )
    }

    #[test]
    fn duration_is_none_while_running() {
        let job = sample_job(Utc::now());
        assert!(job.duration().is_none());
    }

    #[test]
    fn duration_is_end_minus_start() {
        let start = Utc::now();
        let mut job = sample_job(start);
        job.finish(start + Duration::seconds(90), true, None);
        assert_eq!(job.duration(), Some(Duration::seconds(90)));
        assert_eq!(job.job_result, Some(true));
    }

    #[test]
    fn fresh_jobs_get_distinct_uuids() {
        let now = Utc::now();
        let a = sample_job(now);
        let b = sample_job(now);
        assert_ne!(a.job_uuid, b.job_uuid);
    }
}
