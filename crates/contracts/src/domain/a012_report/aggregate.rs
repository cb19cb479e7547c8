use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cached computed report, one row per subject (e.g. "releases",
/// "packages"). The body is recomputed wholesale by the reporting subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub report_id: i32,
    pub report_subject: String,
    pub report_json: Option<serde_json::Value>,
    pub report_updated: Option<DateTime<Utc>>,
}

impl Report {
    pub fn new_for_insert(subject: String, body: Option<serde_json::Value>) -> Self {
        Self {
            report_id: 0,
            report_subject: subject,
            report_json: body,
            report_updated: None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.report_subject.trim().is_empty() {
            return Err("Report subject cannot be empty".into());
        }
        Ok(())
    }
}
