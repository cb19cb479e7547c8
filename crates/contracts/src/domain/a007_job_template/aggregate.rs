use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reusable job definition: a typed YAML/JSON body plus the parameter
/// names a runner substitutes before execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobTemplate {
    pub job_template_id: i32,
    /// Template type, unique (e.g. "syncupstream")
    pub job_template_type: String,
    pub job_template_name: String,
    pub job_template_desc: Option<String>,
    pub job_template_params: Vec<String>,
    pub job_template_json: Option<serde_json::Value>,
    pub last_accessed: Option<DateTime<Utc>>,
}

impl JobTemplate {
    pub fn new_for_insert(dto: JobTemplateDto) -> Self {
        Self {
            job_template_id: 0,
            job_template_type: dto.job_template_type,
            job_template_name: dto.job_template_name,
            job_template_desc: dto.job_template_desc,
            job_template_params: dto.job_template_params,
            job_template_json: dto.job_template_json,
            last_accessed: None,
        }
    }

    pub fn update(&mut self, dto: &JobTemplateDto) {
        self.job_template_type = dto.job_template_type.clone();
        self.job_template_name = dto.job_template_name.clone();
        self.job_template_desc = dto.job_template_desc.clone();
        self.job_template_params = dto.job_template_params.clone();
        self.job_template_json = dto.job_template_json.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.job_template_type.trim().is_empty() {
            return Err("Job template type cannot be empty".into());
        }
        if self.job_template_name.trim().is_empty() {
            return Err("Job template name cannot be empty".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JobTemplateDto {
    pub id: Option<i32>,
    pub job_template_type: String,
    pub job_template_name: String,
    pub job_template_desc: Option<String>,
    pub job_template_params: Vec<String>,
    pub job_template_json: Option<serde_json::Value>,
}
