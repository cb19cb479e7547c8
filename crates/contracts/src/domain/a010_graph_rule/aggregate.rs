use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved chart/report configuration: which packages and languages to plot
/// against a release branch. `rule_relbranch` is a soft reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRule {
    pub graph_rule_id: i32,
    pub rule_name: String,
    pub rule_packages: Vec<String>,
    pub rule_langs: Vec<String>,
    pub rule_relbranch: String,
    pub created_on: DateTime<Utc>,
    pub rule_status: bool,
    pub rule_visibility_public: bool,
    pub created_by: Option<String>,
}

impl GraphRule {
    pub fn new_for_insert(dto: GraphRuleDto, now: DateTime<Utc>) -> Self {
        Self {
            graph_rule_id: 0,
            rule_name: dto.rule_name,
            rule_packages: dto.rule_packages,
            rule_langs: dto.rule_langs,
            rule_relbranch: dto.rule_relbranch,
            created_on: now,
            rule_status: true,
            rule_visibility_public: dto.rule_visibility_public,
            created_by: dto.created_by,
        }
    }

    pub fn update(&mut self, dto: &GraphRuleDto) {
        self.rule_name = dto.rule_name.clone();
        self.rule_packages = dto.rule_packages.clone();
        self.rule_langs = dto.rule_langs.clone();
        self.rule_relbranch = dto.rule_relbranch.clone();
        self.rule_visibility_public = dto.rule_visibility_public;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.rule_name.trim().is_empty() {
            return Err("Rule name cannot be empty".into());
        }
        if self.rule_relbranch.trim().is_empty() {
            return Err("Release branch cannot be empty".into());
        }
        if self.rule_packages.is_empty() {
            return Err("Rule needs at least one package".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GraphRuleDto {
    pub id: Option<i32>,
    pub rule_name: String,
    pub rule_packages: Vec<String>,
    pub rule_langs: Vec<String>,
    pub rule_relbranch: String,
    pub rule_visibility_public: bool,
    pub created_by: Option<String>,
}
