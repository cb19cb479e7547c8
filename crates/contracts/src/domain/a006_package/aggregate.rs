use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::trans_format::TranslationFormat;

// ============================================================================
// Aggregate Root
// ============================================================================

/// A software package tracked for translation.
///
/// The central join entity: `platform_slug` is an enforced reference to a
/// translation platform, `release_streams` is a soft list of stream slugs,
/// and the various `*_json` blobs carry statistics written by the sync
/// subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub package_id: i32,
    pub package_name: String,
    pub upstream_name: Option<String>,
    pub component: Option<String>,
    pub upstream_url: String,
    /// Enforced reference to `TransPlatform::platform_slug`
    pub platform_slug: String,
    /// Package name at the translation platform, when it differs
    pub platform_name: Option<String>,
    pub platform_url: Option<String>,
    pub release_streams: Vec<String>,
    pub details_json: Option<serde_json::Value>,
    pub details_json_last_updated: Option<DateTime<Utc>>,
    pub name_map_json: Option<serde_json::Value>,
    pub release_branch_map_json: Option<serde_json::Value>,
    pub mapping_last_updated: Option<DateTime<Utc>>,
    pub stats_diff_json: Option<serde_json::Value>,
    pub stats_last_updated: Option<DateTime<Utc>>,
    pub upstream_latest_stats_json: Option<serde_json::Value>,
    pub upstream_last_updated: Option<DateTime<Utc>>,
    pub downstream_last_updated: Option<DateTime<Utc>>,
    pub translation_file_ext: TranslationFormat,
    pub created_by: Option<String>,
    pub maintainers_json: Option<serde_json::Value>,
}

impl Package {
    pub fn new_for_insert(dto: PackageDto) -> Self {
        Self {
            package_id: 0,
            package_name: dto.package_name,
            upstream_name: dto.upstream_name,
            component: dto.component,
            upstream_url: dto.upstream_url,
            platform_slug: dto.platform_slug,
            platform_name: dto.platform_name,
            platform_url: dto.platform_url,
            release_streams: dto.release_streams,
            details_json: None,
            details_json_last_updated: None,
            name_map_json: None,
            release_branch_map_json: None,
            mapping_last_updated: None,
            stats_diff_json: None,
            stats_last_updated: None,
            upstream_latest_stats_json: None,
            upstream_last_updated: None,
            downstream_last_updated: None,
            translation_file_ext: dto.translation_file_ext.unwrap_or_default(),
            created_by: dto.created_by,
            maintainers_json: None,
        }
    }

    pub fn update(&mut self, dto: &PackageDto) {
        self.package_name = dto.package_name.clone();
        self.upstream_name = dto.upstream_name.clone();
        self.component = dto.component.clone();
        self.upstream_url = dto.upstream_url.clone();
        self.platform_slug = dto.platform_slug.clone();
        self.platform_name = dto.platform_name.clone();
        self.platform_url = dto.platform_url.clone();
        self.release_streams = dto.release_streams.clone();
        if let Some(ext) = dto.translation_file_ext {
            self.translation_file_ext = ext;
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.package_name.trim().is_empty() {
            return Err("Package name cannot be empty".into());
        }
        if !self.upstream_url.starts_with("http://") && !self.upstream_url.starts_with("https://")
        {
            return Err("Upstream URL must start with http:// or https://".into());
        }
        if self.platform_slug.trim().is_empty() {
            return Err("Translation platform cannot be empty".into());
        }
        Ok(())
    }

    /// Name used when querying the translation platform: the explicit
    /// platform-side name when mapped, the package name otherwise.
    pub fn name_at_platform(&self) -> &str {
        self.platform_name.as_deref().unwrap_or(&self.package_name)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PackageDto {
    pub id: Option<i32>,
    pub package_name: String,
    pub upstream_name: Option<String>,
    pub component: Option<String>,
    pub upstream_url: String,
    pub platform_slug: String,
    pub platform_name: Option<String>,
    pub platform_url: Option<String>,
    pub release_streams: Vec<String>,
    pub translation_file_ext: Option<TranslationFormat>,
    pub created_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dto() -> PackageDto {
        PackageDto {
            package_name: "anaconda".into(),
            upstream_url: "https://github.com/rhinstaller/anaconda".into(),
            platform_slug: "WLTEFED".into(),
            ..Default::default()
        }
    }

    #[test]
    fn new_package_defaults_to_po_format() {
        let package = Package::new_for_insert(sample_dto());
        assert_eq!(package.translation_file_ext, TranslationFormat::Po);
    }

    #[test]
    fn name_at_platform_prefers_mapping() {
        let mut package = Package::new_for_insert(sample_dto());
        assert_eq!(package.name_at_platform(), "anaconda");
        package.platform_name = Some("anaconda-master".into());
        assert_eq!(package.name_at_platform(), "anaconda-master");
    }

    #[test]
    fn validate_rejects_missing_platform() {
        let mut package = Package::new_for_insert(sample_dto());
        package.platform_slug = String::new();
        assert!(package.validate().is_err());
    }
}
