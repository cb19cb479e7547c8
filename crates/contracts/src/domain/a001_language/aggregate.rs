use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// A supported locale, keyed by its locale identifier (e.g. "fr_FR")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    /// Locale identifier, natural primary key
    pub locale_id: String,
    pub lang_name: String,
    pub locale_alias: Option<String>,
    pub locale_script: Option<String>,
    /// Enable/disable flag
    pub lang_status: bool,
}

impl Language {
    pub fn new_for_insert(dto: LanguageDto) -> Self {
        Self {
            locale_id: dto.locale_id,
            lang_name: dto.lang_name,
            locale_alias: dto.locale_alias,
            locale_script: dto.locale_script,
            lang_status: dto.lang_status,
        }
    }

    pub fn update(&mut self, dto: &LanguageDto) {
        self.lang_name = dto.lang_name.clone();
        self.locale_alias = dto.locale_alias.clone();
        self.locale_script = dto.locale_script.clone();
        self.lang_status = dto.lang_status;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.locale_id.trim().is_empty() {
            return Err("Locale ID cannot be empty".into());
        }
        if self.lang_name.trim().is_empty() {
            return Err("Language name cannot be empty".into());
        }
        Ok(())
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LanguageDto {
    pub locale_id: String,
    pub lang_name: String,
    pub locale_alias: Option<String>,
    pub locale_script: Option<String>,
    pub lang_status: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_locale_id() {
        let lang = Language {
            locale_id: " ".into(),
            lang_name: "French".into(),
            locale_alias: None,
            locale_script: None,
            lang_status: true,
        };
        assert!(lang.validate().is_err());
    }

    #[test]
    fn validate_accepts_minimal_language() {
        let lang = Language::new_for_insert(LanguageDto {
            locale_id: "fr_FR".into(),
            lang_name: "French".into(),
            lang_status: true,
            ..Default::default()
        });
        assert!(lang.validate().is_ok());
    }
}
