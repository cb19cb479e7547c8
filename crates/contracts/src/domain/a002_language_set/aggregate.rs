use serde::{Deserialize, Serialize};

/// A named, colored group of locales.
///
/// `locale_ids` is a plain list of locale identifiers; referential integrity
/// against `Language` is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSet {
    pub lang_set_id: i32,
    pub lang_set_name: String,
    pub lang_set_slug: String,
    /// Tag colour, unique across sets
    pub lang_set_color: String,
    pub locale_ids: Vec<String>,
}

impl LanguageSet {
    pub fn new_for_insert(dto: LanguageSetDto) -> Self {
        Self {
            lang_set_id: 0,
            lang_set_name: dto.lang_set_name,
            lang_set_slug: dto.lang_set_slug,
            lang_set_color: dto.lang_set_color,
            locale_ids: dto.locale_ids,
        }
    }

    pub fn update(&mut self, dto: &LanguageSetDto) {
        self.lang_set_name = dto.lang_set_name.clone();
        self.lang_set_slug = dto.lang_set_slug.clone();
        self.lang_set_color = dto.lang_set_color.clone();
        self.locale_ids = dto.locale_ids.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.lang_set_name.trim().is_empty() {
            return Err("Language set name cannot be empty".into());
        }
        if self.lang_set_slug.trim().is_empty() {
            return Err("Language set slug cannot be empty".into());
        }
        if self.lang_set_color.trim().is_empty() {
            return Err("Tag colour cannot be empty".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LanguageSetDto {
    pub id: Option<i32>,
    pub lang_set_name: String,
    pub lang_set_slug: String,
    pub lang_set_color: String,
    pub locale_ids: Vec<String>,
}
