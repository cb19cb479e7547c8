use super::repository;
use contracts::domain::a001_language::aggregate::{Language, LanguageDto};

/// Register a new locale
pub async fn create(dto: LanguageDto) -> anyhow::Result<String> {
    let aggregate = Language::new_for_insert(dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::insert(&aggregate).await
}

pub async fn update(dto: LanguageDto) -> anyhow::Result<()> {
    let mut aggregate = repository::get_by_locale(&dto.locale_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.update(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::update(&aggregate).await
}

pub async fn delete(locale_id: &str) -> anyhow::Result<bool> {
    repository::delete(locale_id).await
}

pub async fn get_by_locale(locale_id: &str) -> anyhow::Result<Option<Language>> {
    repository::get_by_locale(locale_id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Language>> {
    repository::list_all().await
}

/// Locales currently enabled for statistics tracking
pub async fn list_enabled() -> anyhow::Result<Vec<Language>> {
    repository::list_enabled().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support;

    fn dto(locale: &str, name: &str) -> LanguageDto {
        LanguageDto {
            locale_id: locale.into(),
            lang_name: name.into(),
            lang_status: true,
            ..Default::default()
        }
    }

    #[test]
    fn create_and_fetch_language() {
        test_support::run(async {
            create(dto("ja_JP", "Japanese")).await.unwrap();
            let found = get_by_locale("ja_JP").await.unwrap().unwrap();
            assert_eq!(found.lang_name, "Japanese");
            assert!(found.lang_status);
        });
    }

    #[test]
    fn duplicate_lang_name_is_rejected() {
        test_support::run(async {
            create(dto("de_DE", "German")).await.unwrap();
            // Different locale, same display name: unique constraint trips
            assert!(create(dto("de_AT", "German")).await.is_err());
        });
    }

    #[test]
    fn disabled_languages_are_filtered_from_enabled_list() {
        test_support::run(async {
            create(dto("cs_CZ", "Czech")).await.unwrap();
            let mut disabled = dto("sk_SK", "Slovak");
            disabled.lang_status = false;
            create(disabled).await.unwrap();

            let enabled = list_enabled().await.unwrap();
            assert!(enabled.iter().any(|l| l.locale_id == "cs_CZ"));
            assert!(!enabled.iter().any(|l| l.locale_id == "sk_SK"));
        });
    }
}
