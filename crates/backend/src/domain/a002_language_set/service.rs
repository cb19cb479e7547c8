use super::repository;
use contracts::domain::a002_language_set::aggregate::{LanguageSet, LanguageSetDto};

pub async fn create(dto: LanguageSetDto) -> anyhow::Result<i32> {
    let aggregate = LanguageSet::new_for_insert(dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::insert(&aggregate).await
}

pub async fn update(dto: LanguageSetDto) -> anyhow::Result<()> {
    let id = dto.id.ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.update(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::update(&aggregate).await
}

pub async fn delete(id: i32) -> anyhow::Result<bool> {
    repository::delete(id).await
}

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<LanguageSet>> {
    repository::get_by_id(id).await
}

pub async fn get_by_slug(slug: &str) -> anyhow::Result<Option<LanguageSet>> {
    repository::get_by_slug(slug).await
}

pub async fn list_all() -> anyhow::Result<Vec<LanguageSet>> {
    repository::list_all().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support;

    #[test]
    fn locale_list_survives_storage() {
        test_support::run(async {
            let id = create(LanguageSetDto {
                id: None,
                lang_set_name: "Nordic".into(),
                lang_set_slug: "nordic".into(),
                lang_set_color: "#4e9a06".into(),
                locale_ids: vec!["da_DK".into(), "sv_SE".into(), "fi_FI".into()],
            })
            .await
            .unwrap();

            let found = get_by_id(id).await.unwrap().unwrap();
            assert_eq!(found.locale_ids, vec!["da_DK", "sv_SE", "fi_FI"]);
        });
    }

    #[test]
    fn duplicate_slug_is_rejected() {
        test_support::run(async {
            let dto = |color: &str| LanguageSetDto {
                id: None,
                lang_set_name: "Baltic".into(),
                lang_set_slug: "baltic".into(),
                lang_set_color: color.into(),
                locale_ids: vec![],
            };
            create(dto("#aa0000")).await.unwrap();
            assert!(create(dto("#bb0000")).await.is_err());
        });
    }
}
