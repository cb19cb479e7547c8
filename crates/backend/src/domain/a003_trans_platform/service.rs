use super::repository;
use contracts::domain::a003_trans_platform::aggregate::{TransPlatform, TransPlatformDto};

pub async fn create(dto: TransPlatformDto) -> anyhow::Result<i32> {
    let aggregate = TransPlatform::new_for_insert(dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::insert(&aggregate).await
}

pub async fn update(dto: TransPlatformDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<TransPlatform>> {
    repository::get_by_id(id).await
}

pub async fn get_by_slug(slug: &str) -> anyhow::Result<Option<TransPlatform>> {
    repository::get_by_slug(slug).await
}

pub async fn list_all() -> anyhow::Result<Vec<TransPlatform>> {
    repository::list_all().await
}

pub async fn list_enabled() -> anyhow::Result<Vec<TransPlatform>> {
    repository::list_enabled().await
}

/// Store a freshly polled projects payload for a platform. The payload stays
/// opaque here; the sync engine owns its shape.
pub async fn update_projects(slug: &str, projects: serde_json::Value) -> anyhow::Result<()> {
    let updated = repository::set_projects(slug, projects).await?;
    if !updated {
        return Err(anyhow::anyhow!("Unknown platform: {}", slug));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support;

    fn dto(slug: &str, api_url: &str) -> TransPlatformDto {
        TransPlatformDto {
            engine_name: "weblate".into(),
            subject: Some("fedora".into()),
            api_url: api_url.into(),
            platform_slug: slug.into(),
            server_status: true,
            ..Default::default()
        }
    }

    #[test]
    fn update_projects_stamps_refresh_time() {
        test_support::run(async {
            create(dto("WLTETEST", "https://translate.test.example.org"))
                .await
                .unwrap();

            update_projects("WLTETEST", serde_json::json!([{"slug": "anaconda"}]))
                .await
                .unwrap();

            let found = get_by_slug("WLTETEST").await.unwrap().unwrap();
            assert!(found.projects_json.is_some());
            assert!(found.projects_last_updated.is_some());
        });
    }

    #[test]
    fn update_projects_for_unknown_platform_fails() {
        test_support::run(async {
            assert!(update_projects("NOPE", serde_json::json!([])).await.is_err());
        });
    }

    #[test]
    fn duplicate_api_url_is_rejected() {
        test_support::run(async {
            create(dto("ZNTA1", "https://fedora.zanata.example.org"))
                .await
                .unwrap();
            assert!(create(dto("ZNTA2", "https://fedora.zanata.example.org"))
                .await
                .is_err());
        });
    }
}
