use super::repository;
use contracts::domain::a004_release_stream::aggregate::{ReleaseStream, ReleaseStreamDto};

pub async fn create(dto: ReleaseStreamDto) -> anyhow::Result<i32> {
    let aggregate = ReleaseStream::new_for_insert(dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::insert(&aggregate).await
}

pub async fn update(dto: ReleaseStreamDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<ReleaseStream>> {
    repository::get_by_id(id).await
}

pub async fn get_by_slug(slug: &str) -> anyhow::Result<Option<ReleaseStream>> {
    repository::get_by_slug(slug).await
}

pub async fn list_all() -> anyhow::Result<Vec<ReleaseStream>> {
    repository::list_all().await
}

pub async fn list_enabled() -> anyhow::Result<Vec<ReleaseStream>> {
    repository::list_enabled().await
}

/// Store the build tags fetched from the release stream's build system
pub async fn update_built_tags(slug: &str, tags: Vec<String>) -> anyhow::Result<()> {
    let updated = repository::set_built_tags(slug, &tags).await?;
    if !updated {
        return Err(anyhow::anyhow!("Unknown release stream: {}", slug));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support;

    fn dto(slug: &str) -> ReleaseStreamDto {
        ReleaseStreamDto {
            relstream_name: format!("Stream {}", slug),
            relstream_slug: slug.into(),
            relstream_server: format!("https://{}.build.example.org", slug),
            relstream_built: Some("koji".into()),
            srcpkg_format: Some("srpm".into()),
            top_url: format!("https://{}.dl.example.org", slug),
            relstream_phases: vec!["Planning".into(), "Development".into(), "Testing".into()],
            relstream_status: true,
            ..Default::default()
        }
    }

    #[test]
    fn phases_and_tags_survive_storage() {
        test_support::run(async {
            let id = create(dto("fedora")).await.unwrap();

            update_built_tags("fedora", vec!["f40".into(), "f41".into()])
                .await
                .unwrap();

            let found = get_by_id(id).await.unwrap().unwrap();
            assert_eq!(found.relstream_built_tags, vec!["f40", "f41"]);
            assert_eq!(found.relstream_phases.len(), 3);
            assert!(found.built_tags_last_updated.is_some());
        });
    }

    #[test]
    fn duplicate_stream_slug_is_rejected() {
        test_support::run(async {
            create(dto("rhel")).await.unwrap();
            let mut other = dto("rhel");
            // Distinct URLs, same slug: the slug constraint must trip
            other.relstream_server = "https://other.build.example.org".into();
            other.top_url = "https://other.dl.example.org".into();
            assert!(create(other).await.is_err());
        });
    }
}
