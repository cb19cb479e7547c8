use chrono::Utc;

use super::repository;
use contracts::domain::a005_release_branch::aggregate::{ReleaseBranch, ReleaseBranchDto};

/// Create a branch under a release stream. The stream slug stays a soft
/// reference; no foreign key binds it.
pub async fn create(dto: ReleaseBranchDto) -> anyhow::Result<i32> {
    let aggregate = ReleaseBranch::new_for_insert(dto, Utc::now());

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::insert(&aggregate).await
}

pub async fn update(dto: ReleaseBranchDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<ReleaseBranch>> {
    repository::get_by_id(id).await
}

pub async fn get_by_slug(slug: &str) -> anyhow::Result<Option<ReleaseBranch>> {
    repository::get_by_slug(slug).await
}

pub async fn list_all() -> anyhow::Result<Vec<ReleaseBranch>> {
    repository::list_all().await
}

pub async fn list_by_stream(relstream_slug: &str) -> anyhow::Result<Vec<ReleaseBranch>> {
    repository::list_by_stream(relstream_slug).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support;

    fn dto(slug: &str, stream: &str) -> ReleaseBranchDto {
        ReleaseBranchDto {
            relbranch_name: slug.to_uppercase(),
            relbranch_slug: slug.into(),
            relstream_slug: stream.into(),
            lang_set: "default".into(),
            ..Default::default()
        }
        .with_flag_defaults()
    }

    #[test]
    fn branch_creation_stamps_created_on_and_flags() {
        test_support::run(async {
            let id = create(dto("f41", "fedora-branch-test")).await.unwrap();
            let found = get_by_id(id).await.unwrap().unwrap();
            assert!(found.sync_calendar);
            assert!(found.notifications_flag);
            assert!(found.track_trans_flag);
            assert!(found.created_on <= Utc::now());
        });
    }

    #[test]
    fn branches_referencing_a_missing_stream_are_accepted() {
        // Soft reference by design: no foreign key on relstream_slug
        test_support::run(async {
            assert!(create(dto("f42", "no-such-stream")).await.is_ok());
        });
    }

    #[test]
    fn list_by_stream_filters_on_the_slug() {
        test_support::run(async {
            create(dto("el9", "stream-a")).await.unwrap();
            create(dto("el10", "stream-a")).await.unwrap();
            create(dto("sle15", "stream-b")).await.unwrap();

            let branches = list_by_stream("stream-a").await.unwrap();
            assert_eq!(branches.len(), 2);
        });
    }
}
