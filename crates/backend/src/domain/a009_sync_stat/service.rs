use uuid::Uuid;

use super::repository;
use contracts::domain::a009_sync_stat::aggregate::{SyncStat, SyncStatDto};

/// Record a statistics snapshot produced by a sync job
pub async fn record(dto: SyncStatDto) -> anyhow::Result<i32> {
    let aggregate = SyncStat::new_for_insert(dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::insert(&aggregate).await
}

pub async fn list_by_package(package_name: &str) -> anyhow::Result<Vec<SyncStat>> {
    repository::list_by_package(package_name).await
}

pub async fn list_by_job(job_uuid: Uuid) -> anyhow::Result<Vec<SyncStat>> {
    repository::list_by_job(job_uuid).await
}

pub async fn latest_for_package(package_name: &str) -> anyhow::Result<Option<SyncStat>> {
    repository::latest_for_package(package_name).await
}

/// Hide previous snapshots of a package, e.g. before recording a fresh one
pub async fn hide_for_package(package_name: &str) -> anyhow::Result<u64> {
    repository::hide_for_package(package_name).await
}

pub async fn delete(sync_id: i32) -> anyhow::Result<bool> {
    repository::delete(sync_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support;

    fn dto(package: &str, iteration: i32) -> SyncStatDto {
        SyncStatDto {
            package_name: package.into(),
            job_uuid: Uuid::new_v4(),
            project_version: Some("master".into()),
            source: Some("weblate".into()),
            stats_raw_json: Some(serde_json::json!({"fr": {"translated": 120}})),
            stats_processed_json: None,
            sync_iter_count: iteration,
            sync_visibility: true,
        }
    }

    #[test]
    fn latest_snapshot_wins_by_iteration() {
        test_support::run(async {
            record(dto("firefox", 1)).await.unwrap();
            record(dto("firefox", 2)).await.unwrap();

            let latest = latest_for_package("firefox").await.unwrap().unwrap();
            assert_eq!(latest.sync_iter_count, 2);
        });
    }

    #[test]
    fn hidden_snapshots_drop_out_of_latest() {
        test_support::run(async {
            record(dto("kate", 1)).await.unwrap();
            hide_for_package("kate").await.unwrap();

            assert!(latest_for_package("kate").await.unwrap().is_none());
        });
    }
}
