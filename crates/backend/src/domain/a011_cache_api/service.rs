use super::repository;
use contracts::domain::a011_cache_api::aggregate::{CachedResponse, CachedResponseDto};

/// Store a fetched response. Rows accumulate; eviction belongs to whichever
/// subsystem owns the cache policy.
pub async fn store(dto: CachedResponseDto) -> anyhow::Result<i32> {
    let aggregate = CachedResponse::new_for_insert(dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::insert(&aggregate).await
}

/// Fetch the latest stored response for a base URL + resource pair
pub async fn fetch(base_url: &str, resource: &str) -> anyhow::Result<Option<CachedResponse>> {
    repository::get_for_resource(base_url, resource).await
}

pub async fn list_all() -> anyhow::Result<Vec<CachedResponse>> {
    repository::list_all().await
}

pub async fn delete(id: i32) -> anyhow::Result<bool> {
    repository::delete(id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support;
    use chrono::{Duration, Utc};

    fn dto(resource: &str, body: &str) -> CachedResponseDto {
        CachedResponseDto {
            base_url: "https://translate.example.org".into(),
            resource: resource.into(),
            request_args: vec!["projects".into()],
            request_kwargs: "{}".into(),
            response_content: body.into(),
            response_content_json: None,
            expiry: Utc::now() + Duration::hours(1),
        }
    }

    #[test]
    fn fetch_returns_the_latest_entry_for_a_resource() {
        test_support::run(async {
            store(dto("project_list", "old-body")).await.unwrap();
            store(dto("project_list", "new-body")).await.unwrap();

            let found = fetch("https://translate.example.org", "project_list")
                .await
                .unwrap()
                .unwrap();
            assert_eq!(found.response_content, "new-body");
        });
    }

    #[test]
    fn expired_entries_are_still_returned() {
        // Storage keeps expired rows; the policy layer decides what expiry means
        test_support::run(async {
            let mut stale = dto("stale_resource", "stale-body");
            stale.expiry = Utc::now() - Duration::hours(2);
            store(stale).await.unwrap();

            let found = fetch("https://translate.example.org", "stale_resource")
                .await
                .unwrap()
                .unwrap();
            assert!(found.expiry < Utc::now());
        });
    }
}
