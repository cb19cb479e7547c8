use super::repository;
use crate::domain::a003_trans_platform;
use contracts::domain::a006_package::aggregate::{Package, PackageDto};

/// Track a new package. The platform reference is validated up front for a
/// friendly error; the foreign key on ts_packages backs it up in storage.
pub async fn create(dto: PackageDto) -> anyhow::Result<i32> {
    let aggregate = Package::new_for_insert(dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    if a003_trans_platform::repository::get_by_slug(&aggregate.platform_slug)
        .await?
        .is_none()
    {
        return Err(anyhow::anyhow!(
            "Unknown translation platform: {}",
            aggregate.platform_slug
        ));
    }

    repository::insert(&aggregate).await
}

pub async fn update(dto: PackageDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<Package>> {
    repository::get_by_id(id).await
}

pub async fn get_by_name(package_name: &str) -> anyhow::Result<Option<Package>> {
    repository::get_by_name(package_name).await
}

pub async fn list_all() -> anyhow::Result<Vec<Package>> {
    repository::list_all().await
}

pub async fn list_by_platform(platform_slug: &str) -> anyhow::Result<Vec<Package>> {
    repository::list_by_platform(platform_slug).await
}

/// Store a computed stats differential for a package
pub async fn update_stats_diff(
    package_name: &str,
    diff: serde_json::Value,
) -> anyhow::Result<()> {
    let updated = repository::set_stats_diff(package_name, diff).await?;
    if !updated {
        return Err(anyhow::anyhow!("Unknown package: {}", package_name));
    }
    Ok(())
}

/// Store freshly fetched platform details for a package
pub async fn update_details(package_name: &str, details: serde_json::Value) -> anyhow::Result<()> {
    let updated = repository::set_details(package_name, details).await?;
    if !updated {
        return Err(anyhow::anyhow!("Unknown package: {}", package_name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support;
    use contracts::domain::a003_trans_platform::aggregate::TransPlatformDto;

    async fn seed_platform(slug: &str) {
        a003_trans_platform::service::create(TransPlatformDto {
            engine_name: "weblate".into(),
            api_url: format!("https://{}.example.org", slug.to_lowercase()),
            platform_slug: slug.into(),
            server_status: true,
            ..Default::default()
        })
        .await
        .unwrap();
    }

    fn dto(name: &str, platform: &str) -> PackageDto {
        PackageDto {
            package_name: name.into(),
            upstream_url: format!("https://github.com/example/{}", name),
            platform_slug: platform.into(),
            release_streams: vec!["fedora".into()],
            ..Default::default()
        }
    }

    #[test]
    fn package_referencing_unknown_platform_is_rejected() {
        test_support::run(async {
            let err = create(dto("ibus", "MISSING-PLATFORM")).await;
            assert!(err.is_err());
        });
    }

    #[test]
    fn package_round_trips_with_soft_stream_list() {
        test_support::run(async {
            seed_platform("PKGTEST").await;
            let id = create(dto("gnome-shell", "PKGTEST")).await.unwrap();

            let found = get_by_id(id).await.unwrap().unwrap();
            assert_eq!(found.release_streams, vec!["fedora"]);
            assert_eq!(found.translation_file_ext.code(), "po");
        });
    }

    #[test]
    fn duplicate_package_name_is_rejected() {
        test_support::run(async {
            seed_platform("PKGDUP").await;
            create(dto("systemd", "PKGDUP")).await.unwrap();
            let mut second = dto("systemd", "PKGDUP");
            second.upstream_url = "https://github.com/example/systemd-alt".into();
            assert!(create(second).await.is_err());
        });
    }

    #[test]
    fn stats_diff_update_stamps_refresh_time() {
        test_support::run(async {
            seed_platform("PKGSTAT").await;
            create(dto("glibc", "PKGSTAT")).await.unwrap();

            update_stats_diff("glibc", serde_json::json!({"fr": 98.5}))
                .await
                .unwrap();

            let found = get_by_name("glibc").await.unwrap().unwrap();
            assert!(found.stats_diff_json.is_some());
            assert!(found.stats_last_updated.is_some());
        });
    }
}
