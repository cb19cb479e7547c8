use super::repository;
use contracts::domain::a012_report::aggregate::Report;

/// Store a computed report under its subject, inserting the row on first
/// write and replacing the body afterwards.
pub async fn upsert_for_subject(
    subject: &str,
    body: serde_json::Value,
) -> anyhow::Result<Report> {
    if repository::get_by_subject(subject).await?.is_none() {
        let aggregate = Report::new_for_insert(subject.to_string(), None);
        aggregate
            .validate()
            .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
        repository::insert(&aggregate).await?;
    }

    repository::set_body(subject, body).await?;

    repository::get_by_subject(subject)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Report vanished after upsert"))
}

pub async fn get_by_subject(subject: &str) -> anyhow::Result<Option<Report>> {
    repository::get_by_subject(subject).await
}

pub async fn list_all() -> anyhow::Result<Vec<Report>> {
    repository::list_all().await
}

pub async fn delete(id: i32) -> anyhow::Result<bool> {
    repository::delete(id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support;

    #[test]
    fn upsert_creates_then_replaces() {
        test_support::run(async {
            let first = upsert_for_subject("releases", serde_json::json!({"count": 1}))
                .await
                .unwrap();
            assert!(first.report_updated.is_some());

            let second = upsert_for_subject("releases", serde_json::json!({"count": 2}))
                .await
                .unwrap();
            assert_eq!(first.report_id, second.report_id);
            assert_eq!(
                second.report_json,
                Some(serde_json::json!({"count": 2}))
            );
        });
    }
}
