use chrono::Utc;
use uuid::Uuid;

use super::repository;
use crate::domain::a007_job_template;
use contracts::domain::a008_job::aggregate::{Job, JobDto};

/// Start a job: a new record with a fresh UUID, no end time, no result.
/// When the job came from a template, the template gets stamped as accessed.
pub async fn start(dto: JobDto) -> anyhow::Result<Uuid> {
    let aggregate = Job::new_for_insert(dto, Utc::now());

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    if let Some(template_id) = aggregate.template_id {
        let template = a007_job_template::repository::get_by_id(template_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Unknown job template: {}", template_id))?;
        let _ = a007_job_template::repository::touch_last_accessed(&template.job_template_type)
            .await;
    }

    repository::insert(&aggregate).await?;
    Ok(aggregate.job_uuid)
}

/// Settle a running job with its result
pub async fn finish(
    job_uuid: Uuid,
    result: bool,
    output_json: Option<serde_json::Value>,
) -> anyhow::Result<()> {
    let updated = repository::set_finished(job_uuid, Utc::now(), result, output_json).await?;
    if !updated {
        return Err(anyhow::anyhow!("Unknown job: {}", job_uuid));
    }
    Ok(())
}

/// Replace the job's log blob
pub async fn append_log(job_uuid: Uuid, log_json: serde_json::Value) -> anyhow::Result<()> {
    let updated = repository::set_log(job_uuid, log_json).await?;
    if !updated {
        return Err(anyhow::anyhow!("Unknown job: {}", job_uuid));
    }
    Ok(())
}

pub async fn get_by_uuid(job_uuid: Uuid) -> anyhow::Result<Option<Job>> {
    repository::get_by_uuid(job_uuid).await
}

pub async fn list_all() -> anyhow::Result<Vec<Job>> {
    repository::list_all().await
}

pub async fn list_visible() -> anyhow::Result<Vec<Job>> {
    repository::list_visible().await
}

pub async fn delete(job_uuid: Uuid) -> anyhow::Result<bool> {
    repository::delete(job_uuid).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support;

    fn dto(job_type: &str) -> JobDto {
        JobDto {
            job_type: job_type.into(),
            triggered_by: Some("runner@example.org".into()),
            ..Default::default()
        }
    }

    #[test]
    fn started_job_has_no_duration_until_finished() {
        test_support::run(async {
            let uuid = start(dto("syncupstream")).await.unwrap();

            let running = get_by_uuid(uuid).await.unwrap().unwrap();
            assert!(running.duration().is_none());
            assert_eq!(running.job_result, None);

            finish(uuid, true, Some(serde_json::json!({"synced": 12})))
                .await
                .unwrap();

            let done = get_by_uuid(uuid).await.unwrap().unwrap();
            let duration = done.duration().expect("finished job has a duration");
            assert!(duration.num_seconds() >= 0);
            assert_eq!(done.job_result, Some(true));
            assert!(done.output_json.is_some());
        });
    }

    #[test]
    fn finishing_an_unknown_job_fails() {
        test_support::run(async {
            assert!(finish(Uuid::new_v4(), false, None).await.is_err());
        });
    }

    #[test]
    fn job_with_unknown_template_is_rejected() {
        test_support::run(async {
            let mut bad = dto("loadtemplate");
            bad.template_id = Some(99999);
            assert!(start(bad).await.is_err());
        });
    }

    #[test]
    fn hidden_jobs_stay_off_the_visible_list() {
        test_support::run(async {
            let hidden = start(dto("hiddenjob")).await.unwrap();
            let mut visible_dto = dto("visiblejob");
            visible_dto.visible_on_url = true;
            let visible = start(visible_dto).await.unwrap();

            let listed = list_visible().await.unwrap();
            assert!(listed.iter().any(|j| j.job_uuid == visible));
            assert!(!listed.iter().any(|j| j.job_uuid == hidden));
        });
    }
}
