use super::repository;
use contracts::domain::a007_job_template::aggregate::{JobTemplate, JobTemplateDto};

pub async fn create(dto: JobTemplateDto) -> anyhow::Result<i32> {
    let aggregate = JobTemplate::new_for_insert(dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::insert(&aggregate).await
}

pub async fn update(dto: JobTemplateDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: i32) -> anyhow::Result<Option<JobTemplate>> {
    repository::get_by_id(id).await
}

pub async fn get_by_type(template_type: &str) -> anyhow::Result<Option<JobTemplate>> {
    repository::get_by_type(template_type).await
}

pub async fn list_all() -> anyhow::Result<Vec<JobTemplate>> {
    repository::list_all().await
}

/// Record that a runner just pulled this template
pub async fn mark_accessed(template_type: &str) -> anyhow::Result<()> {
    let touched = repository::touch_last_accessed(template_type).await?;
    if !touched {
        return Err(anyhow::anyhow!("Unknown job template: {}", template_type));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support;

    fn dto(template_type: &str) -> JobTemplateDto {
        JobTemplateDto {
            job_template_type: template_type.into(),
            job_template_name: format!("{} template", template_type),
            job_template_params: vec!["PACKAGE_NAME".into(), "BUILD_TAG".into()],
            job_template_json: Some(serde_json::json!({"job": {"type": template_type}})),
            ..Default::default()
        }
    }

    #[test]
    fn template_type_is_unique() {
        test_support::run(async {
            create(dto("syncdownstream")).await.unwrap();
            assert!(create(dto("syncdownstream")).await.is_err());
        });
    }

    #[test]
    fn mark_accessed_stamps_the_template() {
        test_support::run(async {
            create(dto("stringchange")).await.unwrap();
            mark_accessed("stringchange").await.unwrap();

            let found = get_by_type("stringchange").await.unwrap().unwrap();
            assert!(found.last_accessed.is_some());
            assert_eq!(found.job_template_params.len(), 2);
        });
    }
}
